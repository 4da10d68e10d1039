use base64::{engine::general_purpose::STANDARD, Engine};
use image::Rgb;
use tracing::debug;

use super::{
    quant::{pixel_to_symbol, symbol_to_pixel},
    utils::{CodecError, CodecResult},
};

// Alphabet
//------------------------------------------------------------------------------

pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Reserved by the text encoding to mark the end of meaningful data. Never a grid symbol.
pub const PADDING: char = '=';

pub fn char_to_symbol(c: char) -> CodecResult<u8> {
    match c {
        'A'..='Z' => Ok(c as u8 - b'A'),
        'a'..='z' => Ok(c as u8 - b'a' + 26),
        '0'..='9' => Ok(c as u8 - b'0' + 52),
        '+' => Ok(62),
        '/' => Ok(63),
        _ => Err(CodecError::UnknownSymbol(c)),
    }
}

pub fn symbol_to_char(symbol: u8) -> char {
    ALPHABET[(symbol & 0x3f) as usize] as char
}

// Symbol grid
//------------------------------------------------------------------------------

pub fn text_to_colors(text: &str) -> CodecResult<Vec<Rgb<u8>>> {
    text.chars().map(|c| char_to_symbol(c).map(symbol_to_pixel)).collect()
}

pub fn colors_to_text(colors: &[Rgb<u8>]) -> String {
    colors.iter().map(|&px| symbol_to_char(pixel_to_symbol(px))).collect()
}

// Alphabet text codec
//------------------------------------------------------------------------------

pub fn bytes_to_text(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn text_to_bytes(text: &str) -> CodecResult<Vec<u8>> {
    STANDARD.decode(text).map_err(|e| {
        debug!("Text decode failed: {e}");
        CodecError::DecodeError
    })
}

// Renders trailing padding sentinels as the first alphabet symbol, since the grid has no color
// for them. Padding recovery undoes this on the read side.
pub fn fill_padding(text: &str) -> String {
    let data = text.trim_end_matches(PADDING);
    let pad = text.len() - data.len();
    let mut res = String::with_capacity(text.len());
    res.push_str(data);
    res.extend(std::iter::repeat(symbol_to_char(0)).take(pad));
    res
}

#[cfg(test)]
mod codec_tests {
    use super::{
        bytes_to_text, char_to_symbol, colors_to_text, fill_padding, symbol_to_char,
        text_to_bytes, text_to_colors, ALPHABET,
    };
    use crate::common::utils::CodecError;

    #[test]
    fn test_alphabet_indices() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(char_to_symbol(c as char), Ok(i as u8));
            assert_eq!(symbol_to_char(i as u8), c as char);
        }
    }

    #[test]
    fn test_text_roundtrip() {
        let text = std::str::from_utf8(ALPHABET).unwrap();
        let colors = text_to_colors(text).unwrap();
        assert_eq!(colors.len(), 64);
        assert_eq!(colors_to_text(&colors), text);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(text_to_colors("").unwrap(), vec![]);
        assert_eq!(colors_to_text(&[]), "");
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(text_to_colors("QUJD="), Err(CodecError::UnknownSymbol('=')));
        assert_eq!(text_to_colors("ab-c"), Err(CodecError::UnknownSymbol('-')));
    }

    #[test]
    fn test_fill_padding() {
        assert_eq!(fill_padding("QQ=="), "QQAA");
        assert_eq!(fill_padding("QUI="), "QUIA");
        assert_eq!(fill_padding("QUJD"), "QUJD");
    }

    #[test]
    fn test_bytes_text() {
        assert_eq!(bytes_to_text(b"A"), "QQ==");
        assert_eq!(text_to_bytes("QUJD").unwrap(), b"ABC");
        assert_eq!(text_to_bytes("QU=D"), Err(CodecError::DecodeError));
    }
}
