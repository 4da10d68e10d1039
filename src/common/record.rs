use bincode::Options;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::utils::{CodecError, CodecResult};

// Domain record
//------------------------------------------------------------------------------

/// Dimensions of the transformed image. `depth` is the frame index for multi-frame images.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct TransformOptions {
    pub grid_size: u32,
    pub swap: bool,
    pub negative: bool,
    pub has_key: bool,
    pub rotate: bool,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub struct Area {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Transform metadata carried by a frame: which areas of an image were transformed, how, and
/// at what image size.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TransformRecord {
    pub size: ImageSize,
    pub options: TransformOptions,
    pub areas: Vec<Area>,
}

// Wire object
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub(crate) struct WireRecord {
    s: Vec<u32>,
    o: Option<WireOptions>,
    c: Vec<WireArea>,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
struct WireOptions {
    g: u32,
    s: bool,
    n: bool,
    k: bool,
    r: bool,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
struct WireArea {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

impl From<&TransformRecord> for WireRecord {
    fn from(rec: &TransformRecord) -> Self {
        let ImageSize { width, height, depth } = rec.size;
        let opts = rec.options;
        Self {
            s: vec![width, height, depth],
            o: Some(WireOptions {
                g: opts.grid_size,
                s: opts.swap,
                n: opts.negative,
                k: opts.has_key,
                r: opts.rotate,
            }),
            c: rec
                .areas
                .iter()
                .map(|a| WireArea { x: a.x, y: a.y, w: a.width, h: a.height })
                .collect(),
        }
    }
}

impl TryFrom<WireRecord> for TransformRecord {
    type Error = CodecError;

    fn try_from(wire: WireRecord) -> CodecResult<Self> {
        let (Some(o), &[width, height, depth]) = (wire.o, wire.s.as_slice()) else {
            return Err(CodecError::InvalidPayload);
        };
        if wire.c.is_empty() {
            return Err(CodecError::InvalidPayload);
        }

        Ok(Self {
            size: ImageSize { width, height, depth },
            options: TransformOptions {
                grid_size: o.g,
                swap: o.s,
                negative: o.n,
                has_key: o.k,
                rotate: o.r,
            },
            areas: wire
                .c
                .iter()
                .map(|a| Area { x: a.x, y: a.y, width: a.w, height: a.h })
                .collect(),
        })
    }
}

// Binary object codec
//------------------------------------------------------------------------------

// Trailing bytes are rejected so a text with lost padding fails instead of decoding garbage
fn object_options() -> impl Options {
    bincode::DefaultOptions::new().with_varint_encoding().reject_trailing_bytes()
}

pub(crate) fn encode_object(wire: &WireRecord) -> CodecResult<Vec<u8>> {
    object_options().serialize(wire).map_err(|e| {
        debug!("Object encode failed: {e}");
        CodecError::EncodeError
    })
}

pub(crate) fn decode_object(bytes: &[u8]) -> CodecResult<WireRecord> {
    object_options().deserialize(bytes).map_err(|e| {
        debug!("Object decode failed: {e}");
        CodecError::DecodeError
    })
}

#[cfg(test)]
pub(crate) fn sample_record() -> TransformRecord {
    TransformRecord {
        size: ImageSize { width: 1024, height: 768, depth: 0 },
        options: TransformOptions {
            grid_size: 16,
            swap: true,
            negative: false,
            has_key: true,
            rotate: false,
        },
        areas: vec![
            Area { x: 0, y: 0, width: 512, height: 384 },
            Area { x: 600, y: 200, width: 128, height: 300 },
        ],
    }
}

#[cfg(test)]
mod record_tests {
    use super::{decode_object, encode_object, sample_record, TransformRecord, WireRecord};
    use crate::common::utils::CodecError;

    #[test]
    fn test_object_roundtrip() {
        let rec = sample_record();
        let wire = WireRecord::from(&rec);
        let bytes = encode_object(&wire).unwrap();
        let decoded = decode_object(&bytes).unwrap();
        assert_eq!(decoded, wire);
        assert_eq!(TransformRecord::try_from(decoded).unwrap(), rec);
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = encode_object(&WireRecord::from(&sample_record())).unwrap();
        bytes.push(0);
        assert_eq!(decode_object(&bytes), Err(CodecError::DecodeError));
    }

    #[test]
    fn test_truncated_bytes_rejected() {
        let bytes = encode_object(&WireRecord::from(&sample_record())).unwrap();
        assert_eq!(decode_object(&bytes[..bytes.len() - 1]), Err(CodecError::DecodeError));
    }

    #[test]
    fn test_missing_areas() {
        let mut rec = sample_record();
        rec.areas.clear();
        let wire = WireRecord::from(&rec);
        assert_eq!(TransformRecord::try_from(wire), Err(CodecError::InvalidPayload));
    }

    #[test]
    fn test_missing_options() {
        let mut wire = WireRecord::from(&sample_record());
        wire.o = None;
        assert_eq!(TransformRecord::try_from(wire), Err(CodecError::InvalidPayload));
    }

    #[test]
    fn test_bad_size_vector() {
        let mut wire = WireRecord::from(&sample_record());
        wire.s.pop();
        assert_eq!(TransformRecord::try_from(wire.clone()), Err(CodecError::InvalidPayload));
        wire.s.extend([0, 7]);
        assert_eq!(TransformRecord::try_from(wire), Err(CodecError::InvalidPayload));
    }
}
