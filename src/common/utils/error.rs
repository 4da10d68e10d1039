use std::fmt::{Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CodecError {
    // Frame builder
    EmptyAreas,
    DataTooLong,
    RasterTooSmall,
    RasterTooLarge,
    CanvasMismatch,
    EncodeError,

    // Symbol text
    UnknownSymbol(char),

    // Frame reader
    FrameNotFound,
    UnsupportedVersion(u8),
    DecodeError,
    MalformedPayload,
    InvalidPayload,
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let msg = match *self {
            // Frame builder
            Self::EmptyAreas => "Record has no areas",
            Self::DataTooLong => "Data too long",
            Self::RasterTooSmall => "Raster too small to hold a frame",
            Self::RasterTooLarge => "Raster too large for the frame header",
            Self::CanvasMismatch => "Canvas width is not a whole number of blocks",
            Self::EncodeError => "Failed to encode payload bytes",

            // Symbol text
            Self::UnknownSymbol(c) => return write!(f, "Unknown symbol {c:?}"),

            // Frame reader
            Self::FrameNotFound => "Frame not found",
            Self::UnsupportedVersion(v) => return write!(f, "Unsupported frame version {v}"),
            Self::DecodeError => "Failed to decode payload bytes",
            Self::MalformedPayload => "Malformed payload",
            Self::InvalidPayload => "Invalid payload",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CodecError {}

pub type CodecResult<T> = Result<T, CodecError>;

#[cfg(test)]
mod error_tests {
    use super::CodecError;

    #[test]
    fn test_display() {
        assert_eq!(CodecError::DataTooLong.to_string(), "Data too long");
        assert_eq!(CodecError::UnknownSymbol('=').to_string(), "Unknown symbol '='");
        assert_eq!(CodecError::UnsupportedVersion(2).to_string(), "Unsupported frame version 2");
        assert_eq!(CodecError::MalformedPayload.to_string(), "Malformed payload");
    }
}
