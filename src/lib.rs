//! # colorframe
//!
//! A Rust library for embedding image-transform metadata into a strip of solid-colored blocks
//! that is printed beneath, or composited onto, an image, and for reading it back from pixels.
//!
//! ## Features
//!
//! - **Self-describing geometry**: The strip stores its own block count and payload length, so
//!   it decodes after the image has been resized
//! - **64-color blocks**: Each block carries one 6-bit symbol, 2 bits per RGB channel
//! - **Padding repair**: Recovers payloads whose trailing text padding was lost in transport
//!
//! ## Quick Start
//!
//! ```rust
//! use colorframe::{Area, FrameBuilder, FrameReader, TransformRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut record = TransformRecord::default();
//! record.size.width = 1024;
//! record.size.height = 768;
//! record.options.grid_size = 16;
//! record.areas.push(Area { x: 0, y: 0, width: 512, height: 384 });
//!
//! let img = FrameBuilder::new(&record).size(1024, 768).render()?;
//! let decoded = FrameReader::read(&img)?;
//! assert_eq!(decoded, record);
//! # Ok(())
//! # }
//! ```
//!
//! ## Frame Layout
//!
//! Blocks are laid out row-major starting at the bottom-left corner. Row 0 holds
//! `[count_hi, version, len_lo, len_hi, data.., count_lo]`, where `count` is the number of
//! blocks per row and `len` the number of data blocks, both split into two 6-bit digits. Data
//! that does not fit row 0 wraps into the rows above it.
//!
//! The payload is serialized with `bincode`, turned into padded base64 text, and each character
//! becomes one block. Block width is picked so that each block stays at least
//! [`MIN_COLOR_BYTE_BLOCK_WIDTH`] pixels wide once the image is downscaled to
//! [`MIN_RESIZED_IMAGE_WIDTH`].

pub mod builder;
pub(crate) mod common;
pub mod reader;

use image::RgbaImage;

pub use builder::{Frame, FrameBuilder};
pub use common::metadata::{
    Geometry, MIN_COLOR_BYTE_BLOCK_WIDTH, MIN_RESIZED_IMAGE_WIDTH, VERSION,
};
pub use common::quant::{pixel_to_symbol, symbol_to_pixel};
pub use common::raster::{create_raster, Raster, RasterMut};
pub use common::record::{Area, ImageSize, TransformOptions, TransformRecord};
pub use common::utils::{CodecError, CodecResult};
pub use common::{codec::colors_to_text, codec::text_to_colors, padding::decode_with_recovery};
pub use reader::{FrameLocation, FrameReader};

/// Encodes `record` into a frame sized for a `width` x `height` image.
///
/// The returned raster is `block_count_x * block_width` pixels wide, so it comes out narrower
/// than `width` when `width` is not a multiple of the selected block width. See
/// [`Geometry::raster_width`].
pub fn encode(record: &TransformRecord, width: u32, height: u32) -> CodecResult<RgbaImage> {
    FrameBuilder::new(record).size(width, height).render()
}

/// Reads a record back from a raster whose bottom rows hold a frame.
pub fn decode<R: Raster>(raster: &R) -> CodecResult<TransformRecord> {
    FrameReader::read(raster)
}
