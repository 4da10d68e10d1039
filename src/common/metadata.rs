use super::utils::{CodecError, CodecResult};

// Wire format constants
//------------------------------------------------------------------------------

/// Frame format version carried in the second header block.
pub const VERSION: u8 = 1;

/// Smallest block edge, in pixels, that still samples cleanly after downscaling.
pub const MIN_COLOR_BYTE_BLOCK_WIDTH: u32 = 4;

/// Long edge an encoded image may be downscaled to while staying decodable.
pub const MIN_RESIZED_IMAGE_WIDTH: u32 = 512;

/// Blocks every frame carries besides data: 4 header blocks and 1 footer block.
pub const HEADER_LEN: usize = 4;
pub const FRAME_OVERHEAD: usize = HEADER_LEN + 1;

// Header + footer must fit row 0 before any data wraps
pub const MIN_BLOCK_COUNT_X: u32 = FRAME_OVERHEAD as u32;

// Both block count and data length are stored as two 6-bit digits
pub const MAX_BLOCK_COUNT_X: u32 = 64 * 64 - 1;
pub const MAX_DATA_LEN: usize = 64 * 64 - 1;

// Geometry
//------------------------------------------------------------------------------

/// Block geometry chosen for a target raster on the encode side.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Geometry {
    pub block_width: u32,
    pub block_count_x: u32,
}

impl Geometry {
    pub fn new(block_width: u32, block_count_x: u32) -> CodecResult<Self> {
        debug_assert!(block_width > 0, "Block width must be positive");

        if block_count_x < MIN_BLOCK_COUNT_X {
            return Err(CodecError::RasterTooSmall);
        }
        if block_count_x > MAX_BLOCK_COUNT_X {
            return Err(CodecError::RasterTooLarge);
        }
        Ok(Self { block_width, block_count_x })
    }

    /// Picks a block width such that each block stays at least `MIN_COLOR_BYTE_BLOCK_WIDTH`
    /// pixels wide once the long edge is downscaled to `MIN_RESIZED_IMAGE_WIDTH`.
    pub fn select(width: u32, height: u32) -> CodecResult<Self> {
        let long_edge = width.max(height) as u64;
        let min_bw = MIN_COLOR_BYTE_BLOCK_WIDTH as u64;
        let min_rw = MIN_RESIZED_IMAGE_WIDTH as u64;

        let block_width = (min_bw * long_edge).div_ceil(min_rw).max(min_bw) as u32;
        Self::new(block_width, width / block_width)
    }

    pub fn count_hi(&self) -> u8 {
        (self.block_count_x / 64) as u8
    }

    pub fn count_lo(&self) -> u8 {
        (self.block_count_x % 64) as u8
    }

    pub fn block_count_y(&self, total_blocks: usize) -> u32 {
        total_blocks.div_ceil(self.block_count_x as usize) as u32
    }

    pub fn raster_width(&self) -> u32 {
        self.block_count_x * self.block_width
    }
}
