use image::Rgb;

use crate::common::{
    pixel_to_symbol, CodecError, CodecResult, Raster, FRAME_OVERHEAD, HEADER_LEN,
    MIN_BLOCK_COUNT_X, VERSION,
};

// Frame location
//------------------------------------------------------------------------------

/// Block geometry and data length recovered from the bottom row of a raster.
///
/// Block width is derived from the raster width, so a frame that was resized uniformly
/// still resolves to the right block centers.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FrameLocation {
    block_width: f64,
    block_count_x: u32,
    data_len: usize,
    height: u32,
}

impl FrameLocation {
    pub fn locate<R: Raster>(img: &R) -> CodecResult<Self> {
        let (w, h) = (img.width(), img.height());
        if w == 0 || h == 0 {
            return Err(CodecError::FrameNotFound);
        }

        // Bottom corners carry the block count
        let bottom = (h - 1) as f64;
        let hi = pixel_to_symbol(img.sample(0.0, bottom)) as u32;
        let lo = pixel_to_symbol(img.sample((w - 1) as f64, bottom)) as u32;
        let block_count_x = hi * 64 + lo;
        if block_count_x < MIN_BLOCK_COUNT_X || block_count_x > w {
            return Err(CodecError::FrameNotFound);
        }

        let block_width = w as f64 / block_count_x as f64;
        let mut loc = Self { block_width, block_count_x, data_len: 0, height: h };

        let ver = loc.read_symbol(img, 1);
        if ver != VERSION {
            return Err(CodecError::UnsupportedVersion(ver));
        }

        let len_lo = loc.read_symbol(img, 2) as usize;
        let len_hi = loc.read_symbol(img, 3) as usize;
        loc.data_len = len_lo + len_hi * 64;

        // Topmost block center must still fall inside the raster
        let (_, top) = loc.block_center(loc.data_len + FRAME_OVERHEAD - 1);
        if top < 0.0 {
            return Err(CodecError::FrameNotFound);
        }

        Ok(loc)
    }

    pub fn block_width(&self) -> f64 {
        self.block_width
    }

    pub fn block_count_x(&self) -> u32 {
        self.block_count_x
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    // Center of the i-th block, counting row-major from the bottom-left corner
    fn block_center(&self, idx: usize) -> (f64, f64) {
        let bcx = self.block_count_x as usize;
        let (r, c) = ((idx / bcx) as f64, (idx % bcx) as f64);
        let bw = self.block_width;
        let x = c * bw + bw / 2.0;
        let y = self.height as f64 - r * bw - bw / 2.0;
        (x, y)
    }

    fn sample_block<R: Raster>(&self, img: &R, idx: usize) -> Rgb<u8> {
        let (x, y) = self.block_center(idx);
        img.sample(x, y)
    }

    fn read_symbol<R: Raster>(&self, img: &R, idx: usize) -> u8 {
        pixel_to_symbol(self.sample_block(img, idx))
    }
}

// Data extraction
//------------------------------------------------------------------------------

impl FrameLocation {
    /// Samples every frame block and strips the header and footer, leaving the data colors in
    /// the order they were framed.
    pub fn extract<R: Raster>(&self, img: &R) -> Vec<Rgb<u8>> {
        let len = self.data_len;
        let bcx = self.block_count_x as usize;
        let raw = (0..len + FRAME_OVERHEAD).map(|i| self.sample_block(img, i)).collect::<Vec<_>>();

        if len + HEADER_LEN < bcx {
            return raw[HEADER_LEN..HEADER_LEN + len].to_vec();
        }

        let mut data = Vec::with_capacity(len);
        data.extend_from_slice(&raw[HEADER_LEN..bcx - 1]);
        data.extend_from_slice(&raw[bcx..]);
        data
    }
}
