use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::utils::round_to_index;

// Raster capability
//------------------------------------------------------------------------------

/// Pixel access the codec needs from a graphics backend. Coordinates are rounded to the
/// nearest pixel and clamped into the raster before use.
pub trait Raster {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Color at a point, ignoring alpha.
    fn sample(&self, x: f64, y: f64) -> Rgb<u8>;
}

/// Raster the encoder can paint blocks onto.
pub trait RasterMut: Raster {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, px: Rgb<u8>);
}

/// Creates a fully transparent raster.
pub fn create_raster(width: u32, height: u32) -> RgbaImage {
    RgbaImage::new(width, height)
}

impl Raster for RgbaImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn sample(&self, x: f64, y: f64) -> Rgb<u8> {
        let (x, y) = (round_to_index(x, self.width()), round_to_index(y, self.height()));
        let Rgba([r, g, b, _]) = *self.get_pixel(x, y);
        Rgb([r, g, b])
    }
}

impl RasterMut for RgbaImage {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, px: Rgb<u8>) {
        let Rgb([r, g, b]) = px;
        draw_filled_rect_mut(self, Rect::at(x, y).of_size(w, h), Rgba([r, g, b, 255]));
    }
}

impl Raster for RgbImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn sample(&self, x: f64, y: f64) -> Rgb<u8> {
        *self.get_pixel(round_to_index(x, self.width()), round_to_index(y, self.height()))
    }
}

impl RasterMut for RgbImage {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, px: Rgb<u8>) {
        draw_filled_rect_mut(self, Rect::at(x, y).of_size(w, h), px);
    }
}
