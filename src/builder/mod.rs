mod frame;

pub use frame::{Block, Frame};

use image::RgbaImage;
use tracing::debug;

use crate::common::{
    bytes_to_text, encode_object, fill_padding, text_to_colors, CodecError, CodecResult,
    Geometry, RasterMut, TransformRecord, WireRecord, MIN_RESIZED_IMAGE_WIDTH,
};

pub struct FrameBuilder<'a> {
    record: &'a TransformRecord,
    width: u32,
    height: u32,
}

impl<'a> FrameBuilder<'a> {
    pub fn new(record: &'a TransformRecord) -> Self {
        Self { record, width: MIN_RESIZED_IMAGE_WIDTH, height: MIN_RESIZED_IMAGE_WIDTH }
    }

    pub fn record(&mut self, record: &'a TransformRecord) -> &mut Self {
        self.record = record;
        self
    }

    /// Size of the image the frame is printed beneath. Block width is picked from the long
    /// edge, block count from the width.
    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}x{}, Areas: {}, Grid: {} }}",
            self.width,
            self.height,
            self.record.areas.len(),
            self.record.options.grid_size
        )
    }
}

impl FrameBuilder<'_> {
    pub fn build(&self) -> CodecResult<Frame> {
        self.build_for(self.width, self.height)
    }

    fn build_for(&self, width: u32, height: u32) -> CodecResult<Frame> {
        debug!("Building frame {}...", self.metadata());
        if self.record.areas.is_empty() {
            return Err(CodecError::EmptyAreas);
        }

        let geo = Geometry::select(width, height)?;
        debug!("Selected geometry {geo:?}");

        debug!("Encoding record...");
        let bytes = encode_object(&WireRecord::from(self.record))?;
        let text = fill_padding(&bytes_to_text(&bytes));
        let colors = text_to_colors(&text)?;

        debug!("Framing {} data blocks...", colors.len());
        let frame = Frame::new(&colors, geo)?;
        debug!("Frame spans {} row(s)", frame.block_count_y());

        Ok(frame)
    }

    /// Builds the frame and renders it on its own transparent raster.
    ///
    /// The raster is `block_count_x * block_width` pixels wide, which is narrower than the
    /// requested width whenever that width is not a multiple of the block width.
    pub fn render(&self) -> CodecResult<RgbaImage> {
        Ok(self.build()?.render())
    }

    /// Builds a frame sized for `canvas` and paints it over its bottom rows. The size set with
    /// [`FrameBuilder::size`] is ignored.
    ///
    /// Fails with [`CodecError::CanvasMismatch`] when the canvas width is not a whole number of
    /// blocks, since the footer would then miss the bottom-right corner, and with
    /// [`CodecError::RasterTooSmall`] when the frame is taller than the canvas.
    pub fn composite<R: RasterMut>(&self, canvas: &mut R) -> CodecResult<()> {
        let (w, h) = (canvas.width(), canvas.height());
        let frame = self.build_for(w, h)?;
        if frame.geometry().raster_width() != w {
            return Err(CodecError::CanvasMismatch);
        }
        if frame.height() > h {
            return Err(CodecError::RasterTooSmall);
        }

        frame.draw(canvas);
        Ok(())
    }
}

#[cfg(test)]
mod builder_tests {
    use image::{Rgb, RgbImage};

    use super::FrameBuilder;
    use crate::{
        common::{sample_record, CodecError, TransformRecord},
        reader::FrameReader,
    };

    #[test]
    fn test_metadata() {
        let rec = sample_record();
        let mut builder = FrameBuilder::new(&rec);
        builder.size(1024, 768);
        assert_eq!(builder.metadata(), "{ Size: 1024x768, Areas: 2, Grid: 16 }");
    }

    #[test]
    fn test_build_geometry() {
        let rec = sample_record();
        let frame = FrameBuilder::new(&rec).size(1024, 768).build().unwrap();
        let geo = frame.geometry();
        assert_eq!(geo.block_width, 8);
        assert_eq!(geo.block_count_x, 128);
        assert_eq!(frame.block_count_y(), 1);
        assert_eq!(frame.data_len() % 4, 0);
    }

    #[test]
    fn test_render_size() {
        let rec = sample_record();
        let img = FrameBuilder::new(&rec).size(1000, 300).render().unwrap();
        assert_eq!(img.dimensions(), (1000, 8));
    }

    #[test]
    fn test_empty_areas() {
        let rec = TransformRecord::default();
        let res = FrameBuilder::new(&rec).build();
        assert_eq!(res.err(), Some(CodecError::EmptyAreas));
    }

    #[test]
    fn test_raster_too_small() {
        let rec = sample_record();
        let res = FrameBuilder::new(&rec).size(16, 16).build();
        assert_eq!(res.err(), Some(CodecError::RasterTooSmall));
    }

    #[test]
    fn test_composite_default_size() {
        let rec = sample_record();
        let mut photo = RgbImage::from_pixel(1024, 768, Rgb([30, 200, 90]));
        FrameBuilder::new(&rec).composite(&mut photo).unwrap();
        assert_eq!(FrameReader::read(&photo).unwrap(), rec);
        assert_eq!(photo.get_pixel(512, 0), &Rgb([30, 200, 90]));
    }

    #[test]
    fn test_composite_ragged_width() {
        let rec = sample_record();
        let mut photo = RgbImage::from_pixel(1003, 768, Rgb([30, 200, 90]));
        let res = FrameBuilder::new(&rec).size(1003, 768).composite(&mut photo);
        assert_eq!(res, Err(CodecError::CanvasMismatch));
        assert!(photo.pixels().all(|px| *px == Rgb([30, 200, 90])));
    }

    #[test]
    fn test_composite_short_canvas() {
        let rec = sample_record();
        let mut photo = RgbImage::new(1024, 4);
        let res = FrameBuilder::new(&rec).composite(&mut photo);
        assert_eq!(res, Err(CodecError::RasterTooSmall));
    }
}
