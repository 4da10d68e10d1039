mod locate;

pub use locate::FrameLocation;

use tracing::debug;

use crate::common::{
    colors_to_text, decode_object, decode_with_recovery, text_to_bytes, CodecResult, Raster,
    TransformRecord,
};

pub struct FrameReader();

impl FrameReader {
    pub fn read<R: Raster>(img: &R) -> CodecResult<TransformRecord> {
        debug!("Reading frame from {}x{} raster...", img.width(), img.height());

        debug!("Locating frame...");
        let loc = FrameLocation::locate(img)?;
        debug!(
            "Found {} blocks per row, block width {:.2}, {} data blocks",
            loc.block_count_x(),
            loc.block_width(),
            loc.data_len()
        );

        debug!("Extracting blocks...");
        let colors = loc.extract(img);
        let text = colors_to_text(&colors);

        debug!("Decoding payload...");
        let wire = decode_with_recovery(&text, |t| decode_object(&text_to_bytes(t)?))?;

        TransformRecord::try_from(wire)
    }
}

#[cfg(test)]
mod reader_tests {
    use image::imageops::{self, FilterType};

    use super::FrameReader;
    use crate::{
        builder::FrameBuilder,
        common::{sample_record, symbol_to_pixel, CodecError, RasterMut},
    };

    #[test]
    fn test_reader_0() {
        let rec = sample_record();
        let img = FrameBuilder::new(&rec).size(1024, 768).render().unwrap();
        assert_eq!(FrameReader::read(&img).unwrap(), rec);
    }

    #[test]
    fn test_reader_downscaled() {
        let rec = sample_record();
        let img = FrameBuilder::new(&rec).size(2048, 1536).render().unwrap();
        let (w, h) = img.dimensions();
        let small = imageops::resize(&img, w / 2, h / 2, FilterType::Nearest);
        assert_eq!(FrameReader::read(&small).unwrap(), rec);
    }

    #[test]
    fn test_reader_corrupted_payload() {
        let rec = sample_record();
        let mut img = FrameBuilder::new(&rec).size(1024, 768).render().unwrap();

        // Overwrite the last data block with a symbol that is neither valid nor a dropped pad
        let frame = FrameBuilder::new(&rec).size(1024, 768).build().unwrap();
        let last = frame.data_len() + 3;
        let h = img.height() as i32;
        img.fill_rect(last as i32 * 8, h - 8, 8, 8, symbol_to_pixel(63));
        assert_eq!(FrameReader::read(&img), Err(CodecError::MalformedPayload));
    }
}
