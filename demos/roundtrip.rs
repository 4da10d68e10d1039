use std::error::Error;

use colorframe::{Area, FrameBuilder, FrameReader, ImageSize, TransformOptions, TransformRecord};

fn main() -> Result<(), Box<dyn Error>> {
    let record = TransformRecord {
        size: ImageSize { width: 1920, height: 1080, depth: 0 },
        options: TransformOptions {
            grid_size: 16,
            swap: true,
            negative: false,
            has_key: true,
            rotate: false,
        },
        areas: vec![
            Area { x: 120, y: 80, width: 640, height: 360 },
            Area { x: 1000, y: 500, width: 256, height: 256 },
        ],
    };

    // Frame sized for a 1920x1080 image
    let img = FrameBuilder::new(&record).size(1920, 1080).render()?;
    img.save("./frame.png")?;
    println!("Frame saved to: frame.png ({}x{})", img.width(), img.height());

    let img = image::open("./frame.png")?.to_rgba8();
    let decoded = FrameReader::read(&img)?;
    println!("Decoded: {decoded:?}");
    assert_eq!(decoded, record);

    Ok(())
}
