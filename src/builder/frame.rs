use image::{Rgb, RgbaImage};

use crate::common::{
    create_raster, symbol_to_pixel, CodecError, CodecResult, Geometry, RasterMut, MAX_DATA_LEN,
    VERSION,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Block {
    Empty,
    Header(Rgb<u8>),
    Data(Rgb<u8>),
    Footer(Rgb<u8>),
}

impl Block {
    pub fn color(&self) -> Option<Rgb<u8>> {
        match *self {
            Block::Empty => None,
            Block::Header(c) | Block::Data(c) | Block::Footer(c) => Some(c),
        }
    }
}

// Frame
//------------------------------------------------------------------------------

/// Header, data and footer blocks in row-major order, row 0 being the bottom row.
///
/// Row 0 reads `[count_hi, version, len_lo, len_hi, data.., count_lo]`. When data is too
/// short to reach the last column, the gap is left as [`Block::Empty`]; otherwise the footer is
/// spliced in at the last column and the remaining data wraps into the rows above.
#[derive(Debug, Clone)]
pub struct Frame {
    blocks: Vec<Block>,
    geo: Geometry,
    data_len: usize,
}

impl Frame {
    pub fn new(data: &[Rgb<u8>], geo: Geometry) -> CodecResult<Self> {
        let data_len = data.len();
        if data_len > MAX_DATA_LEN {
            return Err(CodecError::DataTooLong);
        }

        let last_col = geo.block_count_x as usize - 1;
        let mut blocks = Vec::with_capacity(data_len + last_col + 2);
        blocks.extend(
            [geo.count_hi(), VERSION, (data_len % 64) as u8, (data_len / 64) as u8]
                .map(|s| Block::Header(symbol_to_pixel(s))),
        );
        blocks.extend(data.iter().copied().map(Block::Data));

        let footer = Block::Footer(symbol_to_pixel(geo.count_lo()));
        if blocks.len() < last_col {
            blocks.resize(last_col, Block::Empty);
            blocks.push(footer);
        } else {
            blocks.insert(last_col, footer);
        }

        Ok(Self { blocks, geo, data_len })
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn geometry(&self) -> Geometry {
        self.geo
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn block_count_y(&self) -> u32 {
        self.geo.block_count_y(self.blocks.len())
    }

    pub fn height(&self) -> u32 {
        self.block_count_y() * self.geo.block_width
    }
}

// Render
//------------------------------------------------------------------------------

impl Frame {
    /// Renders the frame onto a transparent raster sized to the block grid.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = create_raster(self.geo.raster_width(), self.height());
        self.draw(&mut canvas);
        canvas
    }

    /// Paints the frame anchored to the bottom-left corner of `canvas`. Empty blocks are left
    /// untouched, so whatever lies beneath shows through.
    pub fn draw<R: RasterMut>(&self, canvas: &mut R) {
        let bw = self.geo.block_width as i64;
        let bcx = self.geo.block_count_x as usize;
        let bottom = canvas.height() as i64;

        // Blocks overlap their right and top neighbours by 1px to avoid seams when resampled
        for (i, blk) in self.blocks.iter().enumerate() {
            let Some(px) = blk.color() else {
                continue;
            };
            let (r, c) = ((i / bcx) as i64, (i % bcx) as i64);
            let x = c * bw;
            let y = bottom - (r + 1) * bw;
            canvas.fill_rect(x as i32, y as i32, bw as u32 + 1, bw as u32 + 1, px);
        }
    }
}
