pub mod codec;
pub mod metadata;
pub mod padding;
pub mod quant;
pub mod raster;
pub mod record;
pub mod utils;

pub use codec::*;
pub use metadata::*;
pub use padding::*;
pub use quant::*;
pub use raster::*;
pub use record::*;
pub use utils::*;
