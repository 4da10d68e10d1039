pub mod cast;
pub mod error;

pub use cast::*;
pub use error::*;
