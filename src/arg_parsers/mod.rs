//! Parsers for the option values a watermark is described with,
//! e.g. `bottom-right`, `+10+10` or `100x100`.

mod anchor;
pub use anchor::*;
mod gravity;
pub use gravity::*;
mod offset;
pub use offset::*;
mod style;
pub use style::*;
mod tile_size;
pub use tile_size::*;
pub mod numbers;
