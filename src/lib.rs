//! `watermagick` builds imagemagick command lines that stamp a text or image
//! watermark onto a picture. It never runs them: the [`CommandString`] it
//! returns is meant for `sh -c`, with every path and piece of text quoted.
//!
//! ```
//! use std::path::Path;
//! use watermagick::{Anchor, Mark, Watermark, WatermarkOptions};
//!
//! let options = WatermarkOptions::builder()
//!     .anchor(Anchor::BottomRight)
//!     .opacity(0.3)
//!     .build()?;
//! let command = Watermark::new("photo.jpg")
//!     .with_options(options)
//!     .command(&Mark::Image("logo.png".into()), Path::new("out.jpg"))?;
//! assert_eq!(
//!     command.to_string(),
//!     "composite -gravity SouthEast -geometry +0+0 -dissolve 30% 'logo.png' 'photo.jpg' 'out.jpg'"
//! );
//! # Ok::<(), watermagick::error::MarkError>(())
//! ```

#![forbid(unsafe_code)]

mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod builders;
pub mod command;
pub mod error;
pub mod help;
pub mod options;
pub mod shell;
mod utils;
pub mod watermark;

pub use arg_parsers::{Anchor, ImageStyle, Offset, TileSize};
pub use builders::CommandBuilder;
pub use command::CommandString;
pub use options::{Font, WatermarkOptions};
pub use watermark::{Mark, Watermark};
