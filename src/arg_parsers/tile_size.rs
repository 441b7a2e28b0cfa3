use std::{ffi::OsStr, fmt::Display, str::FromStr};

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::numbers::strip_and_parse_number;

/// Size of the transparent canvas a tiled text watermark is drawn on, `WxH`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TileSize {
    type Err = ArgParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| ArgParseErr::with_msg(format!("invalid tile size `{s}'")))?;
        let size = Self {
            width: strip_and_parse_number(width)?,
            height: strip_and_parse_number(height)?,
        };
        if size.is_empty() {
            return Err(ArgParseErr::with_msg(format!("invalid tile size `{s}'")));
        }
        Ok(size)
    }
}

impl TryFrom<&OsStr> for TileSize {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        value
            .to_str()
            .ok_or_else(ArgParseErr::new)
            .and_then(FromStr::from_str)
    }
}
