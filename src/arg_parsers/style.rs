use std::{ffi::OsStr, str::FromStr};

use crate::{arg_parse_err::ArgParseErr, error::MarkError};

/// How an image watermark is blended into the source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::VariantArray)]
pub enum ImageStyle {
    /// Keeps the marker's colors, fading it by the opacity.
    #[default]
    Standard,
    /// Uses only the marker's luminance to lighten or darken the source.
    Colorless,
}

/// The `composite` operator that implements an [`ImageStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Blend {
    Dissolve,
    Watermark,
}

impl ImageStyle {
    pub fn blend(self) -> Blend {
        match self {
            ImageStyle::Standard => Blend::Dissolve,
            ImageStyle::Colorless => Blend::Watermark,
        }
    }
}

impl FromStr for ImageStyle {
    type Err = MarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the blend operator names are accepted too, people tend to know those
        match s.to_ascii_lowercase().as_str() {
            "standard" | "dissolve" => Ok(ImageStyle::Standard),
            "colorless" | "watermark" => Ok(ImageStyle::Colorless),
            _ => Err(MarkError::unsupported("style", s)),
        }
    }
}

impl TryFrom<&OsStr> for ImageStyle {
    type Error = ArgParseErr;

    fn try_from(value: &OsStr) -> Result<Self, Self::Error> {
        let utf8 = value.to_str().ok_or_else(ArgParseErr::new)?;
        Ok(ImageStyle::from_str(utf8)?)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for ImageStyle {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use strum::VariantArray;
        *g.choose(ImageStyle::VARIANTS).unwrap()
    }
}
