//! The option bag every watermark command is built from.

use crate::{
    arg_parsers::{Anchor, ImageStyle, Offset, TileSize},
    error::MarkError,
};

pub const DEFAULT_OPACITY: f64 = 0.3;
pub const DEFAULT_POINT_SIZE: u32 = 24;
pub const DEFAULT_TILE_SIZE: TileSize = TileSize::new(100, 100);

/// Font used for text watermarks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    /// A font name imagemagick knows (`Arial`) or a path to a font file.
    pub name: String,
    pub point_size: u32,
}

impl Font {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            point_size: DEFAULT_POINT_SIZE,
        }
    }

    pub fn with_point_size(mut self, point_size: u32) -> Self {
        self.point_size = point_size;
        self
    }
}

/// Validated watermark settings.
///
/// Use [`WatermarkOptions::builder`] to get normalized values;
/// the fields are public so that callers holding an already-validated
/// configuration can fill them in directly. Command builders re-check
/// anything that cannot be expressed on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkOptions {
    pub anchor: Anchor,
    pub offset: Offset,
    /// Fraction in `[0, 1]`.
    pub opacity: f64,
    pub tiled: bool,
    /// Only consulted for image watermarks.
    pub style: ImageStyle,
    pub rotate: Option<i32>,
    pub font: Option<Font>,
    /// Only consulted for tiled text watermarks.
    pub tile_size: TileSize,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            anchor: Anchor::default(),
            offset: Offset::default(),
            opacity: DEFAULT_OPACITY,
            tiled: false,
            style: ImageStyle::default(),
            rotate: None,
            font: None,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl WatermarkOptions {
    pub fn builder() -> WatermarkOptionsBuilder {
        WatermarkOptionsBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WatermarkOptionsBuilder {
    options: WatermarkOptions,
}

impl WatermarkOptionsBuilder {
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.options.anchor = anchor;
        self
    }

    pub fn offset(mut self, x: i32, y: i32) -> Self {
        self.options.offset = Offset::new(x, y);
        self
    }

    /// Values outside `[0, 1]` are clamped when the options are built.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.options.opacity = opacity;
        self
    }

    pub fn tiled(mut self, tiled: bool) -> Self {
        self.options.tiled = tiled;
        self
    }

    pub fn style(mut self, style: ImageStyle) -> Self {
        self.options.style = style;
        self
    }

    pub fn rotate(mut self, degrees: i32) -> Self {
        self.options.rotate = Some(degrees);
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.options.font = Some(font);
        self
    }

    pub fn tile_size(mut self, tile_size: TileSize) -> Self {
        self.options.tile_size = tile_size;
        self
    }

    pub fn build(self) -> Result<WatermarkOptions, MarkError> {
        let mut options = self.options;
        if options.opacity.is_nan() {
            return Err(MarkError::unsupported("opacity", options.opacity));
        }
        options.opacity = options.opacity.clamp(0.0, 1.0);

        if let Some(font) = &options.font {
            if font.name.trim().is_empty() {
                return Err(MarkError::unsupported("font", "empty font name"));
            }
            if font.point_size == 0 {
                return Err(MarkError::unsupported("pointsize", font.point_size));
            }
        }
        if options.tile_size.is_empty() {
            return Err(MarkError::unsupported("tile-size", options.tile_size));
        }
        Ok(options)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for WatermarkOptions {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use crate::utils::arbitrary;
        use quickcheck::Arbitrary;

        Self {
            anchor: Anchor::arbitrary(g),
            offset: Offset::arbitrary(g),
            opacity: arbitrary::unit_float(g),
            tiled: bool::arbitrary(g),
            style: ImageStyle::arbitrary(g),
            rotate: Option::<i16>::arbitrary(g).map(i32::from),
            font: arbitrary::optional_font(g),
            tile_size: arbitrary::tile_size(g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WatermarkOptions::builder().build().unwrap();
        assert_eq!(options, WatermarkOptions::default());
        assert_eq!(options.anchor, Anchor::Center);
        assert_eq!(options.offset, Offset::new(0, 0));
        assert_eq!(options.opacity, 0.3);
        assert!(!options.tiled);
        assert_eq!(options.tile_size, TileSize::new(100, 100));
    }

    #[test]
    fn test_opacity_is_clamped() {
        let high = WatermarkOptions::builder().opacity(1.7).build().unwrap();
        assert_eq!(high.opacity, 1.0);
        let low = WatermarkOptions::builder().opacity(-0.2).build().unwrap();
        assert_eq!(low.opacity, 0.0);
        let inf = WatermarkOptions::builder()
            .opacity(f64::INFINITY)
            .build()
            .unwrap();
        assert_eq!(inf.opacity, 1.0);
    }

    #[test]
    fn test_nan_opacity_is_rejected() {
        let err = WatermarkOptions::builder()
            .opacity(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, MarkError::UnsupportedOption { option: "opacity", .. }));
    }

    #[test]
    fn test_font_validation() {
        assert!(WatermarkOptions::builder()
            .font(Font::new("  "))
            .build()
            .is_err());
        assert!(WatermarkOptions::builder()
            .font(Font::new("Arial").with_point_size(0))
            .build()
            .is_err());
        let ok = WatermarkOptions::builder()
            .font(Font::new("DejaVu Sans"))
            .build()
            .unwrap();
        assert_eq!(ok.font.unwrap().point_size, DEFAULT_POINT_SIZE);
    }

    #[test]
    fn test_zero_tile_size_is_rejected() {
        assert_eq!(
            WatermarkOptions::builder()
                .tile_size(TileSize::new(0, 50))
                .build(),
            Err(MarkError::unsupported("tile-size", "0x50"))
        );
    }
}
