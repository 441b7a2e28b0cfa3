//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

use crate::{arg_parsers::TileSize, options::Font};

/// A float in `[0, 1]`, with the two endpoints showing up more often than chance.
#[must_use]
pub fn unit_float(gen: &mut quickcheck::Gen) -> f64 {
    match u8::arbitrary(gen) % 8 {
        0 => 0.0,
        1 => 1.0,
        _ => f64::from(u16::arbitrary(gen)) / f64::from(u16::MAX),
    }
}

#[must_use]
pub fn tile_size(gen: &mut quickcheck::Gen) -> TileSize {
    TileSize::new(
        u32::from(u16::arbitrary(gen)).max(1),
        u32::from(u16::arbitrary(gen)).max(1),
    )
}

#[must_use]
pub fn optional_font(gen: &mut quickcheck::Gen) -> Option<Font> {
    if bool::arbitrary(gen) {
        let name = gen
            .choose(&["Arial", "DejaVu Sans", "/usr/share/fonts/it's mine.ttf"])
            .copied()
            .unwrap_or("Arial");
        Some(Font::new(name).with_point_size(u32::from(u8::arbitrary(gen)).max(1)))
    } else {
        None
    }
}
