//! Option values to literal imagemagick syntax.
//!
//! Flag fragments come back as [`ShellArg`] words; fragments of a `-draw`
//! primitive come back as plain strings and are quoted together with the rest
//! of the primitive later on.

use crate::{
    arg_parsers::{Anchor, ImageStyle, Offset, TileSize},
    error::MarkError,
    options::Font,
    shell::ShellArg,
};

/// `-gravity SouthEast`
pub fn anchor_flag(anchor: Anchor) -> [ShellArg; 2] {
    [ShellArg::verbatim("-gravity"), gravity_name(anchor)]
}

/// The bare gravity name, as used both after `-gravity` and inside draw primitives.
pub(crate) fn gravity_name(anchor: Anchor) -> ShellArg {
    ShellArg::verbatim(anchor.gravity().to_string())
}

/// `-geometry +X+Y`; zero offsets are spelled out too.
pub fn offset_flag(offset: Offset) -> [ShellArg; 2] {
    [ShellArg::verbatim("-geometry"), ShellArg::verbatim(offset.to_string())]
}

/// `-dissolve 30%` or `-watermark 30%` for image marks.
pub fn opacity_flag(opacity: f64, style: ImageStyle) -> Result<[ShellArg; 2], MarkError> {
    let percent = opacity_percent(opacity)?;
    Ok([
        ShellArg::verbatim(format!("-{}", style.blend())),
        ShellArg::verbatim(format!("{percent}%")),
    ])
}

/// `-tile`, or nothing.
pub fn tile_flag(tiled: bool) -> Option<ShellArg> {
    tiled.then(|| ShellArg::verbatim("-tile"))
}

/// `-pointsize 24 -font 'Arial'`, or nothing.
pub fn font_flag(font: Option<&Font>) -> Result<Vec<ShellArg>, MarkError> {
    let Some(font) = font else {
        return Ok(Vec::new());
    };
    if font.name.trim().is_empty() {
        return Err(MarkError::unsupported("font", "empty font name"));
    }
    if font.name.contains('\0') {
        return Err(MarkError::unsupported("font", font.name.escape_debug()));
    }
    if font.point_size == 0 {
        return Err(MarkError::unsupported("pointsize", font.point_size));
    }
    Ok(vec![
        ShellArg::verbatim("-pointsize"),
        ShellArg::verbatim(font.point_size.to_string()),
        ShellArg::verbatim("-font"),
        ShellArg::quote(&font.name),
    ])
}

/// `-size 100x100`, the canvas a tiled text mark is drawn on.
pub fn canvas_size_flag(tile_size: TileSize) -> Result<[ShellArg; 2], MarkError> {
    if tile_size.is_empty() {
        return Err(MarkError::unsupported("tile-size", tile_size));
    }
    Ok([ShellArg::verbatim("-size"), ShellArg::verbatim(tile_size.to_string())])
}

/// `rotate 15` draw primitive, or an empty string when there is nothing to rotate.
pub fn rotate_fragment(degrees: Option<i32>) -> String {
    match degrees {
        Some(degrees) if degrees.rem_euclid(360) != 0 => format!("rotate {degrees}"),
        _ => String::new(),
    }
}

/// Opacity as the whole percentage `composite` expects.
pub fn opacity_percent(opacity: f64) -> Result<u8, MarkError> {
    check_opacity(opacity)?;
    // in range by the check above, so the cast cannot saturate
    Ok((opacity * 100.0).round() as u8)
}

/// Opacity as the alpha component of an `rgba()` color, at most three decimals.
pub fn opacity_alpha(opacity: f64) -> Result<String, MarkError> {
    check_opacity(opacity)?;
    // adding zero turns -0 into 0
    let rounded = (opacity * 1000.0).round() / 1000.0 + 0.0;
    Ok(rounded.to_string())
}

fn check_opacity(opacity: f64) -> Result<(), MarkError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(())
    } else {
        Err(MarkError::unsupported("opacity", opacity))
    }
}
