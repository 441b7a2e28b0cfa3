use std::path::Path;

use crate::{
    arg_parsers::{Anchor, Offset},
    builders::{resolve, CommandBuilder},
    command::{CommandString, Invocation, Pipeline, Tool, Word},
    error::MarkError,
    options::WatermarkOptions,
    shell::ShellArg,
};

/// How far the dark copy of the text is shifted from the light one, on both axes.
pub const DUAL_TEXT_OFFSET_DELTA: i32 = 1;

const LIGHT_FILL: [u8; 3] = [255, 255, 255];
const DARK_FILL: [u8; 3] = [0, 0, 0];

impl CommandBuilder {
    /// Command that draws `text` onto the source image.
    ///
    /// The text is drawn twice, light and dark, one pixel apart, so it stays
    /// readable on any background. Untiled marks are a single `convert`; tiled
    /// marks draw onto a transparent tile first and pipe it into `composite -tile`.
    pub fn build_text_mark(
        &self,
        text: &str,
        output: &Path,
        options: &WatermarkOptions,
    ) -> Result<CommandString, MarkError> {
        let paths = self.prepare(output)?;
        let text = quote_draw_string(text)?;

        let font = resolve::font_flag(options.font.as_ref())?;
        let draw = dual_color_draw(&text, options)?;
        let draw = [ShellArg::verbatim("-draw"), ShellArg::quote(&draw)];

        if options.tiled {
            let producer = Invocation::new(Tool::Convert, Word::Stream)
                .args(resolve::canvas_size_flag(options.tile_size)?)
                .arg(ShellArg::verbatim("xc:none"))
                .args(font)
                .args(resolve::anchor_flag(options.anchor))
                .args(draw);
            let consumer = Invocation::new(Tool::Composite, paths.destination)
                .args(resolve::tile_flag(true))
                .arg(Word::Stream)
                .arg(paths.source);
            Ok(CommandString::Piped(Pipeline::new(producer, consumer)?))
        } else {
            let invocation = Invocation::new(Tool::Convert, paths.destination)
                .arg(paths.source)
                .args(font)
                .args(draw);
            CommandString::single(invocation)
        }
    }
}

/// The `-draw` primitives: optional rotation, gravity, then the light and the dark copy.
fn dual_color_draw(text: &str, options: &WatermarkOptions) -> Result<String, MarkError> {
    let alpha = resolve::opacity_alpha(options.opacity)?;
    let (light_at, dark_at) = dual_text_offsets(options.offset)?;

    let mut primitives = Vec::with_capacity(4);
    let rotate = resolve::rotate_fragment(options.rotate);
    if !rotate.is_empty() {
        primitives.push(rotate);
    }
    primitives.push(gravity_primitive(options.anchor));
    primitives.push(text_primitive(LIGHT_FILL, &alpha, light_at, text));
    primitives.push(text_primitive(DARK_FILL, &alpha, dark_at, text));
    Ok(primitives.join(" "))
}

/// Where the light and the dark copy go. Both copies must stay addressable,
/// otherwise the dark one would be drawn over the light one.
fn dual_text_offsets(offset: Offset) -> Result<(Offset, Offset), MarkError> {
    let dark = offset
        .shifted(DUAL_TEXT_OFFSET_DELTA)
        .ok_or_else(|| MarkError::unsupported("geometry", offset))?;
    Ok((offset, dark))
}

fn gravity_primitive(anchor: Anchor) -> String {
    format!("gravity {}", resolve::gravity_name(anchor))
}

fn text_primitive([r, g, b]: [u8; 3], alpha: &str, at: Offset, text: &str) -> String {
    format!(
        "fill \"rgba({r},{g},{b},{alpha})\" text {},{} {text}",
        at.x, at.y
    )
}

/// Quotes `text` for the draw primitive grammar: single quotes,
/// with backslashes and single quotes backslash-escaped.
///
/// imagemagick expands `%` escapes in drawn text, so every `%` is doubled.
/// A leading `@` would make it read the text from a file instead, and there is
/// no escape for that, so such text is rejected.
///
/// The result is still untrusted as far as the shell is concerned and is quoted
/// again, as part of the whole `-draw` argument.
fn quote_draw_string(text: &str) -> Result<String, MarkError> {
    if text.contains('\0') || text.starts_with('@') {
        return Err(MarkError::unsupported("text", text.escape_debug()));
    }
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\'' | '\\' => quoted.push('\\'),
            '%' => quoted.push('%'),
            _ => {}
        }
        quoted.push(c);
    }
    quoted.push('\'');
    Ok(quoted)
}
