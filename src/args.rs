//! `wm-watermark` argument parsing.
//!
//! Options are spelled the imagemagick way, with a single leading dash
//! (`-gravity SouthEast`), so we hand-roll the parser just like imagemagick does.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::{
    arg_parse_err::ArgParseErr,
    arg_parsers::{numbers::parse_numeric_arg, Anchor, ImageStyle, Offset, TileSize},
    error::MarkError,
    options::{Font, WatermarkOptions, WatermarkOptionsBuilder},
    watermark::Mark,
};

use strum::{EnumString, IntoStaticStr, VariantArray};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Arg {
    Text,
    Image,
    Gravity,
    Anchor,
    Geometry,
    Opacity,
    Style,
    Tile,
    Rotate,
    Font,
    Pointsize,
    TileSize,
}

impl Arg {
    pub fn needs_value(&self) -> bool {
        !matches!(self, Arg::Tile)
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Text => "watermark with this text",
            Arg::Image => "watermark with this image file",
            Arg::Gravity => "placement, e.g. SouthEast",
            Arg::Anchor => "placement, e.g. bottom-right",
            Arg::Geometry => "offset from the placement, e.g. +10+10",
            Arg::Opacity => "opacity between 0.0 and 1.0",
            Arg::Style => "image blending: standard or colorless",
            Arg::Tile => "repeat the watermark over the whole image",
            Arg::Rotate => "rotate text by this many degrees",
            Arg::Font => "font name or font file for text",
            Arg::Pointsize => "font size for text",
            Arg::TileSize => "canvas size for tiled text, e.g. 100x100",
        }
    }
}

/// Everything `wm-watermark` was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub struct CliPlan {
    pub source: PathBuf,
    /// Empty when the source is to be overwritten.
    pub output: PathBuf,
    pub mark: Mark,
    pub options: WatermarkOptions,
}

#[derive(Debug, Default)]
struct PlanBuilder {
    options: WatermarkOptionsBuilder,
    mark: Option<Mark>,
    font: Option<String>,
    point_size: Option<u32>,
    operands: Vec<OsString>,
}

impl PlanBuilder {
    fn apply_arg(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), MarkError> {
        let arg_string: &'static str = arg.into();
        if arg.needs_value() != value.is_some() {
            return Err(MarkError::Usage(format!(
                "argument requires a value: -{arg_string}"
            )));
        };

        self.apply_arg_inner(arg, value)
            .map_err(|arg_err| arg_err.into_mark_error(arg_string, value.unwrap_or_default()))
    }

    /// Split into its own function due to lack of try{} blocks on stable Rust.
    fn apply_arg_inner(&mut self, arg: Arg, value: Option<&OsStr>) -> Result<(), ArgParseErr> {
        let value = value.unwrap_or_default();
        let options = self.options.clone();
        self.options = match arg {
            Arg::Text => {
                let text = value
                    .to_str()
                    .ok_or_else(|| ArgParseErr::with_msg("text is not valid UTF-8"))?;
                self.set_mark(Mark::Text(text.to_string()))?;
                options
            }
            Arg::Image => {
                self.set_mark(Mark::Image(PathBuf::from(value)))?;
                options
            }
            Arg::Gravity | Arg::Anchor => options.anchor(Anchor::try_from(value)?),
            Arg::Geometry => {
                let offset = Offset::try_from(value)?;
                options.offset(offset.x, offset.y)
            }
            Arg::Opacity => options.opacity(parse_numeric_arg(value)?),
            Arg::Style => options.style(ImageStyle::try_from(value)?),
            Arg::Tile => options.tiled(true),
            Arg::Rotate => options.rotate(parse_numeric_arg(value)?),
            Arg::Font => {
                let font = value
                    .to_str()
                    .ok_or_else(|| ArgParseErr::with_msg("font name is not valid UTF-8"))?;
                self.font = Some(font.to_string());
                options
            }
            Arg::Pointsize => {
                self.point_size = Some(parse_numeric_arg(value)?);
                options
            }
            Arg::TileSize => options.tile_size(TileSize::try_from(value)?),
        };
        Ok(())
    }

    fn set_mark(&mut self, mark: Mark) -> Result<(), ArgParseErr> {
        if self.mark.is_some() {
            return Err(ArgParseErr::with_msg("only one of -text or -image may be given"));
        }
        self.mark = Some(mark);
        Ok(())
    }

    fn build(self) -> Result<CliPlan, MarkError> {
        let mark = self
            .mark
            .ok_or_else(|| MarkError::Usage("one of -text or -image is required".to_string()))?;

        // -pointsize may come before or after -font
        let mut options = self.options;
        match (self.font, self.point_size) {
            (Some(name), size) => {
                let mut font = Font::new(name);
                if let Some(size) = size {
                    font = font.with_point_size(size);
                }
                options = options.font(font);
            }
            (None, Some(_)) => {
                return Err(MarkError::Usage("-pointsize requires -font".to_string()))
            }
            (None, None) => {}
        }

        let mut operands = self.operands.into_iter();
        let (source, output) = match (operands.next(), operands.next(), operands.next()) {
            (Some(source), output, None) => (source, output.unwrap_or_default()),
            (None, _, _) => return Err(MarkError::Usage("no images defined".to_string())), // mimics imagemagick
            (Some(_), _, Some(extra)) => {
                return Err(MarkError::Usage(format!(
                    "unexpected argument `{}'",
                    extra.to_string_lossy()
                )))
            }
        };

        Ok(CliPlan {
            source: PathBuf::from(source),
            output: PathBuf::from(output),
            mark,
            options: options.build()?,
        })
    }
}

pub fn parse_args(args: Vec<OsString>) -> Result<CliPlan, MarkError> {
    if args.len() <= 1 {
        return Err(MarkError::Usage("No command-line arguments provided".to_string()));
    }

    let mut plan = PlanBuilder::default();
    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if starts_with_sign(&raw_arg) {
            // Same as imagemagick: a file named "-foobar.jpg" will be parsed as an option.
            let (_sign, string_arg) = sign_and_arg_name(raw_arg)?;
            let arg = Arg::try_from(string_arg.as_str())
                .map_err(|_| MarkError::Usage(format!("unrecognized option `{string_arg}'")))?;
            let value = if arg.needs_value() {
                Some(iter.next().ok_or_else(|| {
                    MarkError::Usage(format!("argument requires a value: -{string_arg}"))
                })?)
            } else {
                None
            };
            plan.apply_arg(arg, value.as_deref())?;
        } else {
            plan.operands.push(raw_arg);
        }
    }
    plan.build()
}

/// Checks if the string starts with a `-` or a `+`
fn starts_with_sign(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    let first_byte = bytes.first();
    // A lone "-" is stdin/stdout, and anything starting with two dashes is treated as filename
    (first_byte == Some(&b'-') || first_byte == Some(&b'+'))
        && bytes.len() > 1
        && bytes.get(1) != Some(&b'-')
}

/// Splits the string into a sign (- or +) and argument name
fn sign_and_arg_name(raw_arg: OsString) -> Result<(char, String), MarkError> {
    let mut string = raw_arg
        .into_string()
        .map_err(|s| MarkError::Usage(format!("unrecognized option `{}'", s.to_string_lossy())))?;
    let sign = string.remove(0);
    Ok((sign, string))
}
