//! One source image, one set of options, any number of marks.

use std::path::{Path, PathBuf};

use crate::{
    builders::CommandBuilder, command::CommandString, error::MarkError,
    options::WatermarkOptions,
};

/// What gets stamped onto the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Text(String),
    /// Path to an image file to overlay.
    Image(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Watermark {
    builder: CommandBuilder,
    options: WatermarkOptions,
}

impl Watermark {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            builder: CommandBuilder::new(source),
            options: WatermarkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &Path {
        self.builder.source()
    }

    pub fn options(&self) -> &WatermarkOptions {
        &self.options
    }

    /// Builds the command that applies `mark` and writes the result to `output`,
    /// or back over the source when `output` is empty.
    pub fn command(&self, mark: &Mark, output: &Path) -> Result<CommandString, MarkError> {
        let result = match mark {
            Mark::Text(text) => self.builder.build_text_mark(text, output, &self.options),
            Mark::Image(marker) => self.builder.build_image_mark(marker, output, &self.options),
        };
        match &result {
            Ok(command) => tracing::debug!(
                source = %self.source().display(),
                tiled = self.options.tiled,
                piped = command.is_piped(),
                %command,
                "built watermark command"
            ),
            Err(err) => tracing::debug!(
                source = %self.source().display(),
                error = %err,
                "could not build watermark command"
            ),
        }
        result
    }

    pub fn text_command(&self, text: &str, output: &Path) -> Result<CommandString, MarkError> {
        self.command(&Mark::Text(text.to_string()), output)
    }

    pub fn image_command(&self, marker: &Path, output: &Path) -> Result<CommandString, MarkError> {
        self.command(&Mark::Image(marker.to_path_buf()), output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg_parsers::Anchor;

    #[test]
    fn test_dispatches_on_mark() {
        let watermark = Watermark::new("in.png");
        let text = watermark.text_command("hi", Path::new("out.png")).unwrap();
        assert_eq!(text.final_stage().tool(), crate::command::Tool::Convert);

        let image = watermark
            .image_command(Path::new("logo.png"), Path::new("out.png"))
            .unwrap();
        assert_eq!(image.final_stage().tool(), crate::command::Tool::Composite);
    }

    #[test]
    fn test_uses_bound_options() {
        let options = WatermarkOptions::builder()
            .anchor(Anchor::TopLeft)
            .build()
            .unwrap();
        let watermark = Watermark::new("in.png").with_options(options);
        let command = watermark
            .command(&Mark::Image(PathBuf::from("logo.png")), Path::new(""))
            .unwrap();
        assert!(command.to_string().starts_with("composite -gravity NorthWest "));
    }

    #[test]
    fn test_reusable_across_outputs() {
        let watermark = Watermark::new("in.png");
        let mark = Mark::Text("draft".to_string());
        let a = watermark.command(&mark, Path::new("a.png")).unwrap();
        let b = watermark.command(&mark, Path::new("b.png")).unwrap();
        assert_ne!(a, b);
        assert!(a.to_string().ends_with(" 'a.png'"));
        assert!(b.to_string().ends_with(" 'b.png'"));
    }
}
