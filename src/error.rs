use std::fmt::Display;

/// Everything that can go wrong while building a watermark command.
///
/// Every variant aborts the build call; no partial command is ever returned.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkError {
    /// An option value has no mapping to an ImageMagick flag.
    UnsupportedOption { option: &'static str, value: String },
    /// A path cannot be placed on a command line.
    InvalidPath(String),
    /// The two stages of a tiled command do not hand off through the pipe.
    MalformedPipeline(&'static str),
    /// The command-line front-end was invoked incorrectly.
    Usage(String),
}

impl MarkError {
    pub fn unsupported(option: &'static str, value: impl ToString) -> Self {
        MarkError::UnsupportedOption {
            option,
            value: value.to_string(),
        }
    }
}

impl Display for MarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // same `quoting' style imagemagick uses in its own diagnostics
        match self {
            MarkError::UnsupportedOption { option, value } => {
                write!(f, "watermagick: unsupported value for option `{option}': {value}")
            }
            MarkError::InvalidPath(msg) => write!(f, "watermagick: invalid path: {msg}"),
            MarkError::MalformedPipeline(msg) => {
                write!(f, "watermagick: malformed pipeline: {msg}")
            }
            MarkError::Usage(msg) => write!(f, "watermagick: {msg}"),
        }
    }
}

impl std::error::Error for MarkError {}
