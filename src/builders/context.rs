use std::path::Path;

use crate::{builders::CommandBuilder, error::MarkError, shell::ShellArg};

/// Source and destination of one build call, both ready for the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub source: ShellArg,
    /// Equal to `source` when the image is watermarked in place.
    pub destination: ShellArg,
}

impl CommandBuilder {
    /// Resolves where to read from and where to write to.
    ///
    /// An empty `output` means the source file is overwritten.
    pub fn prepare(&self, output: &Path) -> Result<ResolvedPaths, MarkError> {
        if self.source.as_os_str().is_empty() {
            return Err(MarkError::InvalidPath("source path is empty".to_string()));
        }
        let source = path_arg(&self.source)?;
        let destination = if output.as_os_str().is_empty() {
            source.clone()
        } else {
            path_arg(output)?
        };
        Ok(ResolvedPaths {
            source,
            destination,
        })
    }
}

/// Quotes a path for the command line; the only way paths enter a command.
///
/// Relative paths starting with `-` get a `./` prefix so imagemagick
/// does not take them for an option.
pub(crate) fn path_arg(path: &Path) -> Result<ShellArg, MarkError> {
    let utf8 = path.to_str().ok_or_else(|| {
        MarkError::InvalidPath(format!("`{}' is not valid UTF-8", path.display()))
    })?;
    if utf8.contains('\0') {
        return Err(MarkError::InvalidPath(format!(
            "`{}' contains a NUL byte",
            utf8.escape_debug()
        )));
    }
    if utf8.starts_with('-') {
        return Ok(ShellArg::quote(&format!("./{utf8}")));
    }
    Ok(ShellArg::quote(utf8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file() {
        let builder = CommandBuilder::new("photos/cat.jpg");
        let paths = builder.prepare(Path::new("out/cat marked.jpg")).unwrap();
        assert_eq!(paths.source.as_str(), "'photos/cat.jpg'");
        assert_eq!(paths.destination.as_str(), "'out/cat marked.jpg'");
    }

    #[test]
    fn test_empty_output_means_in_place() {
        let builder = CommandBuilder::new("/tmp/it's here.png");
        let paths = builder.prepare(Path::new("")).unwrap();
        assert_eq!(paths.destination, paths.source);
        assert_eq!(paths.source.as_str(), r"'/tmp/it'\''s here.png'");
    }

    #[test]
    fn test_dash_paths_are_not_options() {
        let builder = CommandBuilder::new("-tile.png");
        let paths = builder.prepare(Path::new("--help")).unwrap();
        assert_eq!(paths.source.as_str(), "'./-tile.png'");
        assert_eq!(paths.destination.as_str(), "'./--help'");
        assert_eq!(
            path_arg(Path::new("-draw")).unwrap().as_str(),
            "'./-draw'"
        );
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let builder = CommandBuilder::new("");
        assert!(matches!(
            builder.prepare(Path::new("out.png")),
            Err(MarkError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let builder = CommandBuilder::new("in.png");
        assert!(matches!(
            builder.prepare(Path::new("out\0.png")),
            Err(MarkError::InvalidPath(_))
        ));
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn test_non_utf8_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let builder = CommandBuilder::new(OsStr::from_bytes(b"f\xFEle.png"));
        assert!(matches!(
            builder.prepare(Path::new("")),
            Err(MarkError::InvalidPath(_))
        ));
    }
}
