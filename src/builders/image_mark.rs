use std::path::Path;

use crate::{
    builders::{context::path_arg, resolve, CommandBuilder},
    command::{CommandString, Invocation, Tool},
    error::MarkError,
    options::WatermarkOptions,
};

impl CommandBuilder {
    /// `composite` command that overlays `marker` onto the source image.
    ///
    /// Flags come first, then the marker, the source and the destination:
    /// `composite -gravity G -geometry +X+Y -dissolve N% [-tile] marker source destination`
    pub fn build_image_mark(
        &self,
        marker: &Path,
        output: &Path,
        options: &WatermarkOptions,
    ) -> Result<CommandString, MarkError> {
        let paths = self.prepare(output)?;
        if marker.as_os_str().is_empty() {
            return Err(MarkError::InvalidPath("marker image path is empty".to_string()));
        }
        let marker = path_arg(marker)?;

        let invocation = Invocation::new(Tool::Composite, paths.destination)
            .args(resolve::anchor_flag(options.anchor))
            .args(resolve::offset_flag(options.offset))
            .args(resolve::opacity_flag(options.opacity, options.style)?)
            .args(resolve::tile_flag(options.tiled))
            .arg(marker)
            .arg(paths.source);
        CommandString::single(invocation)
    }
}
