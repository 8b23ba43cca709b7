use std::path::Path;

use fs_extra::dir::{self, CopyOptions};
use log::debug;

use crate::theme::STATIC_DIR;
use crate::utils::error::{SiteError, SiteResult};

/// Mirror `theme_dir/static` into `output_dir/static`, overwriting files with
/// the same relative path. Returns the number of bytes copied.
pub fn copy_assets(theme_dir: &Path, output_dir: &Path) -> SiteResult<u64> {
    let source = theme_dir.join(STATIC_DIR);
    let destination = output_dir.join(STATIC_DIR);

    if !source.is_dir() {
        return Err(SiteError::Assets(format!(
            "Static directory not found: {}",
            source.display()
        )));
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    options.copy_inside = true;

    debug!("Copying {} to {}", source.display(), destination.display());
    dir::copy(&source, &destination, &options).map_err(|e| {
        SiteError::Assets(format!(
            "Failed to copy {} to {}: {}",
            source.display(),
            destination.display(),
            e
        ))
    })
}
