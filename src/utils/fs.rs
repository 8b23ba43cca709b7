use std::fs;
use std::path::Path;

use crate::utils::error::{SiteError, SiteResult};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    fs::create_dir_all(path.as_ref()).map_err(|e| SiteError::file(path.as_ref(), e))
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        fs::remove_dir_all(path).map_err(|e| SiteError::file(path, e))?;
    }
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> SiteResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| SiteError::file(path.as_ref(), e))
}

/// Write a string to a file, replacing any existing content
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    fs::write(path.as_ref(), contents).map_err(|e| SiteError::file(path.as_ref(), e))
}
