use log::{debug, warn};

use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};

/// Validate the configuration
pub fn validate_config(config: &Config) -> SiteResult<()> {
    validate_source_directory(config)?;
    validate_content_directory(config)?;
    validate_theme_directory(config)?;
    validate_naming(config)?;
    Ok(())
}

/// Validate the site root
fn validate_source_directory(config: &Config) -> SiteResult<()> {
    let source = &config.source;

    if !source.is_dir() {
        return Err(SiteError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    debug!("Source directory: {}", source.display());
    Ok(())
}

/// Validate the content directory
fn validate_content_directory(config: &Config) -> SiteResult<()> {
    let content = config.content_path();

    if !content.is_dir() {
        return Err(SiteError::Config(format!(
            "Content directory does not exist: {}",
            content.display()
        )));
    }

    debug!("Content directory: {}", content.display());
    Ok(())
}

/// Validate the active theme directory
fn validate_theme_directory(config: &Config) -> SiteResult<()> {
    let theme = config.theme_path();

    if !theme.is_dir() {
        return Err(SiteError::Config(format!(
            "Theme '{}' not found at {}",
            config.theme,
            theme.display()
        )));
    }

    if !theme.join("static").is_dir() {
        warn!("Theme '{}' has no static directory; the build will fail when copying assets", config.theme);
    }

    debug!("Theme directory: {}", theme.display());
    Ok(())
}

/// Validate separator and extensions
fn validate_naming(config: &Config) -> SiteResult<()> {
    if config.separator.trim().is_empty() {
        return Err(SiteError::Config("Header separator must not be empty".to_string()));
    }

    for (name, ext) in [("content_ext", &config.content_ext), ("output_ext", &config.output_ext)] {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(SiteError::Config(format!(
                "{} must be a bare extension such as \"md\", got {:?}",
                name, ext
            )));
        }
    }

    if config.content_ext == config.output_ext {
        warn!(
            "content_ext and output_ext are both '{}'; output names will equal source names",
            config.content_ext
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::create_dir_all(dir.path().join("themes/default/static")).unwrap();
        let mut config = Config::default();
        config.source = dir.path().to_path_buf();
        (dir, config)
    }

    #[test]
    fn test_valid_site() {
        let (_dir, config) = site();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_missing_content_dir() {
        let (_dir, mut config) = site();
        config.content_dir = "posts".into();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("Content directory"));
    }

    #[test]
    fn test_missing_theme() {
        let (_dir, mut config) = site();
        config.theme = "fancy".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("fancy"));
    }

    #[test]
    fn test_bad_extension_and_separator() {
        let (_dir, mut config) = site();
        config.output_ext = ".html".to_string();
        assert!(validate_config(&config).is_err());

        let (_dir, mut config) = site();
        config.separator = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }
}
