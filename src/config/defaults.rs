use std::path::PathBuf;

/// Default site root
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default content directory
pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

/// Default output directory
pub fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

/// Default directory holding themes
pub fn default_themes_dir() -> PathBuf {
    PathBuf::from("themes")
}

/// Default theme name
pub fn default_theme() -> String {
    "default".to_string()
}

/// Default extension of content files
pub fn default_content_ext() -> String {
    "md".to_string()
}

/// Default extension of templates and rendered pages
pub fn default_output_ext() -> String {
    "html".to_string()
}

/// Default header separator
pub fn default_separator() -> String {
    crate::front_matter::DEFAULT_SEPARATOR.to_string()
}
