use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Order in which loaded documents are handed to the rest of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// File name, ascending
    #[default]
    Name,
    /// Newest `created` first
    CreatedDesc,
    /// Oldest `created` first
    CreatedAsc,
}

/// Site configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site root; relative directories below are resolved against it
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory holding the content files
    #[serde(default = "defaults::default_content_dir")]
    pub content_dir: PathBuf,

    /// Directory the generated site is written to
    #[serde(default = "defaults::default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory holding the themes
    #[serde(default = "defaults::default_themes_dir")]
    pub themes_dir: PathBuf,

    /// Active theme name
    #[serde(default = "defaults::default_theme")]
    pub theme: String,

    /// Extension of content files (without the dot)
    #[serde(default = "defaults::default_content_ext")]
    pub content_ext: String,

    /// Extension of templates and rendered pages (without the dot)
    #[serde(default = "defaults::default_output_ext")]
    pub output_ext: String,

    /// Line separating the header block from the body
    #[serde(default = "defaults::default_separator")]
    pub separator: String,

    /// Document ordering
    #[serde(default)]
    pub sort_by: SortOrder,

    /// Site-wide variables merged into every render context
    #[serde(default)]
    pub site: BTreeMap<String, serde_yaml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            content_dir: defaults::default_content_dir(),
            output_dir: defaults::default_output_dir(),
            themes_dir: defaults::default_themes_dir(),
            theme: defaults::default_theme(),
            content_ext: defaults::default_content_ext(),
            output_ext: defaults::default_output_ext(),
            separator: defaults::default_separator(),
            sort_by: SortOrder::default(),
            site: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Resolve a configured directory against the site root
    fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.source.join(dir)
        }
    }

    /// Absolute-or-rooted path of the content directory
    pub fn content_path(&self) -> PathBuf {
        self.resolve(&self.content_dir)
    }

    /// Absolute-or-rooted path of the output directory
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Directory of the active theme
    pub fn theme_path(&self) -> PathBuf {
        self.resolve(&self.themes_dir).join(&self.theme)
    }
}
