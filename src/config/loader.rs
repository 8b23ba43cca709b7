use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde_yaml::Value;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{SiteError, SiteResult};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Load site configuration from config files.
///
/// Explicit `config_files` are merged in order, later files winning key by
/// key. Without them, the default file names are looked up in `source_dir`.
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> SiteResult<Config> {
    let source_dir = source_dir.as_ref();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(source_dir),
    };

    let mut merged = Value::Mapping(Default::default());
    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in &config_paths {
            debug!("Loading configuration from {}", path.display());
            let value = read_config_file(path)?;
            merge_values(&mut merged, value);
        }
    }

    let mut config: Config = serde_yaml::from_value(merged)
        .map_err(|e| SiteError::Config(format!("Invalid configuration: {}", e)))?;

    // Set source directory if not already set
    if config.source == crate::config::defaults::default_source() {
        config.source = source_dir.to_path_buf();
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Load and validate in one step
pub fn load_and_validate<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> SiteResult<Config> {
    let config = load_config(source_dir, config_files)?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files(source_dir: &Path) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// Parse one configuration file into a generic value based on its extension
fn read_config_file(path: &Path) -> SiteResult<Value> {
    if !path.exists() {
        return Err(SiteError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| SiteError::file(path, e))?;

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let value = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str::<Value>(&content).map_err(|e| parse_error(path, e))?,
        "toml" => toml::from_str::<Value>(&content).map_err(|e| parse_error(path, e))?,
        "json" => serde_json::from_str::<Value>(&content).map_err(|e| parse_error(path, e))?,
        other => {
            return Err(SiteError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            )));
        }
    };

    // An empty YAML file parses as null
    Ok(match value {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    })
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> SiteError {
    SiteError::Config(format!(
        "Failed to parse configuration ({}): {}",
        path.display(),
        err
    ))
}

/// Merge `overlay` into `base`; nested mappings merge key by key
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
