use std::path::PathBuf;

use log::info;

use crate::cli::commands::load_site_config;
use crate::cli::types::Cli;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the clean command
pub fn handle_clean_command(cli: &Cli, config_files: Option<Vec<PathBuf>>) -> BoxResult<()> {
    let config = load_site_config(cli, config_files)?;
    let output_dir = config.output_path();

    info!("Cleaning site at {}", output_dir.display());
    fs::remove_directory(&output_dir)?;
    info!("Site cleaned successfully");
    Ok(())
}
