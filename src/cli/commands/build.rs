use std::path::PathBuf;

use log::info;

use crate::builder;
use crate::cli::commands::load_site_config;
use crate::cli::types::Cli;
use crate::config::validate_config;
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(cli: &Cli, config_files: Option<Vec<PathBuf>>) -> BoxResult<()> {
    let config = load_site_config(cli, config_files)?;
    validate_config(&config)?;

    info!("Building site from {}", config.source.display());
    let report = builder::build_site(&config).map_err(|e| {
        format!(
            "{} (output in {} may be partially updated)",
            e,
            config.output_path().display()
        )
    })?;

    info!(
        "Site built successfully: {} page(s) and {} written",
        report.pages.len(),
        report.index.display()
    );
    Ok(())
}
