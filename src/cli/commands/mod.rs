mod build;
mod clean;
mod new;

pub use build::handle_build_command;
pub use clean::handle_clean_command;
pub use new::{handle_new_command, scaffold_site};

use std::path::PathBuf;

use log::debug;

use crate::cli::types::Cli;
use crate::config::{self, Config};
use crate::utils::error::SiteResult;

/// Load the site configuration and apply the command-line overrides
pub(crate) fn load_site_config(cli: &Cli, config_files: Option<Vec<PathBuf>>) -> SiteResult<Config> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&source, config_files)?;

    if let Some(destination) = &cli.destination {
        // Relative destinations are taken from the working directory, not the site root
        config.output_dir = if destination.is_relative() {
            std::env::current_dir()?.join(destination)
        } else {
            destination.clone()
        };
        debug!("Output directory overridden: {}", config.output_dir.display());
    }
    if let Some(theme) = &cli.theme {
        config.theme = theme.clone();
        debug!("Theme overridden: {}", theme);
    }

    Ok(config)
}
