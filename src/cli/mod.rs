pub mod commands;
pub mod logging;
pub mod types;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(logging::level_for(cli.debug, cli.verbose(), cli.quiet()));
    logging::configure_backtrace(cli.trace);

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: &types::Cli) -> BoxResult<()> {
    match &cli.command {
        Some(types::Commands::Build { config, .. }) => {
            commands::handle_build_command(cli, config.clone())
        }
        Some(types::Commands::Clean { config }) => {
            commands::handle_clean_command(cli, config.clone())
        }
        Some(types::Commands::New { path, force, blank }) => {
            commands::handle_new_command(path, *force, *blank)
        }
        // Default to build command if none provided
        None => commands::handle_build_command(cli, None),
    }
}
