use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "inkpress")]
#[command(about = "Minimal static site generator: markdown posts, liquid themes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root holding the config file (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Output directory (overrides `output_dir` from the config)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub destination: Option<PathBuf>,

    /// Theme name (overrides `theme` from the config)
    #[arg(long, value_name = "NAME", global = true)]
    pub theme: Option<String>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build your site
    #[command(alias = "b")]
    Build {
        /// Custom configuration file(s), merged in order
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Remove the output directory
    Clean {
        /// Custom configuration file(s), merged in order
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,
    },

    /// Create a new site scaffold in PATH
    #[command(alias = "n")]
    New {
        /// Path where the new site will be created
        path: PathBuf,

        /// Force creation even if PATH already exists and is not empty
        #[arg(long, default_value_t = false)]
        force: bool,

        /// Create the structure with bare templates and no sample post
        #[arg(long, default_value_t = false)]
        blank: bool,
    },
}

impl Cli {
    /// Whether the selected command asked for quiet output
    pub fn quiet(&self) -> bool {
        matches!(self.command, Some(Commands::Build { quiet: true, .. }))
    }

    /// Whether the selected command asked for verbose output
    pub fn verbose(&self) -> bool {
        matches!(self.command, Some(Commands::Build { verbose: true, .. }))
    }
}
