//! inkpress turns a directory of markdown documents with `key: value`
//! headers into a static site rendered through a liquid theme.

pub mod builder;
pub mod cli;
pub mod config;
pub mod content;
pub mod front_matter;
pub mod markdown;
pub mod theme;
pub mod utils;

pub use builder::{build_site, BuildReport};
pub use config::Config;
pub use utils::error::{SiteError, SiteResult};
