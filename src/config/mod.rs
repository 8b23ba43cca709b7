mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::{load_and_validate, load_config};
pub use types::*;
pub use validation::validate_config;
