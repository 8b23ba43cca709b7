pub mod engine;
pub mod resolver;
pub mod values;

pub use engine::{TemplateEngine, Theme, STATIC_DIR};
pub use resolver::{resolve_template, Naming, Target};
pub use values::{document_to_liquid, site_globals, yaml_to_liquid};
