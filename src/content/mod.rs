pub mod document;
pub mod loader;

pub use document::{Document, RenderedDocument};
pub use loader::{load_documents, parse_document, sort_documents};
