pub mod assets;
pub mod index;
pub mod pages;
pub mod site;

pub use assets::copy_assets;
pub use index::render_index;
pub use pages::render_documents;
pub use site::{build_site, BuildReport};
