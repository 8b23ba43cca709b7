use log::debug;

use crate::config::Config;
use crate::content::Document;
use crate::theme::engine::TemplateEngine;
use crate::utils::error::{SiteError, SiteResult};

/// Stem of the template used for the collection listing
pub const LIST_TEMPLATE: &str = "list";

/// Stem of the fallback template for a single document
pub const SINGLE_TEMPLATE: &str = "single";

/// Stem of the listing page written to the output directory
pub const INDEX_PAGE: &str = "index";

/// What is about to be rendered
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// The whole document collection
    Collection,
    /// One document
    Document(&'a Document),
}

/// File naming shared by template lookup and output writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    pub content_ext: String,
    pub output_ext: String,
}

impl Naming {
    pub fn new(content_ext: impl Into<String>, output_ext: impl Into<String>) -> Self {
        Naming {
            content_ext: content_ext.into(),
            output_ext: output_ext.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Naming::new(config.content_ext.clone(), config.output_ext.clone())
    }

    pub fn listing_template(&self) -> String {
        format!("{}.{}", LIST_TEMPLATE, self.output_ext)
    }

    pub fn single_template(&self) -> String {
        format!("{}.{}", SINGLE_TEMPLATE, self.output_ext)
    }

    pub fn index_page(&self) -> String {
        format!("{}.{}", INDEX_PAGE, self.output_ext)
    }

    /// Output file name of a document; also the name of its override template
    pub fn output_name(&self, document: &Document) -> String {
        document.output_name(&self.content_ext, &self.output_ext)
    }

    pub fn slug<'a>(&self, document: &'a Document) -> &'a str {
        document.slug(&self.content_ext)
    }
}

/// Pick the template for `target`.
///
/// Collections always get the listing template. A document gets the template
/// named after its output file when the theme has one, else the single
/// template. A missing listing or single template is a configuration error.
pub fn resolve_template(
    engine: &dyn TemplateEngine,
    naming: &Naming,
    target: Target<'_>,
) -> SiteResult<String> {
    match target {
        Target::Collection => require(engine, naming.listing_template()),
        Target::Document(document) => {
            let override_name = naming.output_name(document);
            if engine.has_template(&override_name) {
                debug!("Using override template {} for {}", override_name, document.file_name);
                return Ok(override_name);
            }
            require(engine, naming.single_template())
        }
    }
}

fn require(engine: &dyn TemplateEngine, name: String) -> SiteResult<String> {
    if engine.has_template(&name) {
        Ok(name)
    } else {
        Err(SiteError::Config(format!(
            "Theme is missing required template '{}'",
            name
        )))
    }
}
