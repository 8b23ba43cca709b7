use std::collections::HashSet;
use std::path::Path;

use liquid::Object;
use log::{debug, info, warn};

use crate::content::{Document, RenderedDocument};
use crate::theme::{document_to_liquid, resolve_template, Naming, Target, TemplateEngine};
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Render each document through its template and write it to `output_dir`.
///
/// Documents are rendered in order with `site` as the top-level context and
/// the document under `post`. Two documents with the same output name are
/// both written; the later one wins.
pub fn render_documents(
    documents: Vec<Document>,
    engine: &dyn TemplateEngine,
    naming: &Naming,
    site: &Object,
    output_dir: &Path,
) -> SiteResult<Vec<RenderedDocument>> {
    info!("Rendering {} pages...", documents.len());
    let mut rendered = Vec::with_capacity(documents.len());
    let mut written = HashSet::new();

    for document in documents {
        let output_name = naming.output_name(&document);
        let template = resolve_template(engine, naming, Target::Document(&document))?;
        debug!("Rendering {} with {}", document.file_name, template);

        let mut globals = site.clone();
        globals.insert("post".into(), document_to_liquid(&document, naming, &output_name));
        let html = engine.render(&template, &globals)?;

        let output_path = output_dir.join(&output_name);
        fs::write_file(&output_path, &html)?;
        if !written.insert(output_name.clone()) {
            warn!("{} overwrote an earlier page of the same name", output_path.display());
        }
        debug!("Generated {}", output_path.display());

        rendered.push(RenderedDocument { document, output_name });
    }

    Ok(rendered)
}
