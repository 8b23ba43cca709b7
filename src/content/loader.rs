use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::{Config, SortOrder};
use crate::content::document::Document;
use crate::front_matter::{extract_body, parse_header};
use crate::markdown::MarkupConverter;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

/// Load every non-draft document directly inside `content_dir`.
///
/// Subdirectories, files without the content extension and symlinks that
/// do not resolve to a file are ignored. The first unreadable or malformed
/// file aborts the load.
pub fn load_documents(
    content_dir: &Path,
    config: &Config,
    converter: &dyn MarkupConverter,
) -> SiteResult<Vec<Document>> {
    info!("Loading documents from {}", content_dir.display());
    let suffix = format!(".{}", config.content_ext);
    let mut documents = Vec::new();

    for entry in WalkDir::new(content_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| SiteError::file(content_dir, e.into()))?;
        let path = entry.path();

        let is_file = if entry.path_is_symlink() {
            path.is_file()
        } else {
            entry.file_type().is_file()
        };
        if !is_file {
            debug!("Ignoring {}", path.display());
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(&suffix) {
            debug!("Ignoring {}", path.display());
            continue;
        }

        let document = parse_document(path, file_name, config, converter)?;
        if document.is_draft() {
            debug!("Skipping draft: {}", path.display());
            continue;
        }

        documents.push(document);
    }

    sort_documents(&mut documents, config.sort_by);
    info!("Loaded {} documents", documents.len());
    Ok(documents)
}

/// Read one content file and split it into header and converted body
pub fn parse_document(
    path: &Path,
    file_name: String,
    config: &Config,
    converter: &dyn MarkupConverter,
) -> SiteResult<Document> {
    debug!("Parsing document: {}", path.display());
    let text = fs::read_file(path)?;

    let header_error = |source| SiteError::Header {
        path: path.to_path_buf(),
        source,
    };
    let header = parse_header(&text, &config.separator).map_err(header_error)?;
    let body = extract_body(&text, &config.separator).map_err(header_error)?;

    Ok(Document {
        source_path: path.to_path_buf(),
        file_name,
        content: converter.convert(body),
        header,
    })
}

/// Order documents; ties on `created` fall back to file name
pub fn sort_documents(documents: &mut [Document], order: SortOrder) {
    match order {
        SortOrder::Name => documents.sort_by(|a, b| a.file_name.cmp(&b.file_name)),
        SortOrder::CreatedDesc => documents.sort_by(|a, b| {
            b.created()
                .cmp(&a.created())
                .then_with(|| a.file_name.cmp(&b.file_name))
        }),
        SortOrder::CreatedAsc => documents.sort_by(|a, b| {
            a.created()
                .cmp(&b.created())
                .then_with(|| a.file_name.cmp(&b.file_name))
        }),
    }
}
