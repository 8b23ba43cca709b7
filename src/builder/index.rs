use std::path::{Path, PathBuf};

use liquid::model::Value;
use liquid::Object;
use log::debug;

use crate::content::RenderedDocument;
use crate::theme::{document_to_liquid, resolve_template, Naming, Target, TemplateEngine};
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Render the listing template with every document under `posts` and write
/// it as the index page, replacing any previous one.
pub fn render_index(
    documents: &[RenderedDocument],
    engine: &dyn TemplateEngine,
    naming: &Naming,
    site: &Object,
    output_dir: &Path,
) -> SiteResult<PathBuf> {
    let template = resolve_template(engine, naming, Target::Collection)?;

    let posts = documents
        .iter()
        .map(|rendered| document_to_liquid(&rendered.document, naming, &rendered.output_name))
        .collect::<Vec<Value>>();

    let mut globals = site.clone();
    globals.insert("posts".into(), Value::Array(posts));
    let html = engine.render(&template, &globals)?;

    let index_path = output_dir.join(naming.index_page());
    fs::write_file(&index_path, &html)?;
    debug!("Generated {}", index_path.display());

    Ok(index_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Document;
    use crate::front_matter::parse_header;
    use crate::theme::Theme;
    use std::fs as stdfs;

    fn rendered(file_name: &str, title: &str) -> RenderedDocument {
        RenderedDocument {
            document: Document {
                source_path: PathBuf::from(file_name),
                file_name: file_name.to_string(),
                content: String::new(),
                header: parse_header(&format!("title: {}\n---\n", title), "---").unwrap(),
            },
            output_name: file_name.replace(".md", ".html"),
        }
    }

    #[test]
    fn test_index_lists_documents() {
        let theme_dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        stdfs::write(
            theme_dir.path().join("list.html"),
            "{{ heading }}{% for p in posts %}<a href=\"{{ p.path }}\">{{ p.title }}</a>{% endfor %}",
        )
        .unwrap();
        // An override named like the index must not be picked for the listing
        stdfs::write(theme_dir.path().join("index.html"), "WRONG").unwrap();
        let theme = Theme::load(theme_dir.path(), "html").unwrap();

        let mut site = Object::new();
        site.insert("heading".into(), Value::scalar("Posts:"));
        let docs = vec![rendered("a.md", "First"), rendered("b.md", "Second")];

        let path = render_index(&docs, &theme, &Naming::new("md", "html"), &site, out.path()).unwrap();
        assert_eq!(path, out.path().join("index.html"));
        assert_eq!(
            stdfs::read_to_string(path).unwrap(),
            "Posts:<a href=\"a.html\">First</a><a href=\"b.html\">Second</a>"
        );
    }

    #[test]
    fn test_index_overwrites_previous() {
        let theme_dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        stdfs::write(theme_dir.path().join("list.html"), "{{ posts | size }}").unwrap();
        stdfs::write(out.path().join("index.html"), "stale content").unwrap();
        let theme = Theme::load(theme_dir.path(), "html").unwrap();

        render_index(&[], &theme, &Naming::new("md", "html"), &Object::new(), out.path()).unwrap();
        assert_eq!(stdfs::read_to_string(out.path().join("index.html")).unwrap(), "0");
    }

    #[test]
    fn test_missing_listing_template() {
        let theme_dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        stdfs::write(theme_dir.path().join("single.html"), "x").unwrap();
        let theme = Theme::load(theme_dir.path(), "html").unwrap();

        let err = render_index(&[], &theme, &Naming::new("md", "html"), &Object::new(), out.path())
            .unwrap_err();
        assert!(err.to_string().contains("list.html"));
    }
}
