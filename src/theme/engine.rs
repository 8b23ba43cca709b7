use std::collections::HashMap;
use std::path::{Path, PathBuf};

use liquid::partials::{EagerCompiler, InMemorySource};
use liquid::{Object, ParserBuilder, Template};
use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs;

type Partials = EagerCompiler<InMemorySource>;

/// Directory inside a theme that is copied verbatim instead of parsed
pub const STATIC_DIR: &str = "static";

/// A named-template renderer
pub trait TemplateEngine {
    /// Whether a template with this name exists
    fn has_template(&self, name: &str) -> bool;

    /// Render the named template with `globals` as the top-level context
    fn render(&self, name: &str, globals: &Object) -> SiteResult<String>;
}

/// The liquid templates of one theme directory
pub struct Theme {
    root: PathBuf,
    templates: HashMap<String, Template>,
}

impl Theme {
    /// Parse every `*.<template_ext>` file under `theme_dir`, except the static
    /// subtree. Templates are named by their `/`-separated path relative to
    /// the theme root and can include each other by that name.
    pub fn load(theme_dir: &Path, template_ext: &str) -> SiteResult<Self> {
        debug!("Loading theme from {}", theme_dir.display());
        let sources = collect_sources(theme_dir, template_ext)?;

        let mut partials = Partials::empty();
        for (name, source) in &sources {
            partials.add(name.clone(), source.clone());
        }

        let parser = ParserBuilder::with_stdlib()
            .partials(partials)
            .build()
            .map_err(|e| SiteError::template(theme_dir.display().to_string(), e))?;

        let mut templates = HashMap::new();
        for (name, source) in sources {
            let template = parser
                .parse(&source)
                .map_err(|e| SiteError::template(name.as_str(), e))?;
            debug!("Loaded template: {}", name);
            templates.insert(name, template);
        }

        Ok(Theme {
            root: theme_dir.to_path_buf(),
            templates,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all loaded templates, sorted
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TemplateEngine for Theme {
    fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn render(&self, name: &str, globals: &Object) -> SiteResult<String> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| SiteError::template(name, "template not found"))?;

        template.render(globals).map_err(|e| SiteError::template(name, e))
    }
}

/// Read template sources as `(name, text)` pairs
fn collect_sources(theme_dir: &Path, template_ext: &str) -> SiteResult<Vec<(String, String)>> {
    let suffix = format!(".{}", template_ext);
    let mut sources = Vec::new();

    let walker = WalkDir::new(theme_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !(entry.depth() == 1 && entry.file_name() == STATIC_DIR));

    for entry in walker {
        let entry = entry.map_err(|e| SiteError::file(theme_dir, e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(theme_dir) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if name.ends_with(&suffix) {
            sources.push((name, fs::read_file(path)?));
        }
    }

    Ok(sources)
}
