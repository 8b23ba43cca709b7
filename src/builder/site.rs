use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::builder::assets::copy_assets;
use crate::builder::index::render_index;
use crate::builder::pages::render_documents;
use crate::config::Config;
use crate::content::load_documents;
use crate::markdown::MarkdownRenderer;
use crate::theme::{site_globals, Naming, Theme};
use crate::utils::error::SiteResult;
use crate::utils::fs;

/// Build statistics
#[derive(Debug)]
pub struct BuildReport {
    /// Pages written, one per non-draft document
    pub pages: Vec<PathBuf>,
    /// The listing page
    pub index: PathBuf,
    /// Bytes of static assets copied
    pub asset_bytes: u64,
    /// Build duration
    pub duration: Duration,
}

/// Build the site described by `config`.
///
/// Stages run in a fixed order and the first failure aborts the build.
/// Files written before the failure stay in place, and the output directory
/// is never cleared, so pages of deleted documents remain until `clean`.
pub fn build_site(config: &Config) -> SiteResult<BuildReport> {
    let start_time = Instant::now();

    let output_dir = config.output_path();
    info!("Output will be generated in: {}", output_dir.display());
    fs::create_directory(&output_dir)?;

    let converter = MarkdownRenderer::new();
    let documents = load_documents(&config.content_path(), config, &converter)?;

    info!("Loading theme '{}'...", config.theme);
    let theme = Theme::load(&config.theme_path(), &config.output_ext)?;
    debug!("Theme templates: {}", theme.template_names().join(", "));
    let naming = Naming::from_config(config);
    let site = site_globals(&config.site);

    let rendered = render_documents(documents, &theme, &naming, &site, &output_dir)?;

    info!("Rendering index...");
    let index = render_index(&rendered, &theme, &naming, &site, &output_dir)?;

    info!("Copying static files...");
    let asset_bytes = copy_assets(theme.root(), &output_dir)?;

    let duration = start_time.elapsed();
    info!("Site built in {:.2?}", duration);
    info!("Pages: {}, Static bytes: {}", rendered.len(), asset_bytes);

    Ok(BuildReport {
        pages: rendered
            .iter()
            .map(|page| output_dir.join(&page.output_name))
            .collect(),
        index,
        asset_bytes,
        duration,
    })
}
