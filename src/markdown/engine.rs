use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    // Raw HTML in posts passes through untouched
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options<'_>) -> String {
    comrak::markdown_to_html(content, options)
}
