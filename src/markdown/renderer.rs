use crate::markdown::engine::{create_comrak_options, render_markdown};

/// Converts a document body from its authoring dialect to markup
pub trait MarkupConverter {
    fn convert(&self, source: &str) -> String;
}

/// Markdown renderer backed by comrak
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new() -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
        }
    }

    /// Render Markdown content to HTML
    pub fn render(&self, content: &str) -> String {
        render_markdown(content, &self.options)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MarkupConverter for MarkdownRenderer<'a> {
    fn convert(&self, source: &str) -> String {
        self.render(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.convert("Body text");
        assert_eq!(html.trim(), "<p>Body text</p>");
    }

    #[test]
    fn test_empty_body() {
        let renderer = MarkdownRenderer::new();
        assert_eq!(renderer.convert(""), "");
    }
}
