//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Provides GFM extensions including tables, strikethrough, autolinks and
/// task lists. Single newlines become line breaks so multi-line user text
/// (observations, impact notes) keeps its shape in the work item.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures GFM extensions and security settings:
    /// - Tables, strikethrough, autolinks, task lists
    /// - Hard line breaks for soft newlines
    /// - Raw HTML omitted from output (descriptions carry user input)
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.hardbreaks = true;
        options.render.unsafe_ = false;

        Self { options }
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML fragment
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }

    /// Options used for conversion, for callers parsing the same dialect.
    pub fn options(&self) -> &Options<'a> {
        &self.options
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
