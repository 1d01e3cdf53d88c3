//! Markdown to HTML conversion with GitHub Flavored Markdown support.
//!
//! Work item fields that take HTML receive the rendered description
//! converted with comrak. User text is never passed through as raw HTML.

mod renderer;

pub use renderer::MarkdownRenderer;
