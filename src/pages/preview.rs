//! Submission preview page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::metadata::submission_header;
use crate::util::non_blank;

/// Heading used when a submission has no title.
const UNTITLED: &str = "Untitled submission";

/// Generates a standalone preview page for a rendered description
///
/// # Arguments
///
/// * `title`: Submission title, blank titles fall back to a placeholder
/// * `kind`: Short kind label shown next to the title
/// * `description_html`: Description already converted to HTML
///
/// # Returns
///
/// Complete HTML document markup
///
/// # Examples
///
/// ```
/// use issuemark::pages::preview;
///
/// let page = preview::generate("Login bug", "issue", "<h2>Scenarios</h2>");
/// assert!(page.into_string().contains("<h2>Scenarios</h2>"));
/// ```
pub fn generate(title: &str, kind: &str, description_html: &str) -> Markup {
    let title = non_blank(Some(title)).map_or(UNTITLED, str::trim);

    page_wrapper(
        title,
        html! {
            (submission_header(title, kind))
            article class="description" {
                (PreEscaped(description_html))
            }
        },
    )
}
