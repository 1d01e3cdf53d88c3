//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Stylesheet embedded in every page so previews are single files.
const STYLESHEET: &str = include_str!("../../assets/preview.css");

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, html, head, and container structure. The stylesheet
/// is inlined rather than linked so a preview written anywhere on disk
/// renders without companion files.
///
/// # Arguments
///
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Issuemark" }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                div class="container" {
                    (body)
                }
                footer { "Generated by Issuemark" }
            }
        }
    }
}
