//! Submission metadata components

use maud::{Markup, html};

/// Renders submission header with title and kind badge
///
/// # Arguments
///
/// * `title`: Submission title, shown as page heading
/// * `kind`: Short kind label (issue, failure, story)
///
/// # Returns
///
/// Submission header markup
pub fn submission_header(title: &str, kind: &str) -> Markup {
    html! {
        header class="submission-header" {
            h1 class="submission-title" { (title) }
            span class="kind-badge" { (kind) }
        }
    }
}
