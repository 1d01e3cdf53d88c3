//! Markdown descriptions for tracker submissions.

pub mod components;
mod config;
pub mod describe;
mod error;
pub mod labels;
mod markdown;
pub mod pages;
pub mod record;
mod util;

pub use config::{Config, Format};
pub use describe::{DescriptionRenderer, Submission, SubmissionKind, render};
pub use error::{RenderError, RenderResult};
pub use labels::{Labels, Locale, occurrence_code, occurrence_label, occurrence_types};
pub use markdown::MarkdownRenderer;
pub use record::{
    AttachmentRef, FailureRecord, FormField, ImpactItem, IssueType, Priority, Scenario, Severity,
    Record, StoryRecord, SubmissionRecord, UserStoryStatement, parse_record,
};
pub use util::{format_file_size, format_size_kb};
