//! Markdown descriptions for tracker submissions.
//!
//! Turns issue, failure and user story records into the Markdown body that
//! is stored with the record and sent as the work item description.
//! Rendering is a pure function of the record and the chosen locale: no
//! I/O, no clock, no shared state. Sections without content are left out
//! entirely and consecutive sections are separated by a horizontal rule.

mod blocks;
mod failure;
mod issue;
mod sections;
mod story;

use clap::ValueEnum;

use crate::error::{RenderError, RenderResult};
use crate::labels::{Labels, Locale};
use crate::record::{FailureRecord, StoryRecord, SubmissionRecord, parse_record};

/// Renders submission records to Markdown.
///
/// Holds only a reference to a static label table, so it is `Copy` and
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionRenderer {
    labels: &'static Labels,
}

impl DescriptionRenderer {
    /// Creates renderer with English labels.
    pub fn new() -> Self {
        Self::with_locale(Locale::English)
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            labels: locale.labels(),
        }
    }

    /// Renders an issue submission.
    ///
    /// # Arguments
    ///
    /// * `record`: Submission to render, `None` when the caller had none
    ///
    /// # Returns
    ///
    /// Markdown description without trailing newline
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidInput` when `record` is `None`. Every
    /// present record renders.
    pub fn render(&self, record: Option<&SubmissionRecord>) -> RenderResult<String> {
        let record = record
            .ok_or_else(|| RenderError::InvalidInput("submission record is missing".to_string()))?;
        Ok(self.render_issue(record))
    }

    /// Renders an issue submission that is known to be present.
    pub fn render_issue(&self, record: &SubmissionRecord) -> String {
        issue::render(self.labels, record)
    }

    /// Renders a failure report.
    pub fn render_failure(&self, record: &FailureRecord) -> String {
        failure::render(self.labels, record)
    }

    /// Renders a user story.
    pub fn render_story(&self, record: &StoryRecord) -> String {
        story::render(self.labels, record)
    }

    /// Renders whichever kind of submission is given.
    pub fn render_submission(&self, submission: &Submission) -> String {
        match submission {
            Submission::Issue(record) => self.render_issue(record),
            Submission::Failure(record) => self.render_failure(record),
            Submission::Story(record) => self.render_story(record),
        }
    }
}

impl Default for DescriptionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an issue submission with English labels.
///
/// # Errors
///
/// Returns `RenderError::InvalidInput` when `record` is `None`.
pub fn render(record: Option<&SubmissionRecord>) -> RenderResult<String> {
    DescriptionRenderer::new().render(record)
}

/// Kind of record a JSON submission holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SubmissionKind {
    #[default]
    Issue,
    Failure,
    Story,
}

impl SubmissionKind {
    /// Lowercase name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionKind::Issue => "issue",
            SubmissionKind::Failure => "failure",
            SubmissionKind::Story => "story",
        }
    }
}

/// A parsed submission of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Issue(SubmissionRecord),
    Failure(FailureRecord),
    Story(StoryRecord),
}

impl Submission {
    /// Parses JSON as the given kind of submission.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidInput` for a `null` document and
    /// `RenderError::Deserialization` for malformed JSON.
    pub fn parse(kind: SubmissionKind, json: &str) -> RenderResult<Self> {
        Ok(match kind {
            SubmissionKind::Issue => Submission::Issue(parse_record(json)?),
            SubmissionKind::Failure => Submission::Failure(parse_record(json)?),
            SubmissionKind::Story => Submission::Story(parse_record(json)?),
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Submission::Issue(record) => &record.title,
            Submission::Failure(record) => &record.title,
            Submission::Story(record) => &record.title,
        }
    }

    pub fn kind(&self) -> SubmissionKind {
        match self {
            Submission::Issue(_) => SubmissionKind::Issue,
            Submission::Failure(_) => SubmissionKind::Failure,
            Submission::Story(_) => SubmissionKind::Story,
        }
    }
}
