//! Submission records consumed by the description renderer.
//!
//! Records mirror the JSON bodies the tracker front end submits: camelCase
//! field names, enum fields given either as integer codes or variant names,
//! and nullable collections. They are plain data; nothing here validates
//! business rules.

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{RenderError, RenderResult};

/// Occurrence code assigned when a submission does not carry one.
pub const DEFAULT_OCCURRENCE_TYPE: i64 = 5;

/// Kind of issue being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueType {
    #[default]
    Bug = 1,
    Feature = 2,
    Improvement = 3,
    Task = 4,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::Bug,
        IssueType::Feature,
        IssueType::Improvement,
        IssueType::Task,
    ];

    const NAMES: &'static [&'static str] = &["Bug", "Feature", "Improvement", "Task"];

    /// Integer code used by the tracker API.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves an integer code.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnknownCode` when the code is outside `1..=4`.
    pub fn from_code(code: i64) -> RenderResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| i64::from(t.code()) == code)
            .ok_or(RenderError::UnknownCode {
                field: "type",
                code,
            })
    }

    /// Resolves a variant name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .zip(Self::NAMES)
            .find(|(_, known)| known.eq_ignore_ascii_case(name.trim()))
            .map(|(t, _)| t)
    }
}

/// Priority of an issue or story, also used as failure severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    Low = 1,
    #[default]
    Medium = 2,
    High = 3,
    Critical = 4,
}

/// Failure severity shares the priority scale and labels.
pub type Severity = Priority;

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    const NAMES: &'static [&'static str] = &["Low", "Medium", "High", "Critical"];

    /// Integer code used by the tracker API.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves an integer code.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::UnknownCode` when the code is outside `1..=4`.
    pub fn from_code(code: i64) -> RenderResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| i64::from(p.code()) == code)
            .ok_or(RenderError::UnknownCode {
                field: "priority",
                code,
            })
    }

    /// Resolves a variant name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .zip(Self::NAMES)
            .find(|(_, known)| known.eq_ignore_ascii_case(name.trim()))
            .map(|(p, _)| p)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CodeOrName {
    Code(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for IssueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(code) => Self::from_code(code).map_err(de::Error::custom),
            CodeOrName::Name(name) => {
                Self::from_name(&name).ok_or_else(|| de::Error::unknown_variant(&name, Self::NAMES))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(code) => Self::from_code(code).map_err(de::Error::custom),
            CodeOrName::Name(name) => {
                Self::from_name(&name).ok_or_else(|| de::Error::unknown_variant(&name, Self::NAMES))
            }
        }
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Given/When/Then triple.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    #[serde(deserialize_with = "null_as_default")]
    pub given: String,
    #[serde(deserialize_with = "null_as_default")]
    pub when: String,
    #[serde(deserialize_with = "null_as_default")]
    pub then: String,
}

impl Scenario {
    pub fn new(given: impl Into<String>, when: impl Into<String>, then: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            when: when.into(),
            then: then.into(),
        }
    }
}

/// Attachment metadata. File contents never reach the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttachmentRef {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "size")]
    pub size_bytes: u64,
    #[serde(alias = "type", deserialize_with = "null_as_default")]
    pub mime_type: String,
}

impl AttachmentRef {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Issue submission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub priority: Priority,
    pub occurrence_type: i64,
    pub environment: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scenarios: Vec<Scenario>,
    pub observations: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub attachments: Vec<AttachmentRef>,
}

impl Default for SubmissionRecord {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            issue_type: IssueType::default(),
            priority: Priority::default(),
            occurrence_type: DEFAULT_OCCURRENCE_TYPE,
            environment: None,
            scenarios: Vec::new(),
            observations: None,
            attachments: Vec::new(),
        }
    }
}

/// Production failure report.
///
/// `activity` is the free-form classification that replaced the integer
/// occurrence code on failures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub failure_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub activity: Option<String>,
    pub occurred_at: DateTime<Utc>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub reported_by: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub observations: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<AttachmentRef>,
}

/// "As a / I want / So that" statement heading a user story.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserStoryStatement {
    #[serde(alias = "como", deserialize_with = "null_as_default")]
    pub as_a: String,
    #[serde(alias = "quero", deserialize_with = "null_as_default")]
    pub i_want: String,
    #[serde(alias = "para", deserialize_with = "null_as_default")]
    pub so_that: String,
}

/// Current process versus expected improvement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ImpactItem {
    #[serde(deserialize_with = "null_as_default")]
    pub current: String,
    #[serde(deserialize_with = "null_as_default")]
    pub expected: String,
}

/// Input field the story asks the product to collect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FormField {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Type code such as `text` or `datetime`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub field_type: String,
    pub size: Option<String>,
    pub required: bool,
}

/// User story submission with its structured form sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub demand_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub priority: Priority,
    pub user_story: Option<UserStoryStatement>,
    #[serde(deserialize_with = "null_as_default")]
    pub impact: Vec<ImpactItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub objective: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub screenshots: Vec<AttachmentRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub form_fields: Vec<FormField>,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub business_rules: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub scenarios: Vec<Scenario>,
    #[serde(deserialize_with = "null_as_default")]
    pub attachments: Vec<AttachmentRef>,
}

/// A submission record that can be parsed from JSON.
pub trait Record: DeserializeOwned {
    /// Top-level enum fields and the codes each accepts.
    const CODED_FIELDS: &'static [(&'static str, fn(i64) -> bool)];
}

fn is_issue_type_code(code: i64) -> bool {
    IssueType::from_code(code).is_ok()
}

fn is_priority_code(code: i64) -> bool {
    Priority::from_code(code).is_ok()
}

impl Record for SubmissionRecord {
    const CODED_FIELDS: &'static [(&'static str, fn(i64) -> bool)] =
        &[("type", is_issue_type_code), ("priority", is_priority_code)];
}

impl Record for FailureRecord {
    const CODED_FIELDS: &'static [(&'static str, fn(i64) -> bool)] =
        &[("severity", is_priority_code)];
}

impl Record for StoryRecord {
    const CODED_FIELDS: &'static [(&'static str, fn(i64) -> bool)] =
        &[("priority", is_priority_code)];
}

/// Parses a JSON submission of any record kind.
///
/// Integer enum codes are checked before the typed pass so an unknown
/// code reports the field it came from.
///
/// # Errors
///
/// Returns `RenderError::InvalidInput` when the document is `null`,
/// `RenderError::UnknownCode` when an enum code is out of range, and
/// `RenderError::Deserialization` when it is otherwise not valid for `T`.
pub fn parse_record<T: Record>(json: &str) -> RenderResult<T> {
    let value: Value = serde_json::from_str(json)?;
    if value.is_null() {
        return Err(RenderError::InvalidInput(
            "submission record is missing".to_string(),
        ));
    }

    for &(field, is_known) in T::CODED_FIELDS {
        if let Some(code) = value.get(field).and_then(Value::as_i64)
            && !is_known(code)
        {
            return Err(RenderError::UnknownCode { field, code });
        }
    }

    Ok(serde_json::from_value(value)?)
}
