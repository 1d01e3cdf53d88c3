//! Shared test utilities for integration tests.
//!
//! Provides JSON submission fixtures and helpers for writing them to
//! temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Issue submission from the reference walkthrough.
pub const ISSUE_JSON: &str = r#"{
    "title": "Erro na validação",
    "description": "Formulário aceita CPF inválido",
    "type": 1,
    "priority": 3,
    "occurrenceType": 5,
    "environment": "Production",
    "scenarios": [{"given": "A", "when": "B", "then": "C"}],
    "observations": "Ocorre no horário de pico",
    "attachments": [{"name": "screenshot.png", "sizeBytes": 262144, "mimeType": "image/png"}]
}"#;

/// Markdown expected for `ISSUE_JSON` with English labels.
pub const ISSUE_MARKDOWN: &str = "## 🎯 Issue Information

- **📋 Type:** 🐛 Bug
- **⚡ Priority:** 🟠 High
- **🌐 Environment:** Production
- **🔧 Occurrence Type:** System Error

---

## Scenarios

### Scenario 1

**Given:** A

**When:** B

**Then:** C

---

## Observations

- Ocorre no horário de pico

---

## Attachments

- **screenshot.png** (256.00 KB)";

/// Failure report using names instead of codes and the legacy field aliases.
pub const FAILURE_JSON: &str = r#"{
    "failureNumber": "FAL-042",
    "title": "Timeout no faturamento",
    "severity": "critical",
    "activity": "Batch processing",
    "occurredAt": "2025-03-14T09:26:53Z",
    "environment": "Production",
    "reportedBy": "Ana Souza",
    "scenarios": [{"given": "Invoice batch queued", "when": "Job runs", "then": "Job times out"}],
    "observations": "Started after the last deploy",
    "attachments": [{"name": "trace.log", "size": 2048, "type": "text/plain"}]
}"#;

/// User story exercising every story section.
pub const STORY_JSON: &str = r#"{
    "demandNumber": "DEM-7",
    "title": "Export invoices",
    "priority": "High",
    "userStory": {"asA": "billing analyst", "iWant": "to export invoices", "soThat": "I can reconcile them"},
    "impact": [{"current": "Manual copy", "expected": "One click export"}],
    "objective": ["Reduce reconciliation time", ""],
    "screenshots": [{"name": "mockup.png", "sizeBytes": 1536, "mimeType": "image/png"}],
    "formFields": [
        {"name": "Start date", "type": "date", "required": true},
        {"name": "Notes", "type": "text", "size": "500", "required": false}
    ],
    "messages": ["Export finished"],
    "businessRules": ["Only closed invoices are exported"],
    "scenarios": [{"given": "Closed invoices exist", "when": "I export", "then": "A file is downloaded"}],
    "attachments": null
}"#;

/// Writes a fixture file into a directory.
///
/// # Arguments
///
/// * `dir`: Directory to write into
/// * `name`: File name
/// * `contents`: File contents
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
