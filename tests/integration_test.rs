//! Integration tests for description rendering through the public API.

mod common;

use anyhow::Result;
use common::{FAILURE_JSON, ISSUE_JSON, ISSUE_MARKDOWN, STORY_JSON};
use issuemark::{
    AttachmentRef, DescriptionRenderer, IssueType, Locale, Priority, RenderError, Scenario,
    Submission, SubmissionKind, SubmissionRecord, format_size_kb, occurrence_label, parse_record,
    render,
};

fn issue_record() -> Result<SubmissionRecord> {
    Ok(parse_record(ISSUE_JSON)?)
}

#[test]
fn test_issue_end_to_end() -> Result<()> {
    // Arrange
    let record = issue_record()?;

    // Act
    let markdown = render(Some(&record))?;

    // Assert
    assert_eq!(markdown, ISSUE_MARKDOWN);
    Ok(())
}

#[test]
fn test_null_input_is_rejected() {
    // Act
    let direct = render(None);
    let parsed = parse_record::<SubmissionRecord>("null");

    // Assert
    assert!(matches!(direct, Err(RenderError::InvalidInput(_))));
    assert!(matches!(parsed, Err(RenderError::InvalidInput(_))));
}

#[test]
fn test_malformed_json_is_deserialization_error() {
    // Act
    let result = parse_record::<SubmissionRecord>("{\"title\": ");

    // Assert
    assert!(
        matches!(result, Err(RenderError::Deserialization(_))),
        "Expected Deserialization, got {:?}",
        result
    );
}

#[test]
fn test_out_of_range_priority_is_unknown_code() {
    // Act
    let result = parse_record::<SubmissionRecord>(r#"{"priority": 9}"#);

    // Assert
    assert!(
        matches!(
            result,
            Err(RenderError::UnknownCode {
                field: "priority",
                code: 9
            })
        ),
        "Expected UnknownCode, got {:?}",
        result
    );
}

#[test]
fn test_out_of_range_type_through_submission_parse() {
    // Act
    let result = Submission::parse(SubmissionKind::Issue, r#"{"type": 5}"#);

    // Assert
    assert!(matches!(
        result,
        Err(RenderError::UnknownCode {
            field: "type",
            code: 5
        })
    ));
}

#[test]
fn test_rendering_is_deterministic() -> Result<()> {
    // Arrange
    let record = issue_record()?;
    let renderer = DescriptionRenderer::new();

    // Act
    let outputs: Vec<String> = (0..5).map(|_| renderer.render_issue(&record)).collect();

    // Assert
    assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}

#[test]
fn test_empty_sections_are_omitted() {
    // Arrange
    let record = SubmissionRecord {
        title: "Only header".to_string(),
        environment: Some("   ".to_string()),
        observations: Some("\n\t".to_string()),
        ..SubmissionRecord::default()
    };

    // Act
    let markdown = DescriptionRenderer::new().render_issue(&record);

    // Assert
    assert!(!markdown.contains("---"), "No separator expected: {}", markdown);
    assert!(!markdown.contains("Scenarios"));
    assert!(!markdown.contains("Observations"));
    assert!(!markdown.contains("Attachments"));
    assert!(!markdown.contains("Environment"));
    assert!(!markdown.ends_with('\n'));
}

#[test]
fn test_scenarios_numbered_in_order() {
    // Arrange
    let record = SubmissionRecord {
        scenarios: vec![
            Scenario::new("first", "x", "y"),
            Scenario::new("second", "x", "y"),
            Scenario::new("third", "x", "y"),
        ],
        ..SubmissionRecord::default()
    };

    // Act
    let markdown = DescriptionRenderer::new().render_issue(&record);

    // Assert
    let positions: Vec<usize> = ["first", "second", "third"]
        .iter()
        .map(|given| markdown.find(given).expect("Scenario should be rendered"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    for n in 1..=3 {
        assert!(markdown.contains(&format!("### Scenario {}", n)));
    }
    assert!(!markdown.contains("### Scenario 0"));
    assert!(!markdown.contains("### Scenario 4"));
}

#[test]
fn test_attachment_sizes() {
    // Arrange
    let record = SubmissionRecord {
        attachments: vec![
            AttachmentRef::new("a.bin", 104857, "application/octet-stream"),
            AttachmentRef::new("empty.txt", 0, "text/plain"),
        ],
        ..SubmissionRecord::default()
    };

    // Act
    let markdown = DescriptionRenderer::new().render_issue(&record);

    // Assert
    assert_eq!(format_size_kb(104857), "102.40 KB");
    assert!(markdown.contains("- **a.bin** (102.40 KB)"));
    assert!(markdown.contains("- **empty.txt** (0.00 KB)"));
}

#[test]
fn test_every_enum_value_has_label() {
    // Arrange
    let renderer = DescriptionRenderer::new();
    let type_labels = ["🐛 Bug", "✨ Feature", "🚀 Improvement", "📋 Task"];
    let priority_labels = ["🟢 Low", "🟡 Medium", "🟠 High", "🔴 Critical"];

    for (issue_type, type_label) in IssueType::ALL.into_iter().zip(type_labels) {
        for (priority, priority_label) in Priority::ALL.into_iter().zip(priority_labels) {
            let record = SubmissionRecord {
                issue_type,
                priority,
                ..SubmissionRecord::default()
            };

            // Act
            let markdown = renderer.render_issue(&record);

            // Assert
            let type_line = format!("- **📋 Type:** {}\n", type_label);
            let priority_line = format!("- **⚡ Priority:** {}\n", priority_label);
            assert!(markdown.contains(&type_line), "Missing {:?} in:\n{}", type_line, markdown);
            assert!(
                markdown.contains(&priority_line),
                "Missing {:?} in:\n{}",
                priority_line,
                markdown
            );
        }
    }
}

#[test]
fn test_unknown_occurrence_code_omits_line() {
    // Arrange
    let record = SubmissionRecord {
        occurrence_type: 42,
        ..SubmissionRecord::default()
    };

    // Act
    let markdown = render(Some(&record)).expect("Unknown code should not fail");

    // Assert
    assert_eq!(occurrence_label(Locale::English, 42), None);
    assert!(!markdown.contains("Occurrence Type"));
}

#[test]
fn test_portuguese_locale_headings() -> Result<()> {
    // Arrange
    let record = issue_record()?;

    // Act
    let markdown = DescriptionRenderer::with_locale(Locale::Portuguese).render_issue(&record);

    // Assert
    assert!(markdown.starts_with("## 🎯 Informações da Issue"));
    assert!(markdown.contains("## Cenários"));
    assert!(markdown.contains("### Cenário 1"));
    assert!(markdown.contains("**Dado que:** A"));
    assert!(markdown.contains("## Observações"));
    assert!(markdown.contains("## Anexos"));
    assert!(markdown.contains("Erro de Sistema"));
    Ok(())
}

#[test]
fn test_failure_from_json() -> Result<()> {
    // Arrange
    let submission = Submission::parse(SubmissionKind::Failure, FAILURE_JSON)?;

    // Act
    let markdown = DescriptionRenderer::new().render_submission(&submission);

    // Assert
    assert!(markdown.starts_with("## 🐛 Failure Information"));
    assert!(markdown.contains("- **📋 Number:** FAL-042"));
    assert!(markdown.contains("- **📅 Occurred At:** 14/03/2025 09:26:53"));
    assert!(markdown.contains("- **⚠️ Severity:** 🔴 Critical"));
    assert!(markdown.contains("- **🔧 Activity:** Batch processing"));
    assert!(markdown.contains("**🎯 Given:** Invoice batch queued"));
    assert!(markdown.contains("## 📝 Additional Observations\n\nStarted after the last deploy"));
    assert!(markdown.contains("- **trace.log** (2.00 KB)"));
    assert!(markdown.ends_with("**Reported by:** Ana Souza"));
    Ok(())
}

#[test]
fn test_failure_requires_occurrence_time() {
    // Act
    let result = Submission::parse(SubmissionKind::Failure, r#"{"title": "x"}"#);

    // Assert
    assert!(matches!(result, Err(RenderError::Deserialization(_))));
}

#[test]
fn test_story_from_json() -> Result<()> {
    // Arrange
    let submission = Submission::parse(SubmissionKind::Story, STORY_JSON)?;

    // Act
    let markdown = DescriptionRenderer::new().render_submission(&submission);

    // Assert
    assert!(markdown.starts_with("# User Story"));
    assert!(markdown.contains("**As a:** billing analyst"));
    assert!(markdown.contains("### Impact 1"));
    assert!(markdown.contains("- Reduce reconciliation time"));
    assert!(markdown.contains("| mockup.png | 1.5 KB | image/png |"));
    assert!(markdown.contains("| Start date | Date | - | Yes |"));
    assert!(markdown.contains("| Notes | Text | 500 | No |"));
    assert!(markdown.contains("1. Only closed invoices are exported"));
    assert!(markdown.contains("### Scenario 1"));
    assert!(!markdown.contains("## Attachments"), "Null attachments render nothing");
    Ok(())
}
