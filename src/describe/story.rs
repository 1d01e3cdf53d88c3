//! User story layout.
//!
//! Sections follow the story form: statement, impact, objective,
//! screenshots, input fields, messages, business rules, scenarios and
//! attachments. Blank entries inside a section are skipped; a section with
//! nothing left to show is omitted.

use super::blocks::{Block, Document, field, hanging, markdown_text};
use super::sections::{ScenarioStyle, scenarios};
use crate::labels::Labels;
use crate::record::{AttachmentRef, FormField, ImpactItem, StoryRecord, UserStoryStatement};
use crate::util::{format_file_size, non_blank};

pub(super) fn render(labels: &Labels, record: &StoryRecord) -> String {
    let style = ScenarioStyle {
        skip_blank: true,
        ..super::issue::scenario_style(labels)
    };

    let mut document = Document::new();
    document.push(record.user_story.as_ref().map(|s| statement(labels, s)));
    document.push(impact(labels, &record.impact));
    document.push(bullet_section(labels.objective_heading, &record.objective));
    document.push(file_table(
        labels,
        labels.screenshots_heading,
        labels.screenshots_note,
        &record.screenshots,
    ));
    document.push(form_fields(labels, &record.form_fields));
    document.push(bullet_section(labels.messages_heading, &record.messages));
    document.push(business_rules(labels, &record.business_rules));
    document.push(scenarios(&style, &record.scenarios));
    document.push(file_table(
        labels,
        labels.attachments_heading,
        labels.attachments_note,
        &record.attachments,
    ));
    document.finish()
}

fn statement(labels: &Labels, statement: &UserStoryStatement) -> Block {
    let mut block = Block::new(1, labels.story_heading);
    for (label, value) in [
        (labels.as_a, &statement.as_a),
        (labels.i_want, &statement.i_want),
        (labels.so_that, &statement.so_that),
    ] {
        if let Some(value) = non_blank(Some(value.as_str())) {
            block.chunk(field(label, value));
        }
    }
    block
}

fn impact(labels: &Labels, items: &[ImpactItem]) -> Option<Block> {
    if items.is_empty() {
        return None;
    }

    let mut block = Block::new(2, labels.impact_heading);
    for (index, item) in items.iter().enumerate() {
        block.subheading(3, &format!("{} {}", labels.impact_heading, index + 1));
        if let Some(current) = non_blank(Some(item.current.as_str())) {
            block.chunk(format!(
                "**{}:**\n{}",
                labels.current_process,
                markdown_text(current)
            ));
        }
        if let Some(expected) = non_blank(Some(item.expected.as_str())) {
            block.chunk(format!(
                "**{}:**\n{}",
                labels.expected_improvement,
                markdown_text(expected)
            ));
        }
    }
    Some(block)
}

fn bullet_section(heading: &str, items: &[String]) -> Option<Block> {
    let mut block = Block::new(2, heading);
    block.bullets(items.iter().filter_map(|item| non_blank(Some(item.as_str()))));
    Some(block)
}

/// Blank rules are skipped and the rest numbered consecutively, matching
/// the numbers an ordered list renders with.
fn business_rules(labels: &Labels, rules: &[String]) -> Option<Block> {
    let list = rules
        .iter()
        .filter_map(|rule| non_blank(Some(rule.as_str())))
        .enumerate()
        .map(|(index, rule)| {
            let marker = format!("{}. ", index + 1);
            let indent = " ".repeat(marker.len());
            format!("{}{}", marker, hanging(rule, &indent))
        })
        .collect::<Vec<_>>()
        .join("\n");

    if list.is_empty() {
        return None;
    }

    let mut block = Block::new(2, labels.business_rules_heading);
    block.chunk(list);
    Some(block)
}

fn file_table(
    labels: &Labels,
    heading: &str,
    note: &str,
    files: &[AttachmentRef],
) -> Option<Block> {
    if files.is_empty() {
        return None;
    }

    let mut block = Block::new(2, heading);
    block
        .table(
            &[labels.file_column, labels.size_column, labels.type_column],
            files.iter().map(|file| {
                vec![
                    file.name.clone(),
                    format_file_size(file.size_bytes),
                    file.mime_type.clone(),
                ]
            }),
        )
        .chunk(note);
    Some(block)
}

fn form_fields(labels: &Labels, fields: &[FormField]) -> Option<Block> {
    if fields.is_empty() {
        return None;
    }

    let mut block = Block::new(2, labels.form_fields_heading);
    block.table(
        &[
            labels.field_name_column,
            labels.type_column,
            labels.max_size_column,
            labels.required_column,
        ],
        fields.iter().map(|f| {
            vec![
                f.name.clone(),
                labels.field_type(&f.field_type).to_string(),
                non_blank(f.size.as_deref()).unwrap_or("-").to_string(),
                if f.required { labels.yes } else { labels.no }.to_string(),
            ]
        }),
    );
    Some(block)
}
