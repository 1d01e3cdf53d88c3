//! Issue description layout.

use super::blocks::{Block, Document, field};
use super::sections::{ScenarioStyle, attachment_list, scenarios};
use crate::labels::Labels;
use crate::record::SubmissionRecord;
use crate::util::non_blank;

pub(super) fn render(labels: &Labels, record: &SubmissionRecord) -> String {
    let mut document = Document::new();
    document.push(Some(header(labels, record)));
    document.push(scenarios(&scenario_style(labels), &record.scenarios));
    document.push(observations(labels, record.observations.as_deref()));
    document.push(attachment_list(labels.attachments_heading, &record.attachments));
    document.finish()
}

fn header(labels: &Labels, record: &SubmissionRecord) -> Block {
    let mut items = vec![
        field(labels.type_field, labels.issue_type(record.issue_type)),
        field(labels.priority_field, labels.priority(record.priority)),
    ];
    if let Some(environment) = non_blank(record.environment.as_deref()) {
        items.push(field(labels.environment_field, environment));
    }
    if let Some(occurrence) = labels.occurrence_type(record.occurrence_type) {
        items.push(field(labels.occurrence_field, occurrence));
    }

    let mut block = Block::new(2, labels.issue_heading);
    block.bullets(items);
    block
}

/// Issue scenarios always print all three lines, blank values included.
pub(super) fn scenario_style(labels: &Labels) -> ScenarioStyle<'_> {
    ScenarioStyle {
        heading: labels.scenarios_heading,
        numbering: labels.scenario,
        given: labels.given,
        when: labels.when,
        then: labels.then,
        skip_blank: false,
    }
}

fn observations(labels: &Labels, observations: Option<&str>) -> Option<Block> {
    let text = non_blank(observations)?;
    let mut block = Block::new(2, labels.observations_heading);
    block.bullets([text]);
    Some(block)
}
