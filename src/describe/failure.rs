//! Failure report layout.

use super::blocks::{Block, Document, field};
use super::sections::{ScenarioStyle, attachment_list, scenarios};
use crate::labels::Labels;
use crate::record::FailureRecord;
use crate::util::non_blank;

/// Occurrence timestamps are printed in UTC, day first.
const OCCURRED_AT_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub(super) fn render(labels: &Labels, record: &FailureRecord) -> String {
    let style = ScenarioStyle {
        heading: labels.failure_scenarios_heading,
        numbering: labels.scenario,
        given: labels.failure_given,
        when: labels.failure_when,
        then: labels.failure_then,
        skip_blank: false,
    };

    let mut document = Document::new();
    document.push(Some(header(labels, record)));
    document.push(scenarios(&style, &record.scenarios));
    document.push(observations(labels, record.observations.as_deref()));
    document.push(attachment_list(labels.evidence_heading, &record.attachments));
    document.push(reporter(labels, record.reported_by.as_deref()));
    document.finish()
}

fn header(labels: &Labels, record: &FailureRecord) -> Block {
    let mut items = Vec::with_capacity(5);
    if let Some(number) = non_blank(Some(record.failure_number.as_str())) {
        items.push(field(labels.number_field, number));
    }
    items.push(field(
        labels.occurred_field,
        &record.occurred_at.format(OCCURRED_AT_FORMAT).to_string(),
    ));
    if let Some(environment) = non_blank(record.environment.as_deref()) {
        items.push(field(labels.environment_field, environment));
    }
    items.push(field(labels.severity_field, labels.priority(record.severity)));
    if let Some(activity) = non_blank(record.activity.as_deref()) {
        items.push(field(labels.activity_field, activity));
    }

    let mut block = Block::new(2, labels.failure_heading);
    block.bullets(items);
    block
}

/// Observations are kept as a paragraph so multi-line notes stay intact.
fn observations(labels: &Labels, observations: Option<&str>) -> Option<Block> {
    let text = non_blank(observations)?;
    let mut block = Block::new(2, labels.additional_observations_heading);
    block.paragraph(text);
    Some(block)
}

fn reporter(labels: &Labels, reported_by: Option<&str>) -> Option<Block> {
    let name = non_blank(reported_by)?;
    let mut block = Block::new(2, labels.report_heading);
    block.chunk(field(labels.reported_by_field, name));
    Some(block)
}
