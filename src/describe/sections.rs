//! Sections shared by issue, failure and story descriptions.

use super::blocks::{Block, field};
use crate::record::{AttachmentRef, Scenario};
use crate::util::format_size_kb;

/// Labels and blank handling for a Given/When/Then section.
pub struct ScenarioStyle<'a> {
    pub heading: &'a str,
    pub numbering: &'a str,
    pub given: &'a str,
    pub when: &'a str,
    pub then: &'a str,
    /// Drop lines whose value is blank instead of printing a bare label.
    pub skip_blank: bool,
}

/// Numbered scenario subsections in input order, starting at 1.
pub fn scenarios(style: &ScenarioStyle<'_>, scenarios: &[Scenario]) -> Option<Block> {
    if scenarios.is_empty() {
        return None;
    }

    let mut block = Block::new(2, style.heading);
    for (index, scenario) in scenarios.iter().enumerate() {
        block.subheading(3, &format!("{} {}", style.numbering, index + 1));
        for (label, value) in [
            (style.given, &scenario.given),
            (style.when, &scenario.when),
            (style.then, &scenario.then),
        ] {
            if style.skip_blank && value.trim().is_empty() {
                continue;
            }
            block.chunk(field(label, value));
        }
    }
    Some(block)
}

/// Bullet per attachment: `**name** (size in KB)`.
pub fn attachment_list(heading: &str, attachments: &[AttachmentRef]) -> Option<Block> {
    if attachments.is_empty() {
        return None;
    }

    let mut block = Block::new(2, heading);
    block.bullets(
        attachments
            .iter()
            .map(|a| format!("**{}** ({})", a.name.trim(), format_size_kb(a.size_bytes))),
    );
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(skip_blank: bool) -> ScenarioStyle<'static> {
        ScenarioStyle {
            heading: "Scenarios",
            numbering: "Scenario",
            given: "Given",
            when: "When",
            then: "Then",
            skip_blank,
        }
    }

    #[test]
    fn test_no_scenarios_no_block() {
        assert!(scenarios(&style(false), &[]).is_none());
    }

    #[test]
    fn test_skip_blank_drops_lines() {
        // Arrange
        let input = [Scenario::new("A", " ", "C")];

        // Act
        let kept = scenarios(&style(false), &input)
            .expect("Block expected")
            .into_markdown();
        let skipped = scenarios(&style(true), &input)
            .expect("Block expected")
            .into_markdown();

        // Assert
        assert!(kept.contains("**When:**\n\n**Then:** C"));
        assert!(skipped.contains("**Given:** A\n\n**Then:** C"));
        assert!(!skipped.contains("When"));
    }

    #[test]
    fn test_attachment_list() {
        // Arrange
        let attachments = [
            AttachmentRef::new("screenshot_erro.png", 1024 * 256, "image/png"),
            AttachmentRef::new("log_aplicacao.txt", 1024 * 50, "text/plain"),
        ];

        // Act
        let markdown = attachment_list("Attachments", &attachments)
            .expect("Block expected")
            .into_markdown();

        // Assert
        assert_eq!(
            markdown,
            "## Attachments\n\n- **screenshot_erro.png** (256.00 KB)\n- **log_aplicacao.txt** (50.00 KB)"
        );
    }

    #[test]
    fn test_empty_attachments_no_block() {
        assert!(attachment_list("Attachments", &[]).is_none());
    }
}
