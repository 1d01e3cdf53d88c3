//! Markdown block assembly shared by all description kinds.

/// Placed between consecutive blocks. Never after the last one.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Continuation indent for `- ` list items.
const BULLET_INDENT: &str = "  ";

/// One titled section of a description.
///
/// A block is a heading followed by chunks separated by blank lines. A
/// chunk may span several lines (lists, tables). Blocks that never
/// received a chunk are dropped by [`Document::push`], so a description
/// never contains a heading without content.
#[derive(Debug)]
pub struct Block {
    chunks: Vec<String>,
}

impl Block {
    pub fn new(level: usize, heading: &str) -> Self {
        Self {
            chunks: vec![heading_line(level, heading)],
        }
    }

    pub fn has_content(&self) -> bool {
        self.chunks.len() > 1
    }

    /// Appends user text as its own paragraph, line structure kept.
    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.chunk(markdown_text(text))
    }

    /// Appends a chunk verbatim.
    pub fn chunk(&mut self, text: impl Into<String>) -> &mut Self {
        self.chunks.push(text.into());
        self
    }

    pub fn subheading(&mut self, level: usize, text: &str) -> &mut Self {
        self.chunk(heading_line(level, text))
    }

    /// Appends a bullet list. Nothing is appended for an empty iterator.
    pub fn bullets<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = items
            .into_iter()
            .map(|item| format!("- {}", hanging(item.as_ref(), BULLET_INDENT)))
            .collect::<Vec<_>>()
            .join("\n");

        if !list.is_empty() {
            self.chunks.push(list);
        }
        self
    }

    /// Appends a pipe table. Cell text is escaped, headers are not.
    pub fn table<R>(&mut self, headers: &[&str], rows: R) -> &mut Self
    where
        R: IntoIterator<Item = Vec<String>>,
    {
        let mut lines = vec![table_row(headers), table_rule(headers)];
        for row in rows {
            let cells: Vec<String> = row.iter().map(|cell| escape_cell(cell)).collect();
            lines.push(table_row(&cells));
        }
        self.chunks.push(lines.join("\n"));
        self
    }

    pub fn into_markdown(self) -> String {
        self.chunks.join("\n\n")
    }
}

/// Ordered collection of blocks forming a full description.
#[derive(Debug, Default)]
pub struct Document {
    blocks: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block, skipping absent or empty ones.
    pub fn push(&mut self, block: Option<Block>) {
        if let Some(block) = block
            && block.has_content()
        {
            self.blocks.push(block.into_markdown());
        }
    }

    pub fn finish(self) -> String {
        self.blocks.join(SEPARATOR)
    }
}

/// Formats `**label:** value`, dropping the value part when it is blank.
pub fn field(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("**{}:**", label)
    } else {
        format!("**{}:** {}", label, markdown_text(value))
    }
}

/// Keeps multi-line user text inside the chunk it was placed in.
///
/// Lines made only of `-`, `=`, `*` or `_` would close the paragraph as a
/// setext underline or a thematic break; their first marker is escaped.
pub fn markdown_text(text: &str) -> String {
    text.lines().map(escape_rule_line).collect::<Vec<_>>().join("\n")
}

/// Like [`markdown_text`], with continuation lines indented under a list
/// marker so they stay inside the item.
pub fn hanging(text: &str, indent: &str) -> String {
    let mut lines = text.lines().map(escape_rule_line);
    let mut out = lines.next().unwrap_or_default();
    for line in lines {
        out.push('\n');
        if !line.trim().is_empty() {
            out.push_str(indent);
            out.push_str(&line);
        }
    }
    out
}

fn escape_rule_line(line: &str) -> String {
    let body = line.trim_start();
    let is_rule = !body.is_empty()
        && body
            .chars()
            .all(|c| matches!(c, '-' | '=' | '*' | '_' | ' ' | '\t'));

    if is_rule {
        let indent = &line[..line.len() - body.len()];
        format!("{}\\{}", indent, body)
    } else {
        line.to_string()
    }
}

fn heading_line(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text)
}

fn table_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut row = String::from("|");
    for cell in cells {
        row.push(' ');
        row.push_str(cell.as_ref());
        row.push_str(" |");
    }
    row
}

/// Dash run per column, as wide as the padded header cell.
fn table_rule(headers: &[&str]) -> String {
    let mut rule = String::from("|");
    for header in headers {
        rule.push_str(&"-".repeat(header.chars().count() + 2));
        rule.push('|');
    }
    rule
}

/// Keeps user text from breaking the table layout.
fn escape_cell(text: &str) -> String {
    text.trim()
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace('\n', " ")
}
