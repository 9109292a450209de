use crate::cli::output::current_preferences;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    /// Renders headers, a separator and every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&header, &widths));
        lines.push(horizontal_rule(&widths, self.padding));
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn skip_ansi(bytes: &[u8], mut idx: usize) -> usize {
    idx += 1;
    if idx < bytes.len() && bytes[idx] == b'[' {
        idx += 1;
        while idx < bytes.len() {
            let byte = bytes[idx];
            idx += 1;
            if (0x40..=0x7E).contains(&byte) {
                break;
            }
        }
    }
    idx
}

/// Character count ignoring ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx = skip_ansi(bytes, idx);
            continue;
        }
        match text.get(idx..).and_then(|rest| rest.chars().next()) {
            Some(ch) => {
                width += 1;
                idx += ch.len_utf8();
            }
            None => break,
        }
    }

    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let target = width - 1;
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut visible = 0;
    let mut result = String::new();
    let mut saw_ansi = false;

    while idx < bytes.len() && visible < target {
        if bytes[idx] == 0x1b {
            let start = idx;
            idx = skip_ansi(bytes, idx);
            result.push_str(&text[start..idx]);
            saw_ansi = true;
            continue;
        }
        match text.get(idx..).and_then(|rest| rest.chars().next()) {
            Some(ch) => {
                result.push(ch);
                visible += 1;
                idx += ch.len_utf8();
            }
            None => break,
        }
    }

    result.push('…');
    if saw_ansi {
        result.push_str("\u{1b}[0m");
    }
    result
}

fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
    };

    format!(
        "{pad}{left}{fitted}{right}{pad}",
        pad = " ".repeat(padding),
        left = " ".repeat(left_spaces),
        right = " ".repeat(right_spaces),
    )
}

/// Builds a horizontal rule that spans the width of the table.
fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain { '-' } else { '─' };
    ch.to_string().repeat(total_width)
}
