//! Table rendering utilities for CLI outputs.
//! Widths are measured in terminal columns so accented labels stay aligned.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    pub separator: char,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator: '-',
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_cell(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&self.separator.to_string().repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_cell(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Left-align `s` on `width` display columns, ignoring ANSI escape sequences.
fn pad_cell(s: &str, width: usize) -> String {
    let visible = crate::utils::strip_ansi(s);
    let w = UnicodeWidthStr::width(visible.as_str());
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_separator_and_rows() {
        let mut t = Table::new(vec![Column::new("Date", 10), Column::new("Sector", 6)]);
        t.add_row(vec!["2025-03-10".into(), "Méca".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "-".repeat(18));
        assert_eq!(lines[2], "2025-03-10 Méca   ");
    }

    #[test]
    fn ansi_sequences_do_not_count_in_width() {
        let mut t = Table::new(vec![Column::new("X", 4)]);
        t.add_row(vec!["\x1b[32mok\x1b[0m".into()]);
        assert!(t.render().ends_with("\x1b[32mok\x1b[0m   \n"));
    }
}
