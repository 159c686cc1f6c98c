// Wed Oct 14 2026 - Alex

use colored::*;
use std::cmp::max;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    Ascii,
    Unicode,
}

/// Builds a text table. Cells may span several lines; each `\n` starts a new
/// line inside the same row.
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<CellStyle>>,
    column_widths: Vec<usize>,
    alignment: Vec<Alignment>,
    use_color: bool,
    border_style: BorderStyle,
}

#[derive(Debug, Clone)]
struct CellStyle {
    text: String,
    highlight: Option<Color>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
            rows: Vec::new(),
            column_widths: Vec::new(),
            alignment: Vec::new(),
            use_color: true,
            border_style: BorderStyle::Unicode,
        }
    }

    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        self.headers = headers.iter().map(|s| s.to_string()).collect();
        self.column_widths = self.headers.iter().map(|h| h.chars().count()).collect();
        self.alignment = vec![Alignment::Left; self.headers.len()];
        self
    }

    pub fn add_row<T: std::fmt::Display>(self, row: &[T]) -> Self {
        let cells = row.iter().map(|c| (c.to_string(), None)).collect();
        self.add_styled_row(cells)
    }

    /// Row whose cells carry an optional highlight color.
    pub fn add_styled_row(mut self, row: Vec<(String, Option<Color>)>) -> Self {
        let cells: Vec<CellStyle> = row
            .into_iter()
            .map(|(text, highlight)| CellStyle { text, highlight })
            .collect();

        for (i, cell) in cells.iter().enumerate() {
            let width = cell.text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
            if i < self.column_widths.len() {
                self.column_widths[i] = max(self.column_widths[i], width);
            } else {
                self.column_widths.push(width);
                self.alignment.push(Alignment::Left);
            }
        }

        self.rows.push(cells);
        self
    }

    pub fn with_alignment(mut self, column: usize, alignment: Alignment) -> Self {
        if column < self.alignment.len() {
            self.alignment[column] = alignment;
        }
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn build(&self) -> String {
        if self.headers.is_empty() && self.rows.is_empty() {
            return String::new();
        }

        let chars = BorderChars::for_style(self.border_style);
        let mut output = Vec::new();

        if let Some(c) = chars {
            output.push(self.horizontal_line(&c, c.top));
        }

        if !self.headers.is_empty() {
            let header_cells: Vec<CellStyle> = self
                .headers
                .iter()
                .map(|h| CellStyle { text: h.clone(), highlight: None })
                .collect();
            output.extend(self.build_row(&header_cells, chars.as_ref(), true));

            if let Some(c) = chars {
                output.push(self.horizontal_line(&c, c.middle));
            }
        }

        for row in &self.rows {
            output.extend(self.build_row(row, chars.as_ref(), false));
        }

        if let Some(c) = chars {
            output.push(self.horizontal_line(&c, c.bottom));
        }

        output.join("\n")
    }

    fn build_row(&self, cells: &[CellStyle], chars: Option<&BorderChars>, is_header: bool) -> Vec<String> {
        let height = cells.iter().map(|c| c.text.lines().count().max(1)).max().unwrap_or(1);
        let mut lines = Vec::with_capacity(height);

        for line_idx in 0..height {
            let mut parts = Vec::new();
            if let Some(c) = chars {
                parts.push(c.vertical.to_string());
            }

            for (i, width) in self.column_widths.iter().enumerate() {
                let cell = cells.get(i);
                let text = cell
                    .and_then(|c| c.text.lines().nth(line_idx))
                    .unwrap_or("");
                let aligned = match self.alignment.get(i).copied().unwrap_or(Alignment::Left) {
                    Alignment::Left => format!("{:<width$}", text, width = width),
                    Alignment::Right => format!("{:>width$}", text, width = width),
                };

                let formatted = match (self.use_color, is_header, cell.and_then(|c| c.highlight)) {
                    (true, true, _) => aligned.bold().to_string(),
                    (true, false, Some(color)) => aligned.color(color).bold().to_string(),
                    _ => aligned,
                };

                parts.push(format!(" {} ", formatted));
                if let Some(c) = chars {
                    parts.push(c.vertical.to_string());
                }
            }

            lines.push(parts.join("").trim_end().to_string());
        }

        lines
    }

    fn horizontal_line(&self, chars: &BorderChars, ends: (char, char, char)) -> String {
        let (left, middle, right) = ends;
        let segments: Vec<String> = self
            .column_widths
            .iter()
            .map(|&w| chars.horizontal.to_string().repeat(w + 2))
            .collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct BorderChars {
    horizontal: char,
    vertical: char,
    top: (char, char, char),
    middle: (char, char, char),
    bottom: (char, char, char),
}

impl BorderChars {
    fn for_style(style: BorderStyle) -> Option<Self> {
        match style {
            BorderStyle::None => None,
            BorderStyle::Ascii => Some(Self {
                horizontal: '-',
                vertical: '|',
                top: ('+', '+', '+'),
                middle: ('+', '+', '+'),
                bottom: ('+', '+', '+'),
            }),
            BorderStyle::Unicode => Some(Self {
                horizontal: '─',
                vertical: '│',
                top: ('┌', '┬', '┐'),
                middle: ('├', '┼', '┤'),
                bottom: ('└', '┴', '┘'),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_table() {
        let table = TableBuilder::new()
            .with_headers(&["Name", "Count"])
            .add_row(&["a.bin", "2"])
            .with_alignment(1, Alignment::Right)
            .with_color(false)
            .with_border_style(BorderStyle::Ascii)
            .build();

        let expected = [
            "+-------+-------+",
            "| Name  | Count |",
            "+-------+-------+",
            "| a.bin |     2 |",
            "+-------+-------+",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_multiline_cells() {
        let table = TableBuilder::new()
            .with_headers(&["N-Gram", "Files"])
            .add_row(&["6162", "a: 1\nb: 2"])
            .with_color(false)
            .with_border_style(BorderStyle::None)
            .build();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec![" N-Gram  Files", " 6162    a: 1", "         b: 2"]);
    }

    #[test]
    fn test_empty_table() {
        assert!(TableBuilder::new().build().is_empty());
        assert_eq!(TableBuilder::new().with_headers(&["x"]).row_count(), 0);
    }
}
