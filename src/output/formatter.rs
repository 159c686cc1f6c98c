// Wed Oct 14 2026 - Alex

use crate::analysis::FileFrequencies;
use crate::ngram::NgramSummary;
use crate::output::SliceResult;
use crate::search::SearchReport;
use crate::ui::table::{Alignment, BorderStyle, TableBuilder};
use colored::Color;
use itertools::Itertools;

/// Renders results as text tables.
pub struct OutputFormatter {
    use_color: bool,
    border_style: BorderStyle,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            use_color: true,
            border_style: BorderStyle::Unicode,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    fn table(&self, headers: &[&str]) -> TableBuilder {
        TableBuilder::new()
            .with_headers(headers)
            .with_color(self.use_color)
            .with_border_style(self.border_style)
    }

    pub fn format_ngrams(&self, summaries: &[NgramSummary]) -> String {
        let mut table = self
            .table(&["N-Gram", "Total Count", "File Count(s)"])
            .with_alignment(1, Alignment::Right);

        for summary in summaries {
            let files = summary
                .file_counts
                .iter()
                .map(|fc| format!("{}: {}", fc.file_name, fc.count))
                .join("\n");
            table = table.add_row(&[summary.ngram.clone(), summary.total_count.to_string(), files]);
        }

        table.build()
    }

    pub fn format_search(&self, reports: &[SearchReport]) -> String {
        let mut table = self
            .table(&["File Name", "Count", "Addresses (Hex)"])
            .with_alignment(1, Alignment::Right);

        for report in reports {
            let highlight = if report.matches { Color::Green } else { Color::Red };
            let addresses = report.positions.iter().map(|p| format!("{:x}", p)).join(" ");
            table = table.add_styled_row(vec![
                (report.file_name.clone(), Some(highlight)),
                (report.count.to_string(), None),
                (addresses, None),
            ]);
        }

        table.build()
    }

    /// Sliced bytes as hex, 16 bytes per line.
    pub fn format_slices(&self, slices: &[SliceResult]) -> String {
        let mut table = self
            .table(&["File Name", "Start", "Length", "Data"])
            .with_alignment(2, Alignment::Right);

        for slice in slices {
            let data = slice.data.chunks(16).map(hex::encode).join("\n");
            table = table.add_row(&[
                slice.file_name.clone(),
                format!("{:#x}", slice.start),
                slice.length.to_string(),
                data,
            ]);
        }

        table.build()
    }

    /// Byte values that occur in each file, most frequent first.
    pub fn format_frequencies(&self, files: &[FileFrequencies]) -> String {
        let mut table = self.table(&["File Name", "Value", "Frequency"]);

        for file in files {
            let present = file.present();
            let values = present.iter().map(|f| format!("{:02x}", f.value)).join("\n");
            let shares = present.iter().map(|f| format!("{:.4}", f.frequency)).join("\n");
            table = table.add_row(&[file.file_name.clone(), values, shares]);
        }

        table.build()
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
