// Tue Oct 13 2026 - Alex

use crate::pattern::{HexPattern, NibbleSymbol};
use colored::Colorize;
use itertools::Itertools;

/// Widest row `HexDump` renders, in bytes.
pub const MAX_DUMP_WIDTH: usize = 4096;

/// Renders a pattern as an address-annotated hex dump.
pub struct HexDump {
    width: usize,
    color: bool,
}

impl HexDump {
    pub fn new() -> Self {
        Self { width: 16, color: true }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, MAX_DUMP_WIDTH);
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render(&self, pattern: &HexPattern) -> String {
        let mut lines = vec![self.header()];

        let rows = pattern.symbols().chunks(self.width * 2);
        for (row, symbols) in rows.enumerate() {
            let address = format!("{:08x}", row * self.width);
            let address = if self.color { address.cyan().to_string() } else { address };

            let bytes = symbols
                .chunks(2)
                .map(|pair| pair.iter().map(|s| self.symbol(s)).join(""))
                .join(" ");

            lines.push(format!("{} {}", address, bytes));
        }

        lines.join("\n")
    }

    fn header(&self) -> String {
        let columns = (0..self.width).map(|c| format!("{:02x}", c)).join(" ");
        if self.color {
            format!("{}{}", "Address  ".white().bold(), columns.cyan())
        } else {
            format!("Address  {}", columns)
        }
    }

    fn symbol(&self, symbol: &NibbleSymbol) -> String {
        let c = symbol.to_char().to_string();
        if self.color && !symbol.is_wildcard() {
            c.green().bold().to_string()
        } else {
            c
        }
    }
}

impl Default for HexDump {
    fn default() -> Self {
        Self::new()
    }
}
