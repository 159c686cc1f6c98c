// Wed Oct 14 2026 - Alex

use colored::Colorize;

/// Formats an error and its cause chain for the terminal.
pub struct ErrorDisplay {
    color_enabled: bool,
    max_depth: usize,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            color_enabled: true,
            max_depth: 10,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color_enabled = color;
        self
    }

    pub fn format(&self, error: &anyhow::Error) -> String {
        let header = if self.color_enabled {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };

        let mut output = format!("{} {}", header, error);

        for (depth, cause) in error.chain().skip(1).enumerate() {
            if depth == self.max_depth {
                output.push_str("\n  ... (cause chain truncated)");
                break;
            }
            let arrow = if self.color_enabled { "→".yellow().to_string() } else { "->".to_string() };
            output.push_str(&format!("\n  {} Caused by: {}", arrow, cause));
        }

        output
    }

    pub fn print(&self, error: &anyhow::Error) {
        eprintln!("{}", self.format(error));
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}
