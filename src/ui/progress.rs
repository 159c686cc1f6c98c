// Wed Oct 14 2026 - Alex

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Creates progress bars on stderr, or hidden ones when progress is off.
pub struct ProgressManager {
    enabled: bool,
    style: ProgressStyle,
}

impl ProgressManager {
    pub fn new(enabled: bool) -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ ");

        Self { enabled, style }
    }

    pub fn hidden() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn create(&self, total: u64, message: &str) -> ProgressBar {
        let pb = ProgressBar::with_draw_target(Some(total), self.draw_target());
        pb.set_style(self.style.clone());
        pb.set_message(message.to_string());
        pb
    }

    fn draw_target(&self) -> ProgressDrawTarget {
        if self.enabled {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(true)
    }
}
