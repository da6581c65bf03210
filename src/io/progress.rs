//! Progress display for long subdivision runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Splits: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Iteration progress bar, hidden when output is suppressed
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter expecting `iterations` steps
    pub fn new(iterations: u64, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(iterations)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(iterations);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Report one completed split
    pub fn advance(&self, rectangles: usize) {
        self.bar.inc(1);
        self.bar.set_message(format!("({rectangles} rectangles)"));
    }

    /// Clear the bar from the terminal and return the completed step count
    pub fn finish(&self) -> u64 {
        self.bar.finish_and_clear();
        self.bar.position()
    }
}
