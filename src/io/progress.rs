//! Progress display for batch pattern generation

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_THRESHOLD};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Patterns: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many patterns of a batch have been written
///
/// A bar is only drawn when the batch holds more than one pattern; single
/// renders finish too quickly for a bar to be useful.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl ProgressManager {
    /// Create a manager for `pattern_count` patterns
    pub fn new(pattern_count: usize) -> Self {
        let bar = (pattern_count > PROGRESS_THRESHOLD).then(|| {
            let bar = ProgressBar::with_draw_target(
                Some(pattern_count as u64),
                ProgressDrawTarget::stderr(),
            );
            bar.set_style(BATCH_STYLE.clone());
            bar
        });

        Self { bar, completed: 0 }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Patterns reported complete so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Show which pattern is being generated
    pub fn start_pattern(&self, name: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Mark one pattern as written
    pub fn complete_pattern(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clear the bar once the batch is done
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All patterns written");
        }
    }
}
