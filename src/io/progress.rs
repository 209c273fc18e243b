//! Spinner feedback while the backtracking search runs

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Reports explored nodes and current depth of the search
pub struct SearchProgress {
    bar: ProgressBar,
    variable_count: usize,
}

impl SearchProgress {
    /// Create a visible spinner for a puzzle with `variable_count` slots
    pub fn new(variable_count: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        bar.set_message("propagating constraints");
        Self { bar, variable_count }
    }

    /// Create a spinner that never draws
    pub fn hidden(variable_count: usize) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            variable_count,
        }
    }

    /// Show search counters
    pub fn update(&self, nodes: usize, depth: usize) {
        self.bar.set_message(format!(
            "{nodes} nodes explored, {depth}/{} slots filled",
            self.variable_count
        ));
    }

    /// Current spinner message
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner with a final outcome
    pub fn finish(&self, solved: bool) {
        let outcome = if solved { "filled" } else { "no fill found" };
        self.bar.finish_with_message(outcome);
    }

    /// Remove the spinner from the terminal
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }
}
