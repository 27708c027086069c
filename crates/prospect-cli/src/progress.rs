//! Terminal spinner for search progress.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use prospect_places::{ProgressObserver, SearchStrategy};

pub(crate) struct SpinnerProgress {
    bar: ProgressBar,
}

impl SpinnerProgress {
    pub(crate) fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Removes the spinner from the terminal.
    pub(crate) fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for SpinnerProgress {
    fn strategy_started(&self, strategy: SearchStrategy) {
        self.bar.set_message(format!("{strategy} search"));
    }

    fn row_added(&self, strategy: SearchStrategy, rows_so_far: usize) {
        self.bar
            .set_message(format!("{strategy} search: {rows_so_far} rows"));
    }

    fn strategy_finished(&self, strategy: SearchStrategy, rows: usize) {
        self.bar.println(format!("{strategy} search: {rows} rows"));
    }
}
