//! Progress reporting hooks for search runs.
//!
//! Progress is purely informational: nothing in the pipeline reads it back.

use crate::strategy::SearchStrategy;

/// Receives progress events from the search runner.
pub trait ProgressObserver {
    fn strategy_started(&self, _strategy: SearchStrategy) {}

    /// Called after each row is appended. `rows_so_far` counts the rows the
    /// current strategy has produced and only ever increases.
    fn row_added(&self, strategy: SearchStrategy, rows_so_far: usize);

    fn strategy_finished(&self, _strategy: SearchStrategy, _rows: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn row_added(&self, _strategy: SearchStrategy, _rows_so_far: usize) {}
}
