//! Query-scoped variable id counter

use std::sync::atomic::{AtomicU32, Ordering};

/// Source of the numeric suffixes that keep query variables unique.
///
/// One counter lives for the whole life of a query-building session and is
/// threaded explicitly through every variable assignment. It is never reset
/// while a query is being built; removing a criterion leaves a gap in the id
/// sequence rather than reusing a number.
#[derive(Debug, Default)]
pub struct VariableCounter {
    next_id: AtomicU32,
}

impl VariableCounter {
    /// Create a counter whose first id is `1`.
    pub fn new() -> Self {
        Self {
            next_id: AtomicU32::new(1),
        }
    }

    /// Create a counter resuming at `next`, for restoring a saved session.
    pub fn starting_at(next: u32) -> Self {
        Self {
            next_id: AtomicU32::new(next),
        }
    }

    /// Hand out the next unused id. Atomic, so the uniqueness guarantee
    /// holds even on a multi-threaded host.
    pub fn next(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// The id the next call to [`next`](Self::next) would return.
    pub fn peek(&self) -> u32 {
        self.next_id.load(Ordering::Relaxed)
    }
}
