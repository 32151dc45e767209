//! Latest-request-wins ordering for overlapping fetches.
//!
//! Each in-flight request holds a token drawn from a monotonically
//! increasing sequence. A handler checks `is_current` before touching
//! state, so a slow response started under an older token can never
//! overwrite the result of a newer one. Nothing is cancelled upstream;
//! stale responses simply complete and get discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct RequestSequence {
    current: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every token issued before.
    pub fn begin(&self) -> RequestToken {
        let id = self.current.fetch_add(1, Ordering::Relaxed) + 1;
        RequestToken {
            current: Arc::clone(&self.current),
            id,
        }
    }

    /// Supersedes all outstanding tokens without starting a new
    /// request. Used on consumer teardown.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::Relaxed);
    }
}

pub struct RequestToken {
    current: Arc<AtomicU64>,
    id: u64,
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Relaxed) == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_token_wins() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn rapid_changes_leave_only_the_last_current() {
        let seq = RequestSequence::new();
        let tokens: Vec<_> = (0..10).map(|_| seq.begin()).collect();

        let current: Vec<_> = tokens.iter().filter(|t| t.is_current()).collect();
        assert_eq!(current.len(), 1);
        assert!(tokens.last().is_some_and(|t| t.is_current()));
    }

    #[test]
    fn invalidate_discards_in_flight_requests() {
        let seq = RequestSequence::new();
        let token = seq.begin();
        seq.invalidate();

        // The late-resolving handler must see itself as stale.
        assert!(!token.is_current());
    }

    #[test]
    fn tokens_outlive_the_sequence_handle() {
        let seq = RequestSequence::new();
        let token = seq.begin();
        drop(seq);
        assert!(token.is_current());
    }
}
