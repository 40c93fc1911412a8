use crate::error::{GraphoError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a traversal and whoever
/// wants to stop it (a signal handler, another thread).
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Interrupted)` once cancelled
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(GraphoError::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Counters collected during one expansion loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Entries pushed onto the open set
    pub pushed: usize,
    /// Nodes moved into the closed set
    pub expanded: usize,
    /// Popped entries discarded because their node was already expanded
    pub stale: usize,
    /// Expanded nodes the graph reported no adjacency for
    pub skipped: usize,
}

/// Log traversal statistics at debug level.
///
/// Usage:
/// ```rust,ignore
/// log_traversal_stats!(&stats, "search");
/// ```
#[macro_export]
macro_rules! log_traversal_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            pushed = $stats.pushed,
            expanded = $stats.expanded,
            stale = $stats.stale,
            skipped = $stats.skipped,
            "traversal_stats"
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());

        handle.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(GraphoError::Interrupted)));
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancelToken::new();
        let handle = token.clone();
        std::thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
