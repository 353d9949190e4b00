//! Error taxonomy shared by the graph, subset, and search layers.

use thiserror::Error;

/// Errors surfaced by graph operations and the Ramsey search.
///
/// Hitting the safety ceiling is not an error; see
/// [`SearchOutcome::SafetyLimitReached`](crate::search::SearchOutcome::SafetyLimitReached).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RamseyError {
    /// An argument is outside its domain (non-positive `a`/`b`, negative order,
    /// self-loop, mismatched edge-state length, ...).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the violated requirement.
        reason: String,
    },
    /// A vertex index does not address a vertex of the graph.
    #[error("vertex {index} is out of range for a graph of order {order}")]
    IndexOutOfRange {
        /// The offending vertex index.
        index: usize,
        /// Order of the graph (valid indices are `0..order`).
        order: usize,
    },
    /// The search observed its cancellation flag.
    #[error("search cancelled while checking graphs of order {order}")]
    Cancelled {
        /// The order being checked when cancellation was observed.
        order: usize,
    },
}

impl RamseyError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RamseyError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = RamseyError> = std::result::Result<T, E>;

// ============================================================================
// Tests
// ============================================================================
