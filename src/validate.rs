//! Deterministic validation of lower-bound witnesses.
//!
//! A witness for `R(a, b) > n` is a graph on `n` vertices with no clique of
//! size `a` and no coclique of size `b`. Such graphs are exactly what
//! [`check_order`](crate::order::check_order) reports as counterexamples.

use crate::error::RamseyError;
use crate::extremal::{clique_number, independence_number};
use crate::graph::{parse_adjacency_matrix, Graph, GraphParseError};
use thiserror::Error;

/// Bundled witnesses: `(file name, matrix text, a, b)`.
const KNOWN_WITNESSES: [(&str, &str, usize, usize); 3] = [
    ("c5_r33.txt", include_str!("../witnesses/c5_r33.txt"), 3, 3),
    ("c8_r34.txt", include_str!("../witnesses/c8_r34.txt"), 3, 4),
    ("paley17_r44.txt", include_str!("../witnesses/paley17_r44.txt"), 4, 4),
];

/// Reasons a graph fails to witness `R(a, b) > n`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The adjacency matrix could not be parsed.
    #[error("{name}: {source}")]
    Parse {
        /// Name of the witness.
        name: String,
        /// Underlying parse failure.
        source: GraphParseError,
    },
    /// The graph contains a clique of size `a`.
    #[error("{name}: has a clique of size {clique_number} (needs < {a})")]
    CliqueTooLarge {
        /// Name of the witness.
        name: String,
        /// ω of the graph.
        clique_number: usize,
        /// Required clique bound.
        a: usize,
    },
    /// The graph contains a coclique of size `b`.
    #[error("{name}: has a coclique of size {independence_number} (needs < {b})")]
    CocliqueTooLarge {
        /// Name of the witness.
        name: String,
        /// α of the graph.
        independence_number: usize,
        /// Required coclique bound.
        b: usize,
    },
    /// A graph operation failed.
    #[error(transparent)]
    Graph(#[from] RamseyError),
}

// ============================================================================
// Public API
// ============================================================================

/// Validates the bundled witnesses for `R(3,3) > 5`, `R(3,4) > 8` and `R(4,4) > 17`.
///
/// # Errors
/// Returns the first witness that fails validation.
pub fn validate_known_witnesses() -> Result<(), ValidationError> {
    for (name, text, a, b) in KNOWN_WITNESSES {
        let g = validate_witness(text, name, a, b)?;
        log::debug!("{name}: witnesses R({a}, {b}) > {}", g.order());
    }
    Ok(())
}

/// Parses a `0/1` adjacency matrix and checks that it witnesses `R(a, b) > n`.
///
/// Returns the parsed graph.
///
/// # Errors
/// See [`ValidationError`].
pub fn validate_witness(text: &str, name: &str, a: usize, b: usize) -> Result<Graph, ValidationError> {
    let g = parse_adjacency_matrix(text).map_err(|source| ValidationError::Parse {
        name: name.to_owned(),
        source,
    })?;
    validate_graph(&g, name, a, b)?;
    Ok(g)
}

/// Checks that `graph` has no `a`-clique and no `b`-coclique.
///
/// # Errors
/// See [`ValidationError`].
pub fn validate_graph(graph: &Graph, name: &str, a: usize, b: usize) -> Result<(), ValidationError> {
    let omega = clique_number(graph)?;
    if omega >= a {
        return Err(ValidationError::CliqueTooLarge {
            name: name.to_owned(),
            clique_number: omega,
            a,
        });
    }
    let alpha = independence_number(graph)?;
    if alpha >= b {
        return Err(ValidationError::CocliqueTooLarge {
            name: name.to_owned(),
            independence_number: alpha,
            b,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
