//! Clique and independence numbers by exhaustive subset search.
//!
//! [`largest`] probes witness sizes `2, 3, ...` in turn. For each size it walks
//! every subset of that size in lexicographic order and stops at the first one
//! the [`Target`] admits. The first size with no admissible subset ends the
//! search: clique-hood and coclique-hood are inherited by subsets, so no larger
//! size can succeed either.

use crate::error::Result;
use crate::graph::Graph;
use crate::subset::Subset;

/// Which vertex-set property to maximise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Every pair of selected vertices is adjacent.
    Clique,
    /// No pair of selected vertices is adjacent.
    Coclique,
}

impl Target {
    /// Returns whether `vertices` form a clique/coclique in `graph`.
    ///
    /// Sets of size 0 or 1 are admitted vacuously.
    ///
    /// # Errors
    /// Propagates [`RamseyError::IndexOutOfRange`](crate::RamseyError::IndexOutOfRange)
    /// for a vertex outside the graph.
    pub fn admits(self, graph: &Graph, vertices: &[usize]) -> Result<bool> {
        let want = self == Target::Clique;
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if graph.has_edge(u, v)? != want {
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// The opposite property (a clique of `G` is a coclique of its complement).
    pub const fn dual(self) -> Self {
        match self {
            Target::Clique => Target::Coclique,
            Target::Coclique => Target::Clique,
        }
    }
}

/// Returns the first `k`-subset of `graph`'s vertices admitted by `target`.
fn first_admitted(graph: &Graph, target: Target, k: usize) -> Result<Option<Subset>> {
    let Some(mut set) = Subset::initial(graph.order(), k) else {
        return Ok(None);
    };
    loop {
        if target.admits(graph, set.as_slice())? {
            return Ok(Some(set));
        }
        if !set.advance() {
            return Ok(None);
        }
    }
}

/// Returns whether some `k`-subset of `graph` is admitted by `target`.
///
/// # Errors
/// Only if `graph` violates its own bounds, which cannot happen for graphs
/// built through the public API.
pub fn reaches(graph: &Graph, target: Target, k: usize) -> Result<bool> {
    Ok(first_admitted(graph, target, k)?.is_some())
}

/// Returns the largest `k` such that some `k`-subset is admitted by `target`
/// (the clique number or independence number of `graph`).
///
/// An order-0 graph yields 0; any other graph yields at least 1.
///
/// # Errors
/// See [`reaches`].
pub fn largest(graph: &Graph, target: Target) -> Result<usize> {
    Ok(largest_witness(graph, target)?.map_or(0, |w| w.len()))
}

/// Like [`largest`], but also returns one admitted subset of maximum size.
///
/// Returns `None` only for the order-0 graph.
///
/// # Errors
/// See [`reaches`].
pub fn largest_witness(graph: &Graph, target: Target) -> Result<Option<Subset>> {
    let Some(mut best) = Subset::initial(graph.order(), 1) else {
        return Ok(None);
    };
    while let Some(found) = first_admitted(graph, target, best.len() + 1)? {
        best = found;
    }
    Ok(Some(best))
}

/// ω(G): the size of the largest clique.
///
/// # Errors
/// See [`reaches`].
pub fn clique_number(graph: &Graph) -> Result<usize> {
    largest(graph, Target::Clique)
}

/// α(G): the size of the largest coclique (independent set).
///
/// # Errors
/// See [`reaches`].
pub fn independence_number(graph: &Graph) -> Result<usize> {
    largest(graph, Target::Coclique)
}

// ============================================================================
// Tests
// ============================================================================
