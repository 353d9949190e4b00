//! Fixed-order simple undirected graphs with bounds-checked edge access.
//!
//! The adjacency relation is stored as a dense row-major `order x order`
//! boolean matrix. Every edge operation goes through [`Graph::slot`], which
//! validates both endpoints, so an out-of-range vertex is reported as
//! [`RamseyError::IndexOutOfRange`] instead of touching foreign memory.

use crate::error::{RamseyError, Result};
use rand::Rng;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

// ============================================================================
// Pair indexing
// ============================================================================

/// Returns `n * (n-1) / 2`, the number of unordered vertex pairs of an
/// order-`n` graph.
#[inline(always)]
pub const fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Returns the position of the pair `(a, b)` in the edge-set encoding of an
/// order-`n` graph, or `None` unless `a < b < n`.
///
/// Pairs are ordered by `a` ascending, then `b` ascending: `(0,1), (0,2), ...,
/// (0,n-1), (1,2), ...`.
#[inline]
pub const fn pair_slot(n: usize, a: usize, b: usize) -> Option<usize> {
    if a < b && b < n {
        Some(a * n - a * (a + 1) / 2 + (b - a - 1))
    } else {
        None
    }
}

// ============================================================================
// Graph
// ============================================================================

/// A simple undirected graph on the vertices `0..order`.
///
/// Invariant: `has_edge(u, v) == has_edge(v, u)` and the diagonal is never set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Graph {
    order: usize,
    adj: Vec<bool>,
}

impl Graph {
    /// Creates an edgeless graph on `order` vertices.
    ///
    /// # Panics
    /// Panics if the `order x order` matrix does not fit in memory; use
    /// [`Graph::try_new`] to get an error instead.
    pub fn new(order: usize) -> Self {
        match Self::try_with_order(order) {
            Ok(g) => g,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates an edgeless graph from a signed order.
    ///
    /// # Errors
    /// Returns [`RamseyError::InvalidArgument`] if `order` is negative or the
    /// adjacency matrix cannot be allocated.
    pub fn try_new(order: i64) -> Result<Self> {
        let order = usize::try_from(order)
            .map_err(|_| RamseyError::invalid(format!("graph order must be >= 0, got {order}")))?;
        Self::try_with_order(order)
    }

    fn try_with_order(order: usize) -> Result<Self> {
        let cells = order
            .checked_mul(order)
            .ok_or_else(|| RamseyError::invalid(format!("graph order {order} is too large")))?;
        let mut adj = Vec::new();
        adj.try_reserve_exact(cells).map_err(|e| {
            RamseyError::invalid(format!("cannot allocate a graph of order {order}: {e}"))
        })?;
        adj.resize(cells, false);
        Ok(Self { order, adj })
    }

    /// Creates the complete graph `K_order`.
    pub fn complete(order: usize) -> Self {
        let mut g = Self::new(order);
        for u in 0..order {
            for v in 0..order {
                g.adj[u * order + v] = u != v;
            }
        }
        g
    }

    /// Creates the cycle `0 - 1 - ... - (order-1) - 0`.
    ///
    /// # Errors
    /// Returns [`RamseyError::InvalidArgument`] if `order < 3`.
    pub fn cycle(order: usize) -> Result<Self> {
        if order < 3 {
            return Err(RamseyError::invalid(format!(
                "a cycle needs at least 3 vertices, got {order}"
            )));
        }
        let mut g = Self::new(order);
        for u in 0..order {
            g.add_edge(u, (u + 1) % order)?;
        }
        Ok(g)
    }

    /// Builds a graph from an explicit list of undirected edges.
    ///
    /// # Errors
    /// Fails like [`Graph::add_edge`] on the first bad pair.
    pub fn from_edges(order: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(order);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    /// Builds a graph from an edge-set encoding (see [`Graph::reset_from`]).
    ///
    /// # Errors
    /// Returns [`RamseyError::InvalidArgument`] if `edges.len()` is not
    /// [`pair_count(order)`](pair_count).
    pub fn from_edge_state(order: usize, edges: &[bool]) -> Result<Self> {
        let mut g = Self::new(order);
        g.reset_from(edges)?;
        Ok(g)
    }

    /// Samples an Erdős–Rényi graph where every pair is an edge with probability `p`.
    pub fn random<R: Rng>(order: usize, p: f64, rng: &mut R) -> Self {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");

        let mut g = Self::new(order);
        for u in 0..order {
            for v in (u + 1)..order {
                if rng.random_bool(p) {
                    g.set_pair(u, v, true);
                }
            }
        }
        g
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Maps `(u, v)` to its cell in the adjacency matrix.
    ///
    /// # Errors
    /// Returns [`RamseyError::IndexOutOfRange`] for the first endpoint that is
    /// not below `order`.
    #[inline]
    fn slot(&self, u: usize, v: usize) -> Result<usize> {
        for index in [u, v] {
            if index >= self.order {
                return Err(RamseyError::IndexOutOfRange {
                    index,
                    order: self.order,
                });
            }
        }
        Ok(u * self.order + v)
    }

    #[inline(always)]
    fn set_pair(&mut self, u: usize, v: usize, present: bool) {
        self.adj[u * self.order + v] = present;
        self.adj[v * self.order + u] = present;
    }

    fn check_distinct(u: usize, v: usize) -> Result<()> {
        if u == v {
            return Err(RamseyError::invalid(format!("self-loop at vertex {u}")));
        }
        Ok(())
    }

    /// Adds the edge `{u, v}`; returns whether it was already present.
    ///
    /// # Errors
    /// [`RamseyError::IndexOutOfRange`] if an endpoint is out of range,
    /// [`RamseyError::InvalidArgument`] if `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        let cell = self.slot(u, v)?;
        Self::check_distinct(u, v)?;
        let existed = self.adj[cell];
        self.set_pair(u, v, true);
        Ok(existed)
    }

    /// Removes the edge `{u, v}`; returns whether it was present.
    ///
    /// # Errors
    /// Same as [`Graph::add_edge`].
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool> {
        let cell = self.slot(u, v)?;
        Self::check_distinct(u, v)?;
        let existed = self.adj[cell];
        self.set_pair(u, v, false);
        Ok(existed)
    }

    /// Returns whether the edge `{u, v}` exists. `has_edge(u, u)` is always `false`.
    ///
    /// # Errors
    /// [`RamseyError::IndexOutOfRange`] if an endpoint is out of range.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool> {
        let cell = self.slot(u, v)?;
        Ok(self.adj[cell])
    }

    /// Overwrites every pair from an edge-set encoding.
    ///
    /// `edges[pair_slot(order, a, b)?]` decides whether `{a, b}` is an edge.
    ///
    /// # Errors
    /// Returns [`RamseyError::InvalidArgument`] if `edges.len()` is not
    /// [`pair_count(order)`](pair_count).
    pub fn reset_from(&mut self, edges: &[bool]) -> Result<()> {
        let expected = pair_count(self.order);
        if edges.len() != expected {
            return Err(RamseyError::invalid(format!(
                "edge state for order {} must have {expected} slots, got {}",
                self.order,
                edges.len()
            )));
        }

        let mut slot = 0;
        for a in 0..self.order {
            for b in (a + 1)..self.order {
                self.set_pair(a, b, edges[slot]);
                slot += 1;
            }
        }
        Ok(())
    }

    /// Returns the edge-set encoding of this graph.
    pub fn to_edge_state(&self) -> Vec<bool> {
        let mut out = Vec::with_capacity(pair_count(self.order));
        for a in 0..self.order {
            for b in (a + 1)..self.order {
                out.push(self.adj[a * self.order + b]);
            }
        }
        out
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().filter(|&&e| e).count() / 2
    }

    /// Returns the complement graph (same vertices, pairs toggled).
    pub fn complement(&self) -> Self {
        let mut g = Self::new(self.order);
        for u in 0..self.order {
            for v in (u + 1)..self.order {
                g.set_pair(u, v, !self.adj[u * self.order + v]);
            }
        }
        g
    }

    /// Writes the graph as a `0/1` adjacency matrix, one row per line.
    ///
    /// # Errors
    /// Returns any I/O error from `w`.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{self}")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.adj.chunks(self.order.max(1)).take(self.order) {
            for &cell in row {
                f.write_str(if cell { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Errors encountered while parsing an adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphParseError {
    /// No non-empty rows were found.
    #[error("adjacency matrix is empty")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("adjacency matrix is not square: row {row} has length {got}, expected {expected}")]
    NonSquare {
        /// The row index with wrong length.
        row: usize,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
    /// Encountered a non `0/1` character.
    #[error("invalid character at ({row}, {col}): {ch:?} (expected '0' or '1')")]
    InvalidChar {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The invalid character.
        ch: char,
    },
    /// Diagonal contains a `1`.
    #[error("self-loop detected at vertex {vertex}")]
    SelfLoop {
        /// The vertex with a self-loop.
        vertex: usize,
    },
    /// `A[i][j] != A[j][i]`.
    #[error("matrix is not symmetric at ({i},{j})")]
    NotSymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
}

/// Parses a `0/1` adjacency matrix.
///
/// Blank lines and surrounding whitespace are ignored. The matrix must be
/// square, symmetric, and have a zero diagonal.
///
/// # Errors
/// See [`GraphParseError`].
pub fn parse_adjacency_matrix(text: &str) -> std::result::Result<Graph, GraphParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(GraphParseError::Empty);
    }
    let n = lines.len();

    let mut g = Graph::new(n);
    for (i, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != n {
            return Err(GraphParseError::NonSquare {
                row: i,
                expected: n,
                got: chars.len(),
            });
        }
        for (j, &ch) in chars.iter().enumerate() {
            g.adj[i * n + j] = match ch {
                '0' => false,
                '1' => true,
                _ => return Err(GraphParseError::InvalidChar { row: i, col: j, ch }),
            };
        }
    }

    for i in 0..n {
        if g.adj[i * n + i] {
            return Err(GraphParseError::SelfLoop { vertex: i });
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if g.adj[i * n + j] != g.adj[j * n + i] {
                return Err(GraphParseError::NotSymmetric { i, j });
            }
        }
    }

    Ok(g)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn new_graph_is_edgeless() {
        let g = Graph::new(6);
        assert_eq!(g.order(), 6);
        assert_eq!(g.edge_count(), 0);
        for u in 0..6 {
            for v in 0..6 {
                assert!(!g.has_edge(u, v).unwrap());
            }
        }
    }

    #[test]
    fn try_new_rejects_negative_order() {
        assert!(matches!(
            Graph::try_new(-1),
            Err(RamseyError::InvalidArgument { .. })
        ));
        assert_eq!(Graph::try_new(0).unwrap().order(), 0);
        assert_eq!(Graph::try_new(4).unwrap().order(), 4);
    }

    #[test]
    fn try_new_rejects_unallocatable_order() {
        // 2^32 squared overflows usize on 64-bit targets.
        assert!(matches!(
            Graph::try_new(1i64 << 32),
            Err(RamseyError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Graph::try_new(i64::MAX),
            Err(RamseyError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn edges_are_symmetric() {
        let mut g = Graph::new(5);
        for u in 0..5 {
            for v in 0..5 {
                if u == v {
                    continue;
                }
                g.add_edge(u, v).unwrap();
                assert!(g.has_edge(u, v).unwrap());
                assert!(g.has_edge(v, u).unwrap());
                g.remove_edge(u, v).unwrap();
                assert!(!g.has_edge(u, v).unwrap());
                assert!(!g.has_edge(v, u).unwrap());
            }
        }
    }

    #[test]
    fn add_and_remove_report_prior_state() {
        let mut g = Graph::new(4);
        assert!(!g.add_edge(0, 3).unwrap());
        assert!(g.add_edge(0, 3).unwrap());
        assert!(g.add_edge(3, 0).unwrap());
        assert!(g.remove_edge(3, 0).unwrap());
        assert!(!g.remove_edge(0, 3).unwrap());
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut g = Graph::new(3);
        assert_eq!(
            g.add_edge(0, 3),
            Err(RamseyError::IndexOutOfRange { index: 3, order: 3 })
        );
        assert_eq!(
            g.remove_edge(7, 1),
            Err(RamseyError::IndexOutOfRange { index: 7, order: 3 })
        );
        assert_eq!(
            g.has_edge(1, 9),
            Err(RamseyError::IndexOutOfRange { index: 9, order: 3 })
        );
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = Graph::new(3);
        assert!(matches!(
            g.add_edge(1, 1),
            Err(RamseyError::InvalidArgument { .. })
        ));
        assert!(!g.has_edge(1, 1).unwrap());
    }

    #[test]
    fn pair_slot_is_lexicographic() {
        let n = 5;
        let mut expected = 0;
        for a in 0..n {
            for b in (a + 1)..n {
                assert_eq!(pair_slot(n, a, b), Some(expected), "pair ({a},{b})");
                expected += 1;
            }
        }
        assert_eq!(expected, pair_count(n));
        assert_eq!(pair_slot(3, 2, 1), None);
        assert_eq!(pair_slot(3, 1, 1), None);
        assert_eq!(pair_slot(3, 1, 3), None);
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(9), 36);
    }

    #[test]
    fn reset_from_overwrites_every_pair() {
        let mut g = Graph::complete(4);
        // slots: (0,1) (0,2) (0,3) (1,2) (1,3) (2,3)
        g.reset_from(&[true, false, false, false, false, true]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(1, 0).unwrap());
        assert!(g.has_edge(3, 2).unwrap());
        assert!(!g.has_edge(0, 2).unwrap());
        assert_eq!(g.to_edge_state(), vec![true, false, false, false, false, true]);
    }

    #[test]
    fn reset_from_rejects_wrong_length() {
        let mut g = Graph::new(4);
        assert!(matches!(
            g.reset_from(&[true; 5]),
            Err(RamseyError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn edge_state_roundtrips_random_graphs() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0FFEE);
        for order in 0..10 {
            let g = Graph::random(order, 0.5, &mut rng);
            let back = Graph::from_edge_state(order, &g.to_edge_state()).unwrap();
            assert_eq!(g, back);
        }
    }

    #[test]
    fn complete_and_complement() {
        let k5 = Graph::complete(5);
        assert_eq!(k5.edge_count(), 10);
        assert_eq!(k5.complement(), Graph::new(5));
        assert_eq!(Graph::new(5).complement(), k5);
    }

    #[test]
    fn cycle_has_order_edges() {
        let c5 = Graph::cycle(5).unwrap();
        assert_eq!(c5.edge_count(), 5);
        assert!(c5.has_edge(4, 0).unwrap());
        assert!(!c5.has_edge(0, 2).unwrap());
        assert!(Graph::cycle(2).is_err());
    }

    #[test]
    fn write_and_parse_roundtrip() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut buf = Vec::new();
        g.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "0100\n1010\n0101\n0010\n");
        assert_eq!(parse_adjacency_matrix(&text).unwrap(), g);
    }

    #[test]
    fn parse_adjacency_matrix_rejects_malformed_input() {
        assert_eq!(parse_adjacency_matrix(" \n\n"), Err(GraphParseError::Empty));
        assert!(matches!(
            parse_adjacency_matrix("01\n1\n"),
            Err(GraphParseError::NonSquare { row: 1, .. })
        ));
        assert!(matches!(
            parse_adjacency_matrix("0x\n10\n"),
            Err(GraphParseError::InvalidChar { row: 0, col: 1, ch: 'x' })
        ));
        assert_eq!(
            parse_adjacency_matrix("11\n10\n"),
            Err(GraphParseError::SelfLoop { vertex: 0 })
        );
        assert_eq!(
            parse_adjacency_matrix("01\n00\n"),
            Err(GraphParseError::NotSymmetric { i: 0, j: 1 })
        );
    }
}
