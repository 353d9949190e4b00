//! Enumeration of every labeled graph of a fixed order.
//!
//! A graph of order `n` is identified with its edge-set encoding: one boolean
//! per pair `(a, b)`, `a < b`, in [`pair_slot`](crate::graph::pair_slot)
//! order. [`EdgeState`] walks these encodings as a binary counter whose least
//! significant bit is slot 0, so for `n = 3` the sequence is
//! `___, *__, _*_, **_, __*, *_*, _**, ***`.

use crate::error::Result;
use crate::graph::{pair_count, Graph};
use std::fmt;
use std::ops::Deref;

/// Number of labeled graphs of order `n` (`2^(n(n-1)/2)`), if it fits in a `u128`.
///
/// Display-only: enumeration never depends on this count.
pub fn configuration_count(n: usize) -> Option<u128> {
    let slots = u32::try_from(pair_count(n)).ok()?;
    1u128.checked_shl(slots)
}

/// Edge-set encoding of a graph, advanced as a binary counter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeState {
    order: usize,
    slots: Vec<bool>,
}

impl EdgeState {
    /// The all-absent encoding (edgeless graph) for order `order`.
    pub fn new(order: usize) -> Self {
        Self {
            order,
            slots: vec![false; pair_count(order)],
        }
    }

    /// Order of the graphs this state encodes.
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The encoding as a slice of slot values.
    #[inline(always)]
    pub fn as_slice(&self) -> &[bool] {
        &self.slots
    }

    /// Steps to the next configuration.
    ///
    /// Starting at slot 0, `true` slots are cleared and carry onward; the first
    /// `false` slot is set and stops the carry. Returns `false` when the carry
    /// runs off the last slot, at which point every slot is `false` again.
    pub fn increment(&mut self) -> bool {
        for slot in &mut self.slots {
            if *slot {
                *slot = false;
            } else {
                *slot = true;
                return true;
            }
        }
        false
    }

    /// Materializes the encoded graph.
    ///
    /// # Errors
    /// Only if the slot count disagrees with the order, which `EdgeState`
    /// never allows.
    pub fn to_graph(&self) -> Result<Graph> {
        Graph::from_edge_state(self.order, &self.slots)
    }
}

impl Deref for EdgeState {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.slots
    }
}

/// Renders one character per slot: `*` present, `_` absent.
impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &slot in &self.slots {
            f.write_str(if slot { "*" } else { "_" })?;
        }
        Ok(())
    }
}

/// Produces every labeled graph of a fixed order, reusing one [`Graph`].
///
/// The first call to [`GraphEnumerator::next_graph`] yields the edgeless
/// graph; each later call applies [`EdgeState::increment`] and rewrites the
/// held graph in place.
#[derive(Clone, Debug)]
pub struct GraphEnumerator {
    state: EdgeState,
    graph: Graph,
    started: bool,
    done: bool,
}

impl GraphEnumerator {
    /// Starts an enumeration of the graphs of order `order`.
    pub fn new(order: usize) -> Self {
        Self {
            state: EdgeState::new(order),
            graph: Graph::new(order),
            started: false,
            done: false,
        }
    }

    /// Returns the next graph together with its encoding, or `None` once all
    /// `2^(n(n-1)/2)` configurations have been produced.
    ///
    /// # Errors
    /// Only if the held graph rejects the state, which cannot happen since
    /// both are built for the same order.
    pub fn next_graph(&mut self) -> Result<Option<(&EdgeState, &Graph)>> {
        if self.done {
            return Ok(None);
        }
        if self.started {
            if !self.state.increment() {
                self.done = true;
                return Ok(None);
            }
        } else {
            self.started = true;
        }
        self.graph.reset_from(&self.state)?;
        Ok(Some((&self.state, &self.graph)))
    }
}

// ============================================================================
// Tests
// ============================================================================
