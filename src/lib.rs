//! # Exhaustive Ramsey Numbers
//!
//! Computes small Ramsey numbers \(R(a, b)\) by brute force: for every order
//! `n = 1, 2, ...` it enumerates all labeled graphs on `n` vertices and checks
//! each for a clique of size `a` or a coclique (independent set) of size `b`.
//!
//! This crate provides:
//! - A bounds-checked dense [`Graph`](graph::Graph) with edge-set encoding.
//! - Lexicographic k-subset enumeration ([`subset`]).
//! - Clique and independence numbers by exhaustive subset search ([`extremal`]).
//! - Binary-counter enumeration of every labeled graph of an order ([`enumerate`]).
//! - The per-order check and the outer search driver ([`order`], [`search`]).
//!
//! ## Quick Start
//!
//! ```
//! use ramsey_exhaustive::search::{ram, SearchOutcome};
//!
//! assert_eq!(ram(3, 3).unwrap(), SearchOutcome::Found(6));
//! ```
//!
//! ## Progress Hooks
//!
//! ```
//! use ramsey_exhaustive::search::{ram_with, FnObserver, SearchConfig};
//!
//! let mut orders = Vec::new();
//! let mut observer = FnObserver::new(|n| orders.push(n), |_, _: &_| {});
//! let cfg = SearchConfig::default().with_safety_limit(2);
//! let outcome = ram_with(3, 3, &cfg, &mut observer).unwrap();
//! drop(observer);
//!
//! assert!(outcome.hit_safety_limit());
//! assert_eq!(orders, vec![1, 2]);
//! ```
//!
//! ## Working with Graphs Directly
//!
//! ```
//! use ramsey_exhaustive::extremal::{clique_number, independence_number};
//! use ramsey_exhaustive::graph::Graph;
//!
//! let c5 = Graph::cycle(5).unwrap();
//! assert_eq!(clique_number(&c5).unwrap(), 2);
//! assert_eq!(independence_number(&c5).unwrap(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Graph storage, edge-set encoding, adjacency-matrix parsing.
//! - [`subset`]: Strictly increasing k-subsets in lexicographic order.
//! - [`extremal`]: Clique / coclique maximisation.
//! - [`enumerate`]: All labeled graphs of a fixed order.
//! - [`order`]: Ramsey property for one order.
//! - [`search`]: Search driver, configuration and observers.
//! - [`validate`]: Bundled lower-bound witnesses.
//!
//! ## Performance Notes
//!
//! The search is doubly exponential in `n`: order `n` has \(2^{n(n-1)/2}\)
//! labeled graphs and isomorphic copies are not pruned. `R(3, 3)` finishes in
//! well under a second; `R(3, 4)` walks \(2^{36}\) graphs at order 9.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::doc_markdown)] // LaTeX-style notation in docs
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod enumerate;
pub mod error;
pub mod extremal;
pub mod graph;
pub mod order;
pub mod search;
pub mod subset;
pub mod validate;

pub use error::RamseyError;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::enumerate::{EdgeState, GraphEnumerator};
    pub use crate::error::RamseyError;
    pub use crate::extremal::{clique_number, independence_number, Target};
    pub use crate::graph::{parse_adjacency_matrix, Graph};
    pub use crate::order::{check_order, CounterExample, OrderOutcome};
    pub use crate::search::{
        ram, ram_with, FnObserver, LogObserver, SearchConfig, SearchObserver, SearchOutcome,
    };
    pub use crate::subset::Subset;
    pub use crate::validate::validate_known_witnesses;
}
