//! Exhaustive check of the Ramsey property for one graph order.

use crate::enumerate::{EdgeState, GraphEnumerator};
use crate::error::{RamseyError, Result};
use crate::extremal::{largest, Target};
use crate::graph::Graph;
use crate::search::SearchObserver;
use std::sync::atomic::{AtomicBool, Ordering};

/// A graph of the checked order with no `a`-clique and no `b`-coclique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterExample {
    /// Edge-set encoding of the offending graph.
    pub state: EdgeState,
    /// ω of the offending graph (`< a`).
    pub clique_number: usize,
    /// α of the offending graph (`< b`).
    pub independence_number: usize,
}

impl CounterExample {
    /// Materializes the offending graph.
    ///
    /// # Errors
    /// See [`EdgeState::to_graph`].
    pub fn to_graph(&self) -> Result<Graph> {
        self.state.to_graph()
    }
}

/// Result of checking every graph of one order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Every configuration has an `a`-clique or a `b`-coclique.
    Holds {
        /// Number of configurations examined (`2^(n(n-1)/2)`).
        configurations: u128,
    },
    /// The enumeration stopped at the first counterexample.
    Fails {
        /// The counterexample.
        witness: CounterExample,
        /// Number of configurations examined, the counterexample included.
        configurations: u128,
    },
}

impl OrderOutcome {
    /// Returns `true` if every graph of the order satisfies the property.
    #[inline]
    pub fn holds(&self) -> bool {
        matches!(self, OrderOutcome::Holds { .. })
    }

    /// Number of configurations examined.
    #[inline]
    pub fn configurations(&self) -> u128 {
        match self {
            OrderOutcome::Holds { configurations } | OrderOutcome::Fails { configurations, .. } => {
                *configurations
            }
        }
    }
}

/// Checks whether every graph of order `n` has a clique of size `a` or a
/// coclique of size `b`.
///
/// Graphs are visited in [`GraphEnumerator`] order and the observer sees each
/// one before it is tested. The independence number is only computed when the
/// clique number falls short of `a`. `cancel`, when given, is polled once per
/// configuration.
///
/// # Errors
/// [`RamseyError::Cancelled`] if `cancel` was raised.
pub fn check_order<O: SearchObserver + ?Sized>(
    a: usize,
    b: usize,
    n: usize,
    observer: &mut O,
    cancel: Option<&AtomicBool>,
) -> Result<OrderOutcome> {
    let mut graphs = GraphEnumerator::new(n);
    let mut configurations: u128 = 0;

    while let Some((state, graph)) = graphs.next_graph()? {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(RamseyError::Cancelled { order: n });
        }
        configurations += 1;
        observer.on_configuration(n, state);

        let omega = largest(graph, Target::Clique)?;
        if omega >= a {
            continue;
        }
        let alpha = largest(graph, Target::Coclique)?;
        if alpha < b {
            log::debug!(
                "order {n}: counterexample {state} (omega={omega}, alpha={alpha}) after {configurations} graphs"
            );
            return Ok(OrderOutcome::Fails {
                witness: CounterExample {
                    state: state.clone(),
                    clique_number: omega,
                    independence_number: alpha,
                },
                configurations,
            });
        }
    }

    Ok(OrderOutcome::Holds { configurations })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extremal::{clique_number, independence_number};
    use crate::graph::Graph;

    fn check(a: usize, b: usize, n: usize) -> OrderOutcome {
        check_order(a, b, n, &mut (), None).unwrap()
    }

    #[test]
    fn r33_fails_on_five_vertices_with_a_pentagon() {
        let outcome = check(3, 3, 5);
        let OrderOutcome::Fails {
            witness,
            configurations,
        } = outcome
        else {
            panic!("R(3,3) > 5 must produce a counterexample");
        };
        assert_eq!(configurations, 221);
        assert_eq!(witness.state.to_string(), "__***_**__");
        assert_eq!(witness.clique_number, 2);
        assert_eq!(witness.independence_number, 2);

        // 0-3-2-1-4-0 is a relabeled 5-cycle.
        let g = witness.to_graph().unwrap();
        let c5 = Graph::from_edges(5, &[(0, 3), (3, 2), (2, 1), (1, 4), (4, 0)]).unwrap();
        assert_eq!(g, c5);
    }

    #[test]
    fn r33_holds_on_six_vertices() {
        let outcome = check(3, 3, 6);
        assert!(outcome.holds());
        assert_eq!(outcome.configurations(), 1 << 15);
    }

    #[test]
    fn edgeless_graph_is_the_first_counterexample_when_b_exceeds_n() {
        let outcome = check(2, 3, 2);
        assert_eq!(outcome.configurations(), 1);
        let OrderOutcome::Fails { witness, .. } = outcome else {
            panic!("the edgeless graph on 2 vertices has no 3-coclique");
        };
        assert_eq!(witness.state.to_string(), "_");
        assert_eq!(witness.clique_number, 1);
        assert_eq!(witness.independence_number, 2);
    }

    #[test]
    fn single_vertex_order() {
        assert!(check(1, 5, 1).holds());
        assert!(check(5, 1, 1).holds());
        assert!(!check(2, 2, 1).holds());
    }

    #[test]
    fn counterexamples_really_avoid_both_targets() {
        for (a, b, n) in [(3, 3, 4), (4, 3, 5), (3, 4, 6)] {
            if let OrderOutcome::Fails { witness, .. } = check(a, b, n) {
                let g = witness.to_graph().unwrap();
                assert!(clique_number(&g).unwrap() < a);
                assert!(independence_number(&g).unwrap() < b);
            } else {
                panic!("order {n} should fail for ({a},{b})");
            }
        }
    }

    #[test]
    fn observer_sees_every_configuration_before_the_failure() {
        let mut seen = Vec::new();
        let mut observer = crate::search::FnObserver::new(
            |_| {},
            |n: usize, state: &EdgeState| {
                assert_eq!(n, 4);
                seen.push(state.to_string());
            },
        );
        let outcome = check_order(3, 3, 4, &mut observer, None).unwrap();
        drop(observer);
        assert_eq!(seen.len() as u128, outcome.configurations());
        assert_eq!(seen.first().map(String::as_str), Some("______"));
        assert_eq!(seen.last().map(String::as_str), Some("__**__"));
    }

    #[test]
    fn raised_cancel_flag_stops_the_check() {
        let flag = AtomicBool::new(true);
        assert_eq!(
            check_order(3, 3, 6, &mut (), Some(&flag)),
            Err(RamseyError::Cancelled { order: 6 })
        );

        let flag = AtomicBool::new(false);
        assert!(check_order(3, 3, 6, &mut (), Some(&flag)).unwrap().holds());
    }
}
