//! Search driver: the smallest order whose every graph satisfies the Ramsey property.

use crate::enumerate::{configuration_count, EdgeState};
use crate::error::{RamseyError, Result};
use crate::graph::pair_count;
use crate::order::{check_order, OrderOutcome};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

// ============================================================================
// Configuration
// ============================================================================

/// Largest order tried by default before giving up.
pub const DEFAULT_SAFETY_LIMIT: usize = 30;

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Largest graph order to check. Orders `1..=safety_limit` are tried.
    pub safety_limit: usize,
    /// Optional cooperative cancellation flag, polled once per configuration.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            safety_limit: DEFAULT_SAFETY_LIMIT,
            cancel: None,
        }
    }
}

impl SearchConfig {
    /// Returns a copy with a different safety limit.
    pub fn with_safety_limit(mut self, safety_limit: usize) -> Self {
        self.safety_limit = safety_limit;
        self
    }

    /// Returns a copy that polls `flag` for cancellation.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }
}

// ============================================================================
// Observers
// ============================================================================

/// Progress and trace hooks fired by the search. Both default to no-ops.
pub trait SearchObserver {
    /// Called once before the graphs of order `n` are checked.
    fn on_order_start(&mut self, n: usize) {
        let _ = n;
    }

    /// Called once per enumerated configuration, before it is tested.
    fn on_configuration(&mut self, n: usize, state: &EdgeState) {
        let _ = (n, state);
    }
}

/// The no-op observer.
impl SearchObserver for () {}

/// Adapts a pair of closures into a [`SearchObserver`].
pub struct FnObserver<F, G> {
    on_order_start: F,
    on_configuration: G,
}

impl<F, G> FnObserver<F, G>
where
    F: FnMut(usize),
    G: FnMut(usize, &EdgeState),
{
    /// Wraps the two hooks.
    pub fn new(on_order_start: F, on_configuration: G) -> Self {
        Self {
            on_order_start,
            on_configuration,
        }
    }
}

impl<F, G> SearchObserver for FnObserver<F, G>
where
    F: FnMut(usize),
    G: FnMut(usize, &EdgeState),
{
    fn on_order_start(&mut self, n: usize) {
        (self.on_order_start)(n);
    }

    fn on_configuration(&mut self, n: usize, state: &EdgeState) {
        (self.on_configuration)(n, state);
    }
}

/// Routes the hooks to the `log` facade.
///
/// Order starts are logged at `info` with the number of graphs to check;
/// configurations at `trace`, rendered as `*`/`_` per edge slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_order_start(&mut self, n: usize) {
        match configuration_count(n) {
            Some(count) => log::info!("testing graphs of order {n}: up to {count} graphs to check"),
            None => log::info!(
                "testing graphs of order {n}: up to 2^{} graphs to check",
                pair_count(n)
            ),
        }
    }

    fn on_configuration(&mut self, n: usize, state: &EdgeState) {
        log::trace!("order {n} state: {state}");
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a Ramsey search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// `R(a, b)` equals this order.
    Found(usize),
    /// No order up to `limit` satisfied the property, so `R(a, b) > limit`.
    SafetyLimitReached {
        /// The configured ceiling.
        limit: usize,
    },
}

impl SearchOutcome {
    /// The found order, or the ceiling that was hit.
    #[inline]
    pub fn value(self) -> usize {
        match self {
            SearchOutcome::Found(n) => n,
            SearchOutcome::SafetyLimitReached { limit } => limit,
        }
    }

    /// Returns `true` if the search stopped at the ceiling.
    #[inline]
    pub fn hit_safety_limit(self) -> bool {
        matches!(self, SearchOutcome::SafetyLimitReached { .. })
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Computes `R(a, b)` with the default configuration and no hooks.
///
/// # Errors
/// [`RamseyError::InvalidArgument`] if `a < 1` or `b < 1`.
pub fn ram(a: i64, b: i64) -> Result<SearchOutcome> {
    ram_with(a, b, &SearchConfig::default(), &mut ())
}

/// Computes `R(a, b)`: tries orders `1, 2, ...` until every graph of the
/// order has a clique of size `a` or a coclique of size `b`.
///
/// # Errors
/// [`RamseyError::InvalidArgument`] if `a < 1` or `b < 1`;
/// [`RamseyError::Cancelled`] if the configured flag was raised.
pub fn ram_with<O: SearchObserver + ?Sized>(
    a: i64,
    b: i64,
    cfg: &SearchConfig,
    observer: &mut O,
) -> Result<SearchOutcome> {
    let a = positive("a", a)?;
    let b = positive("b", b)?;
    let cancel = cfg.cancel.as_deref();

    for n in 1..=cfg.safety_limit {
        observer.on_order_start(n);
        match check_order(a, b, n, &mut *observer, cancel)? {
            OrderOutcome::Holds { configurations } => {
                log::debug!("R({a}, {b}) = {n} ({configurations} graphs of order {n} checked)");
                return Ok(SearchOutcome::Found(n));
            }
            OrderOutcome::Fails { .. } => {}
        }
    }

    log::debug!("R({a}, {b}) > {}: safety limit reached", cfg.safety_limit);
    Ok(SearchOutcome::SafetyLimitReached {
        limit: cfg.safety_limit,
    })
}

fn positive(name: &str, value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(v) if v >= 1 => Ok(v),
        _ => Err(RamseyError::invalid(format!("{name} must be >= 1, got {value}"))),
    }
}

// ============================================================================
// Tests
// ============================================================================
