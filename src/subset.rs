//! Lexicographic enumeration of k-element subsets of `0..universe`.
//!
//! A [`Subset`] is always strictly increasing and every position `i` satisfies
//! `set[i] <= universe - 1 - (k - 1 - i)`, i.e. there is room for the rest of
//! the increasing tail. [`Subset::advance`] steps to the lexicographic
//! successor in place and reports exhaustion instead of wrapping.

use crate::error::{RamseyError, Result};

/// A strictly increasing selection of `k` vertices out of `0..universe`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subset {
    universe: usize,
    set: Vec<usize>,
}

impl Subset {
    /// Returns the first k-subset `[0, 1, ..., k-1]`, or `None` if `k > universe`.
    pub fn initial(universe: usize, k: usize) -> Option<Self> {
        if k > universe {
            return None;
        }
        Some(Self {
            universe,
            set: (0..k).collect(),
        })
    }

    /// Validates a caller-supplied subset.
    ///
    /// # Errors
    /// [`RamseyError::IndexOutOfRange`] if an element is `>= universe`,
    /// [`RamseyError::InvalidArgument`] if the elements are not strictly increasing.
    pub fn from_slice(universe: usize, set: &[usize]) -> Result<Self> {
        if let Some(&index) = set.iter().find(|&&v| v >= universe) {
            return Err(RamseyError::IndexOutOfRange {
                index,
                order: universe,
            });
        }
        if set.windows(2).any(|w| w[0] >= w[1]) {
            return Err(RamseyError::invalid(format!(
                "subset {set:?} is not strictly increasing"
            )));
        }
        Ok(Self {
            universe,
            set: set.to_vec(),
        })
    }

    /// Size of the universe the elements are drawn from.
    #[inline(always)]
    pub fn universe(&self) -> usize {
        self.universe
    }

    /// Number of selected elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns `true` for the empty subset.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// The selected elements in increasing order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.set
    }

    /// Largest value position `index` may hold.
    #[inline(always)]
    fn ceiling(&self, index: usize) -> usize {
        self.universe - self.set.len() + index
    }

    /// Steps to the lexicographic successor.
    ///
    /// Scans backward for the rightmost position below its ceiling, increments
    /// it, and resets every later position to its predecessor plus one. Returns
    /// `false` and leaves the subset untouched when no position can move.
    pub fn advance(&mut self) -> bool {
        let Some(index) = (0..self.set.len())
            .rev()
            .find(|&i| self.set[i] < self.ceiling(i))
        else {
            return false;
        };

        self.set[index] += 1;
        for i in (index + 1)..self.set.len() {
            self.set[i] = self.set[i - 1] + 1;
        }
        true
    }
}

/// Iterator over every k-subset of `0..universe` in lexicographic order.
#[derive(Clone, Debug)]
pub struct Subsets {
    current: Option<Subset>,
    fresh: bool,
}

impl Subsets {
    /// Enumerates all k-subsets of `0..universe`; empty when `k > universe`.
    pub fn new(universe: usize, k: usize) -> Self {
        Self {
            current: Subset::initial(universe, k),
            fresh: true,
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        if self.fresh {
            self.fresh = false;
        } else if !current.advance() {
            self.current = None;
            return None;
        }
        Some(current.as_slice().to_vec())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_choose_three_in_lexicographic_order() {
        let mut s = Subset::initial(5, 3).unwrap();
        let mut seen = vec![s.as_slice().to_vec()];
        let mut exhausted = 0;
        loop {
            if s.advance() {
                seen.push(s.as_slice().to_vec());
            } else {
                exhausted += 1;
                break;
            }
        }

        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 1, 4],
            vec![0, 2, 3],
            vec![0, 2, 4],
            vec![0, 3, 4],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
        ];
        assert_eq!(seen, expected);
        assert_eq!(exhausted, 1);
        // Exhaustion leaves the last subset in place.
        assert_eq!(s.as_slice(), &[2, 3, 4]);
        assert!(!s.advance());
    }

    #[test]
    fn four_choose_two() {
        let all: Vec<Vec<usize>> = Subsets::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn oversized_subsets_do_not_exist() {
        assert!(Subset::initial(3, 4).is_none());
        assert_eq!(Subsets::new(3, 4).count(), 0);
    }

    #[test]
    fn degenerate_sizes() {
        // Exactly one empty subset, and exactly one full subset.
        assert_eq!(Subsets::new(4, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
        assert_eq!(Subsets::new(0, 0).count(), 1);
        assert_eq!(Subsets::new(4, 4).collect::<Vec<_>>(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn counts_match_binomials() {
        fn binomial(n: usize, k: usize) -> usize {
            (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
        }
        for n in 0..=9 {
            for k in 0..=n {
                assert_eq!(Subsets::new(n, k).count(), binomial(n, k), "C({n},{k})");
            }
        }
    }

    #[test]
    fn every_subset_respects_ceilings() {
        let mut s = Subset::initial(7, 4).unwrap();
        loop {
            let k = s.len();
            for (i, &v) in s.as_slice().iter().enumerate() {
                assert!(v <= 7 - 1 - (k - 1 - i));
                if i > 0 {
                    assert!(s.as_slice()[i - 1] < v);
                }
            }
            if !s.advance() {
                break;
            }
        }
    }

    #[test]
    fn from_slice_validates() {
        let s = Subset::from_slice(5, &[1, 3, 4]).unwrap();
        assert_eq!(s.universe(), 5);
        assert_eq!(s.len(), 3);
        assert_eq!(
            Subset::from_slice(5, &[1, 5]),
            Err(RamseyError::IndexOutOfRange { index: 5, order: 5 })
        );
        assert!(matches!(
            Subset::from_slice(5, &[3, 3]),
            Err(RamseyError::InvalidArgument { .. })
        ));
        assert!(matches!(
            Subset::from_slice(5, &[4, 1]),
            Err(RamseyError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn advance_resumes_from_arbitrary_subset() {
        let mut s = Subset::from_slice(5, &[0, 3, 4]).unwrap();
        assert!(s.advance());
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }
}
