// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-length encoding of the prefix under construction.
//!
//! The tracker is a stack of `(symbol, length)` runs. `extend` and
//! `undo_extend` are O(1) inverses and must be paired in stack order by the
//! caller. `compare_reflection` decides how the reversal of the current prefix
//! compares with the prefix itself, which is how the search rejects branches
//! whose mirror image would be the smaller representative.

use std::cmp::Ordering;

/// A maximal block of one repeated symbol: `(symbol, length)`.
pub type Run = (usize, usize);

/// Outcome of comparing the run sequence with its own reversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// Runs are pairwise identical up to the midpoint; chirality undecided.
    PalindromeSoFar,
    /// The prefix precedes its reversal; it can still be canonical.
    FavorsCanonical,
    /// The reversal precedes the prefix; no completion is canonical.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunLengthTracker {
    runs: Vec<Run>,
    depth: usize,
}

impl RunLengthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker with room for `capacity` runs, so the search never reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            runs: Vec::with_capacity(capacity),
            depth: 0,
        }
    }

    /// Append one symbol to the encoded prefix.
    pub fn extend(&mut self, symbol: usize) {
        match self.runs.last_mut() {
            Some((last, length)) if *last == symbol => *length += 1,
            _ => self.runs.push((symbol, 1)),
        }
        self.depth += 1;
    }

    /// Undo the most recent [`Self::extend`].
    ///
    /// # Panics
    ///
    /// Panics if there is nothing to undo.
    pub fn undo_extend(&mut self) {
        let (_, length) = self
            .runs
            .last_mut()
            .expect("undo_extend on an empty run-length encoding");
        if *length == 1 {
            self.runs.pop();
        } else {
            *length -= 1;
        }
        self.depth -= 1;
    }

    /// Number of runs (`m`).
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Total length encoded, i.e. the current search depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Run at a 0-based index.
    pub fn run(&self, index: usize) -> Option<Run> {
        self.runs.get(index).copied()
    }

    /// Compare run `i` against its mirror run `m - 1 - i` from the outside in.
    ///
    /// The first unequal pair decides. When the symbols agree but the lengths
    /// differ, the longer run pushes a different symbol against the shorter
    /// one, so the decision moves to the neighbouring run on the appropriate
    /// side.
    pub fn compare_reflection(&self) -> Reflection {
        let runs = &self.runs;
        let m = runs.len();

        let mut i = 0;
        while 2 * (i + 1) <= m && runs[i] == runs[m - 1 - i] {
            i += 1;
        }
        if 2 * (i + 1) > m {
            return Reflection::PalindromeSoFar;
        }

        let (front, mirror) = (runs[i], runs[m - 1 - i]);
        match front.0.cmp(&mirror.0) {
            Ordering::Less => Reflection::FavorsCanonical,
            Ordering::Greater => Reflection::Reject,
            Ordering::Equal => {
                if front.1 < mirror.1 && runs[i + 1].0 < mirror.0 {
                    Reflection::FavorsCanonical
                } else if front.1 > mirror.1 && front.0 < runs[m - 2 - i].0 {
                    Reflection::FavorsCanonical
                } else {
                    Reflection::Reject
                }
            }
        }
    }
}

/// Run-length form of a dense sequence.
pub fn compress(sequence: &[usize]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for &symbol in sequence {
        match runs.last_mut() {
            Some((last, length)) if *last == symbol => *length += 1,
            _ => runs.push((symbol, 1)),
        }
    }
    runs
}

/// Dense sequence from its run-length form.
pub fn expand(runs: &[Run]) -> Vec<usize> {
    runs.iter()
        .flat_map(|&(symbol, length)| std::iter::repeat(symbol).take(length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(sequence: &[usize]) -> RunLengthTracker {
        let mut tracker = RunLengthTracker::new();
        for &symbol in sequence {
            tracker.extend(symbol);
        }
        tracker
    }

    #[test]
    fn test_extend_merges_runs() {
        let t = tracker(&[0, 1, 1, 2, 2, 2]);
        assert_eq!(t.runs(), &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.depth(), 6);
        assert_eq!(t.run(1), Some((1, 2)));
        assert_eq!(t.run(3), None);
    }

    #[test]
    fn test_undo_is_exact_inverse() {
        let mut t = tracker(&[0, 1, 1]);
        let snapshot = t.clone();

        t.extend(1);
        t.extend(2);
        assert_eq!(t.runs(), &[(0, 1), (1, 3), (2, 1)]);

        t.undo_extend();
        t.undo_extend();
        assert_eq!(t, snapshot);

        t.undo_extend();
        t.undo_extend();
        t.undo_extend();
        assert!(t.is_empty());
        assert_eq!(t.depth(), 0);
    }

    #[test]
    #[should_panic(expected = "undo_extend on an empty")]
    fn test_undo_empty_panics() {
        RunLengthTracker::new().undo_extend();
    }

    #[test]
    fn test_palindromic_runs() {
        assert_eq!(tracker(&[0]).compare_reflection(), Reflection::PalindromeSoFar);
        assert_eq!(
            tracker(&[0, 1, 1, 0]).compare_reflection(),
            Reflection::PalindromeSoFar
        );
        assert_eq!(
            tracker(&[0, 1, 2, 1, 0]).compare_reflection(),
            Reflection::PalindromeSoFar
        );
    }

    #[test]
    fn test_symbol_decides() {
        // (0,1)(1,1)(2,1): 0 against 2
        assert_eq!(
            tracker(&[0, 1, 2]).compare_reflection(),
            Reflection::FavorsCanonical
        );
        // (0,1)(2,1)(1,1)(0,1): after the outer pair, 2 against 1
        assert_eq!(
            tracker(&[0, 2, 1, 0]).compare_reflection(),
            Reflection::Reject
        );
    }

    #[test]
    fn test_length_tie_break() {
        // (0,1)(1,1)(0,2): equal symbols, front shorter; next front run 1 is
        // not below the mirror symbol 0.
        assert_eq!(
            tracker(&[0, 1, 0, 0]).compare_reflection(),
            Reflection::Reject
        );
        // (0,2)(1,1)(0,1): front longer; its symbol 0 is below the run
        // before the mirror (1).
        assert_eq!(
            tracker(&[0, 0, 1, 0]).compare_reflection(),
            Reflection::FavorsCanonical
        );
        // (0,1)(1,1)(2,1)(0,1)(2,1)(0,1): outer pair equal, then 1 against 2.
        assert_eq!(
            tracker(&[0, 1, 2, 0, 2, 0]).compare_reflection(),
            Reflection::FavorsCanonical
        );
    }

    #[test]
    fn test_compress_expand() {
        let sequence = vec![0, 2, 1, 2, 1, 2];
        let runs = compress(&sequence);
        assert_eq!(runs, vec![(0, 1), (2, 1), (1, 1), (2, 1), (1, 1), (2, 1)]);
        assert_eq!(expand(&runs), sequence);
        assert!(compress(&[]).is_empty());
    }
}
