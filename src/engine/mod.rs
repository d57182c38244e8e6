// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for bracelets with fixed content.
//!
//! This is the fixed-content bracelet algorithm of Karim, Sawada, Alamgir and
//! Husnine, driven by an explicit stack of frames instead of recursion so that
//! it can hand out one bracelet at a time.
//!
//! # Architecture
//!
//! Each stack entry holds the control values of one depth:
//! - the period of the prefix (necklace test)
//! - the last depth at which the run sequence was palindromic
//! - where the trailing run of the largest symbol starts
//! - whether the reversal is already known to precede the prefix
//! - the symbol currently placed and the next one to try
//!
//! All other state lives in [`SearchState`] and is mutated in place: every
//! `place` made while descending is matched by a `retract` before the next
//! sibling is tried. Each node costs O(1) beyond the candidates it visits,
//! except when the smallest allowed symbol is used up: finding the first
//! candidate then scans the availability ring, O(k).
//!
//! Candidates at each depth are visited in ascending order, so the bracelets
//! come out in increasing lexicographic order.
//!
//! # Example
//!
//! ```
//! use bracelet_search::{BraceletGenerator, Content};
//!
//! let generator = BraceletGenerator::new(Content::new(vec![1, 2, 3]).unwrap());
//! let first: Vec<Vec<usize>> = generator
//!     .generate()
//!     .take(2)
//!     .map(|b| b.into_symbols())
//!     .collect();
//! assert_eq!(first, vec![vec![0, 1, 1, 2, 2, 2], vec![0, 1, 2, 1, 2, 2]]);
//! ```
//!
//! # References
//!
//! - Karim, S.; Sawada, J.; Alamgir, Z.; Husnine, S. M. (2013). "Generating
//!   bracelets with fixed content." Theoretical Computer Science 475, 103-112.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::content::Content;
use crate::output::{Bracelet, OutputAdapter};
use crate::runlength::Reflection;
use crate::state::statistics::{Counters, Statistics};
use crate::state::SearchState;

/// Control values of one search depth.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// 1-based position being filled (`t`).
    depth: usize,
    /// Period of the prefix as a prenecklace (`p`).
    period: usize,
    /// Depth at which the run sequence was last a palindrome (`r`).
    boundary: usize,
    /// Start of the trailing run of the largest symbol (`z`).
    run_start: usize,
    /// Number of runs when `boundary` was set (`b`).
    mirror_run: usize,
    /// The reversal is known to precede the prefix (`RS`).
    reflected: bool,
    /// Symbol placed at this depth, retracted before the next candidate.
    placed: Option<usize>,
    /// Next symbol to try.
    candidate: Option<usize>,
}

impl Frame {
    /// Depth 2, with symbol 0 already at position 0.
    fn root() -> Self {
        Self {
            depth: 2,
            period: 1,
            boundary: 1,
            run_start: 2,
            mirror_run: 1,
            reflected: false,
            placed: None,
            candidate: None,
        }
    }
}

/// Lazy enumeration of the bracelets of one content vector.
///
/// Owns all of its search state. Dropping it part way leaves nothing behind,
/// and cloning it gives an independent cursor over the same remaining
/// bracelets (for example to hand the tail of a search to another thread).
#[derive(Debug, Clone)]
pub struct Bracelets {
    state: SearchState,
    stack: Vec<Frame>,
    /// Entered on the first call to `next`.
    root: Option<Frame>,
    output: OutputAdapter,
    statistics: Statistics,
    exhausted: bool,
}

impl Bracelets {
    pub fn new(content: &Content) -> Self {
        debug!(
            symbols = content.symbols(),
            total = content.total(),
            "starting bracelet search"
        );
        Self {
            state: SearchState::seeded(content),
            stack: Vec::with_capacity(content.total()),
            root: Some(Frame::root()),
            output: OutputAdapter::new(),
            statistics: Statistics::new(),
            exhausted: false,
        }
    }

    /// Counters for the search so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Enter a new depth: settle chirality, then either test for completion or
    /// push the frame to enumerate extensions.
    fn enter(&mut self, mut frame: Frame) -> Option<Bracelet> {
        self.statistics.increment_counter(Counters::Nodes);

        let n = self.state.total();
        let last = self.state.last();
        let t = frame.depth;
        let r = frame.boundary;

        // Past the midpoint of the part after the palindromic boundary, the
        // newest symbol faces its mirror position.
        if 2 * (t - 1) > n + r {
            let placed = self.state.symbol_at(t - 2);
            let mirror = self.state.symbol_at(n + r + 1 - t);
            match placed.cmp(&mirror) {
                Ordering::Greater => frame.reflected = false,
                Ordering::Less => frame.reflected = true,
                Ordering::Equal => {}
            }
        }

        let unfilled = n + 1 - t;
        let tail = self.state.remaining(last);
        if tail == unfilled {
            // Only the largest symbol is left; the buffer already holds it.
            if tail > self.state.run_start(t - frame.period - 1) {
                frame.period = n;
            }
            if tail > 0 && r + 1 != t {
                let (symbol, length) = self.state.runs().runs()[frame.mirror_run];
                if symbol == last && length > tail {
                    frame.reflected = true;
                } else if symbol != last || length < tail {
                    frame.reflected = false;
                }
            }

            if !frame.reflected && frame.period == n {
                self.statistics.increment_counter(Counters::Emitted);
                let bracelet = self.output.emit(self.state.sequence());
                trace!(symbols = ?bracelet.symbols(), "bracelet");
                return Some(bracelet);
            }
            self.statistics.increment_counter(Counters::RejectedCompletions);
            return None;
        }

        // When only symbol 0 is left, no extension can be a necklace.
        if self.state.remaining(0) != unfilled {
            let floor = self.state.symbol_at(t - frame.period - 1);
            frame.candidate = self.state.first_available_from(floor);
            self.stack.push(frame);
        }
        None
    }

    /// Run the search until the next bracelet or exhaustion.
    fn advance(&mut self) -> Option<Bracelet> {
        loop {
            let top = self.stack.last_mut()?;
            let t = top.depth;

            if let Some(previous) = top.placed.take() {
                self.state.retract(t, previous);
                top.candidate = self.state.ring().successor(previous);
            }
            let Some(symbol) = top.candidate else {
                self.stack.pop();
                continue;
            };
            top.placed = Some(symbol);
            let frame = *top;

            let z = frame.run_start;
            self.state.set_run_start(z - 1, t - z);
            self.state.place(t, symbol);

            let run_start = if symbol != self.state.last() { t + 1 } else { z };
            let period = if symbol != self.state.symbol_at(t - frame.period - 1) {
                t
            } else {
                frame.period
            };

            let child = match self.state.runs().compare_reflection() {
                Reflection::PalindromeSoFar => Frame {
                    depth: t + 1,
                    period,
                    boundary: t,
                    run_start,
                    mirror_run: self.state.runs().len(),
                    reflected: false,
                    placed: None,
                    candidate: None,
                },
                Reflection::FavorsCanonical => Frame {
                    depth: t + 1,
                    period,
                    run_start,
                    placed: None,
                    candidate: None,
                    ..frame
                },
                Reflection::Reject => {
                    self.statistics.increment_counter(Counters::ReflectionPruned);
                    continue;
                }
            };

            if let Some(bracelet) = self.enter(child) {
                return Some(bracelet);
            }
        }
    }
}

impl Iterator for Bracelets {
    type Item = Bracelet;

    fn next(&mut self) -> Option<Bracelet> {
        if let Some(root) = self.root.take() {
            if let Some(bracelet) = self.enter(root) {
                return Some(bracelet);
            }
        }

        let next = self.advance();
        if next.is_none() && !self.exhausted {
            self.exhausted = true;
            debug!(
                emitted = self.statistics.get(Counters::Emitted),
                nodes = self.statistics.get(Counters::Nodes),
                pruned = self.statistics.get(Counters::ReflectionPruned),
                rejected = self.statistics.get(Counters::RejectedCompletions),
                "bracelet search exhausted"
            );
        }
        next
    }
}

impl FusedIterator for Bracelets {}

/// Entry point: bracelets of one fixed content.
///
/// Holds only the content, so [`Self::generate`] can be called any number of
/// times and each call starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraceletGenerator {
    content: Content,
}

impl BraceletGenerator {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// A fresh lazy enumeration, in increasing lexicographic order.
    pub fn generate(&self) -> Bracelets {
        Bracelets::new(&self.content)
    }

    /// Visit bracelets until `visit` returns `false`. Returns how many were visited.
    pub fn visit<F>(&self, mut visit: F) -> usize
    where
        F: FnMut(&Bracelet) -> bool,
    {
        let mut visited = 0;
        for bracelet in self.generate() {
            visited += 1;
            if !visit(&bracelet) {
                break;
            }
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracelets(content: &[usize]) -> Vec<Vec<usize>> {
        Content::try_from(content)
            .unwrap()
            .bracelets()
            .map(Bracelet::into_symbols)
            .collect()
    }

    #[test]
    fn test_content_1_2_3() {
        assert_eq!(
            bracelets(&[1, 2, 3]),
            vec![
                vec![0, 1, 1, 2, 2, 2],
                vec![0, 1, 2, 1, 2, 2],
                vec![0, 1, 2, 2, 1, 2],
                vec![0, 1, 2, 2, 2, 1],
                vec![0, 2, 1, 1, 2, 2],
                vec![0, 2, 1, 2, 1, 2],
            ]
        );
    }

    #[test]
    fn test_root_completion() {
        // Everything after the seed is the largest symbol.
        assert_eq!(bracelets(&[1, 4]), vec![vec![0, 1, 1, 1, 1]]);
        assert_eq!(bracelets(&[1, 1]), vec![vec![0, 1]]);
    }

    #[test]
    fn test_two_symbols() {
        assert_eq!(bracelets(&[4, 1]), vec![vec![0, 0, 0, 0, 1]]);
        assert_eq!(bracelets(&[2, 2]), vec![vec![0, 0, 1, 1]]);
        // 011011 is a power of 011 and is not emitted.
        assert_eq!(
            bracelets(&[2, 4]),
            vec![vec![0, 0, 1, 1, 1, 1], vec![0, 1, 0, 1, 1, 1]]
        );
    }

    #[test]
    fn test_reflection_pairs_collapse() {
        // 0123 and 0321 are mirror images; 0132 is its own class.
        assert_eq!(
            bracelets(&[1, 1, 1, 1]),
            vec![vec![0, 1, 2, 3], vec![0, 1, 3, 2], vec![0, 2, 1, 3]]
        );
    }

    #[test]
    fn test_generator_is_restartable() {
        let generator = BraceletGenerator::new(Content::new(vec![2, 2, 2]).unwrap());
        let first: Vec<_> = generator.generate().collect();
        let second: Vec<_> = generator.generate().collect();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_clone_continues_independently() {
        let mut search = Content::new(vec![2, 3, 3]).unwrap().bracelets();
        search.next();
        search.next();

        let forked = search.clone();
        let rest: Vec<_> = search.collect();
        let forked_rest: Vec<_> = forked.collect();
        assert_eq!(rest, forked_rest);
        assert!(!rest.is_empty());
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut search = Content::new(vec![1, 2]).unwrap().bracelets();
        assert!(search.next().is_some());
        assert!(search.next().is_none());
        assert!(search.next().is_none());
    }

    #[test]
    fn test_statistics() {
        let mut search = Content::new(vec![3, 4, 5]).unwrap().bracelets();
        let count = search.by_ref().count() as u64;
        let stats = search.statistics();
        assert_eq!(stats.get(Counters::Emitted), count);
        assert!(stats.get(Counters::Nodes) >= count);
    }

    #[test]
    fn test_visit_stops_early() {
        let generator = BraceletGenerator::new(Content::new(vec![3, 4, 5]).unwrap());
        let mut seen = Vec::new();
        let visited = generator.visit(|bracelet| {
            seen.push(bracelet.clone());
            seen.len() < 3
        });
        assert_eq!(visited, 3);
        assert_eq!(seen, generator.generate().take(3).collect::<Vec<_>>());
    }
}
