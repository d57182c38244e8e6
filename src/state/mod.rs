// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, restored on backtrack).
//!
//! Everything the search mutates lives here:
//! - remaining supply per symbol
//! - the availability ring over symbols with supply left
//! - the run-length encoding of the prefix
//! - the partial sequence buffer
//! - the run-start table read by the completion test
//!
//! [`SearchState::place`] and [`SearchState::retract`] are exact inverses and
//! are always paired in stack order by the engine. Nothing is copied per
//! search node.

pub mod statistics;

use crate::content::Content;
use crate::ring::AvailabilityRing;
use crate::runlength::RunLengthTracker;

#[derive(Debug, Clone)]
pub struct SearchState {
    /// Unused supply of each symbol.
    remaining: Vec<usize>,
    ring: AvailabilityRing,
    runs: RunLengthTracker,
    /// Partial sequence; unfilled positions hold `last`.
    sequence: Vec<usize>,
    /// Overwritten as the search extends, never rewound. Only entries written
    /// on the current path are read.
    run_starts: Vec<usize>,
    last: usize,
}

impl SearchState {
    /// State with symbol 0 placed at position 0.
    pub fn seeded(content: &Content) -> Self {
        let total = content.total();
        let last = content.last_symbol();
        let mut state = Self {
            remaining: content.multiplicities().to_vec(),
            ring: AvailabilityRing::new(content),
            runs: RunLengthTracker::with_capacity(total),
            sequence: vec![last; total],
            run_starts: vec![0; total],
            last,
        };
        state.place(1, 0);
        state
    }

    /// Put `symbol` at position `depth - 1`, consuming one unit of supply.
    pub fn place(&mut self, depth: usize, symbol: usize) {
        debug_assert!(
            self.remaining[symbol] > 0,
            "placing symbol {} with no supply left",
            symbol
        );
        self.runs.extend(symbol);
        self.remaining[symbol] -= 1;
        if self.remaining[symbol] == 0 {
            self.ring.remove(symbol);
        }
        self.sequence[depth - 1] = symbol;
    }

    /// Undo the matching [`Self::place`].
    pub fn retract(&mut self, depth: usize, symbol: usize) {
        debug_assert_eq!(self.sequence[depth - 1], symbol);
        if self.remaining[symbol] == 0 {
            self.ring.add(symbol);
        }
        self.remaining[symbol] += 1;
        self.runs.undo_extend();
        self.sequence[depth - 1] = self.last;
    }

    pub fn remaining(&self, symbol: usize) -> usize {
        self.remaining[symbol]
    }

    /// Smallest symbol `>= floor` with supply left.
    ///
    /// O(1) when `floor` itself is available; otherwise the ring is scanned
    /// from its head.
    pub fn first_available_from(&self, floor: usize) -> Option<usize> {
        if self.remaining[floor] > 0 {
            Some(floor)
        } else {
            self.ring.first_at_least(floor)
        }
    }

    pub fn ring(&self) -> &AvailabilityRing {
        &self.ring
    }

    pub fn runs(&self) -> &RunLengthTracker {
        &self.runs
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Symbol at a 0-based position.
    pub fn symbol_at(&self, position: usize) -> usize {
        self.sequence[position]
    }

    pub fn run_start(&self, index: usize) -> usize {
        self.run_starts[index]
    }

    pub fn set_run_start(&mut self, index: usize, value: usize) {
        self.run_starts[index] = value;
    }

    /// Length of every completed sequence.
    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    /// The largest symbol, which also fills unplaced positions.
    pub fn last(&self) -> usize {
        self.last
    }
}
