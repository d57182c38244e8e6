// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Availability ring: the symbols whose remaining supply is still positive.
//!
//! A circular doubly-linked list threaded through two index arrays, with one
//! extra sentinel node at index `k`. Symbols are linked in ascending order, so
//! the successor of the sentinel is always the smallest available symbol.
//!
//! Removal leaves the removed node's own links untouched, which is what makes
//! reinsertion O(1) (Knuth's dancing links). The price is strict LIFO
//! discipline: `add(j)` may only undo the most recent `remove(j)`, with every
//! removal made after it already undone.
//!
//! ```
//! use bracelet_search::ring::AvailabilityRing;
//!
//! let mut ring = AvailabilityRing::from_counts(&[2, 1, 3]);
//! assert_eq!(ring.head(), Some(0));
//!
//! ring.remove(0);
//! assert_eq!(ring.head(), Some(1));
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![1, 2]);
//!
//! ring.add(0);
//! assert_eq!(ring.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

use crate::content::Content;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRing {
    /// Successor links, indexed by symbol; the last slot is the sentinel.
    next: Vec<usize>,
    /// Predecessor links, indexed by symbol; the last slot is the sentinel.
    prev: Vec<usize>,
}

impl AvailabilityRing {
    /// Ring over every symbol of the content (all multiplicities are positive).
    pub fn new(content: &Content) -> Self {
        Self::from_counts(content.multiplicities())
    }

    /// Ring over the symbols whose count is non-zero.
    pub fn from_counts(counts: &[usize]) -> Self {
        let sentinel = counts.len();
        let mut next = vec![sentinel; sentinel + 1];
        let mut prev = vec![sentinel; sentinel + 1];

        let mut tail = sentinel;
        for symbol in (0..sentinel).filter(|&s| counts[s] > 0) {
            next[tail] = symbol;
            prev[symbol] = tail;
            tail = symbol;
        }
        next[tail] = sentinel;
        prev[sentinel] = tail;

        Self { next, prev }
    }

    fn sentinel(&self) -> usize {
        self.next.len() - 1
    }

    /// The smallest available symbol, or `None` once everything is used up.
    pub fn head(&self) -> Option<usize> {
        self.successor_of_node(self.sentinel())
    }

    /// The next available symbol above `symbol`.
    ///
    /// `symbol` must be linked, or be the symbol whose `add` was just made.
    pub fn successor(&self, symbol: usize) -> Option<usize> {
        self.successor_of_node(symbol)
    }

    fn successor_of_node(&self, node: usize) -> Option<usize> {
        let next = self.next[node];
        (next != self.sentinel()).then_some(next)
    }

    /// The smallest available symbol that is `>= floor`.
    pub fn first_at_least(&self, floor: usize) -> Option<usize> {
        let mut current = self.head();
        while let Some(symbol) = current {
            if symbol >= floor {
                return Some(symbol);
            }
            current = self.successor(symbol);
        }
        None
    }

    /// Unlink `symbol`. Its own links are preserved for [`Self::add`].
    pub fn remove(&mut self, symbol: usize) {
        let (p, n) = (self.prev[symbol], self.next[symbol]);
        debug_assert!(
            self.next[p] == symbol && self.prev[n] == symbol,
            "remove({}) of a symbol that is not linked",
            symbol
        );
        self.next[p] = n;
        self.prev[n] = p;
    }

    /// Relink `symbol` between the neighbours it had when removed.
    pub fn add(&mut self, symbol: usize) {
        let (p, n) = (self.prev[symbol], self.next[symbol]);
        debug_assert!(
            self.next[p] == n && self.prev[n] == p,
            "add({}) out of LIFO order with its matching remove",
            symbol
        );
        self.next[p] = symbol;
        self.prev[n] = symbol;
    }

    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// Available symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head(), move |&symbol| self.successor(symbol))
    }
}
