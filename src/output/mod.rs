// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Emitted bracelets.
//!
//! The search writes every candidate into one reused buffer. [`OutputAdapter`]
//! turns a completed buffer into an owned [`Bracelet`] carrying both the dense
//! symbol sequence and its run-length form.

use thiserror::Error;

use crate::runlength::{compress, expand, Run};

/// A dense sequence and a run-length form that disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("runs {runs:?} do not encode symbols {symbols:?}")]
pub struct InconsistentRuns {
    pub symbols: Vec<usize>,
    pub runs: Vec<Run>,
}

/// One canonical bracelet.
///
/// Ordering is lexicographic on the dense symbol sequence, which is the order
/// the generator emits them in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "UncheckedBracelet")
)]
pub struct Bracelet {
    symbols: Vec<usize>,
    runs: Vec<Run>,
}

/// Wire form of a [`Bracelet`] before the two encodings are checked against
/// each other.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedBracelet {
    symbols: Vec<usize>,
    runs: Vec<Run>,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedBracelet> for Bracelet {
    type Error = InconsistentRuns;

    fn try_from(unchecked: UncheckedBracelet) -> Result<Self, Self::Error> {
        Bracelet::from_parts(unchecked.symbols, unchecked.runs)
    }
}

impl Bracelet {
    /// Build from a dense sequence, deriving the run-length form.
    pub fn from_symbols(symbols: Vec<usize>) -> Self {
        let runs = compress(&symbols);
        Self { symbols, runs }
    }

    /// Build from a run-length form, reconstructing the dense sequence.
    pub fn from_runs(runs: Vec<Run>) -> Self {
        let symbols = expand(&runs);
        // Re-derive so adjacent runs of one symbol are merged.
        Self::from_symbols(symbols)
    }

    /// Build from both forms, which must agree exactly: `runs` has to be the
    /// maximal-run encoding of `symbols`.
    pub fn from_parts(symbols: Vec<usize>, runs: Vec<Run>) -> Result<Self, InconsistentRuns> {
        if compress(&symbols) != runs {
            return Err(InconsistentRuns { symbols, runs });
        }
        Ok(Self { symbols, runs })
    }

    pub fn symbols(&self) -> &[usize] {
        &self.symbols
    }

    /// `(symbol, count)` pairs, first to last.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Occurrences of each symbol, indexed by symbol.
    pub fn content(&self) -> Vec<usize> {
        let symbols = self.symbols.iter().max().map_or(0, |&s| s + 1);
        let mut counts = vec![0; symbols];
        for &symbol in &self.symbols {
            counts[symbol] += 1;
        }
        counts
    }

    pub fn into_symbols(self) -> Vec<usize> {
        self.symbols
    }
}

impl AsRef<[usize]> for Bracelet {
    fn as_ref(&self) -> &[usize] {
        &self.symbols
    }
}

/// Copies completed search buffers out as independent [`Bracelet`] values.
#[derive(Debug, Clone, Default)]
pub struct OutputAdapter {
    /// Last emitted sequence, kept to check ascending order.
    #[cfg(debug_assertions)]
    previous: Vec<usize>,
}

impl OutputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the buffer.
    ///
    /// The generator emits in strictly increasing order; debug builds assert it.
    pub fn emit(&mut self, buffer: &[usize]) -> Bracelet {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.previous.is_empty() || self.previous.as_slice() < buffer,
                "bracelets out of order: {:?} then {:?}",
                self.previous,
                buffer
            );
            self.previous.clear();
            self.previous.extend_from_slice(buffer);
        }

        Bracelet::from_symbols(buffer.to_vec())
    }
}
