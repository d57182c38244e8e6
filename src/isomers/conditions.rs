// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layer-thickness and interface conditions for selecting isomers.
//!
//! Conditions read the bracelet as written, first layer to last. Because a
//! canonical bracelet never ends with the symbol it starts with, runs never
//! wrap around; interfaces are matched on the linear sequence only.

use super::IsomerError;
use crate::output::Bracelet;

/// Condition on the run lengths of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Thickness {
    /// At least one run of the symbol has exactly this length.
    Exactly(usize),
    /// Every run of the symbol lies in `min..=max`; `None` is unbounded.
    Range { min: usize, max: Option<usize> },
}

impl Thickness {
    pub fn at_least(min: usize) -> Self {
        Thickness::Range { min, max: None }
    }

    pub fn at_most(max: usize) -> Self {
        Thickness::Range { min: 0, max: Some(max) }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Thickness::Range { min, max: Some(max) }
    }

    /// Test the run lengths of one symbol.
    pub fn accepts<I>(&self, lengths: I) -> bool
    where
        I: IntoIterator<Item = usize>,
    {
        let mut lengths = lengths.into_iter();
        match *self {
            Thickness::Exactly(v) => lengths.any(|l| l == v),
            Thickness::Range { min, max } => lengths.all(|l| in_range(l, min, max)),
        }
    }
}

/// Condition on how often an interface occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterfaceCount {
    /// `true`: at least once. `false`: never.
    Present(bool),
    Exactly(usize),
    /// `min..=max` occurrences; `None` is unbounded.
    Range { min: usize, max: Option<usize> },
}

impl InterfaceCount {
    pub fn accepts(&self, occurrences: usize) -> bool {
        match *self {
            InterfaceCount::Present(present) => (occurrences > 0) == present,
            InterfaceCount::Exactly(v) => occurrences == v,
            InterfaceCount::Range { min, max } => in_range(occurrences, min, max),
        }
    }
}

fn in_range(value: usize, min: usize, max: Option<usize>) -> bool {
    value >= min && max.map_or(true, |max| value <= max)
}

/// Non-overlapping occurrences of `pattern` in `sequence`, scanning left to
/// right. An empty pattern never matches.
pub fn count_occurrences(sequence: &[usize], pattern: &[usize]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + pattern.len() <= sequence.len() {
        if sequence[i..].starts_with(pattern) {
            count += 1;
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Occurrences of an interface read in either direction.
///
/// A palindromic pattern is counted once; otherwise the reversed pattern's
/// occurrences are added.
pub fn interface_occurrences(sequence: &[usize], pattern: &[usize]) -> usize {
    let forward = count_occurrences(sequence, pattern);
    let reversed: Vec<usize> = pattern.iter().rev().copied().collect();
    if reversed == pattern {
        forward
    } else {
        forward + count_occurrences(sequence, &reversed)
    }
}

/// Conjunction of thickness and interface conditions.
///
/// ```
/// use bracelet_search::isomers::{IsomerFilter, InterfaceCount, Thickness};
///
/// let filter = IsomerFilter::new()
///     .thickness(2, Thickness::Exactly(4))
///     .interface(vec![0, 1], InterfaceCount::Present(false));
/// assert_eq!(filter.thickness_conditions().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IsomerFilter {
    thickness: Vec<(usize, Thickness)>,
    interfaces: Vec<(Vec<usize>, InterfaceCount)>,
}

impl IsomerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thickness(mut self, symbol: usize, thickness: Thickness) -> Self {
        self.thickness.push((symbol, thickness));
        self
    }

    pub fn interface(mut self, pattern: Vec<usize>, count: InterfaceCount) -> Self {
        self.interfaces.push((pattern, count));
        self
    }

    pub fn thickness_conditions(&self) -> &[(usize, Thickness)] {
        &self.thickness
    }

    pub fn interface_conditions(&self) -> &[(Vec<usize>, InterfaceCount)] {
        &self.interfaces
    }

    pub fn is_empty(&self) -> bool {
        self.thickness.is_empty() && self.interfaces.is_empty()
    }

    /// Check every referenced symbol exists.
    pub(crate) fn validate(&self, symbols: usize) -> Result<(), IsomerError> {
        let referenced = self
            .thickness
            .iter()
            .map(|(symbol, _)| symbol)
            .chain(self.interfaces.iter().flat_map(|(pattern, _)| pattern));
        for &symbol in referenced {
            if symbol >= symbols {
                return Err(IsomerError::UnknownSymbol { symbol, symbols });
            }
        }
        if self.interfaces.iter().any(|(pattern, _)| pattern.is_empty()) {
            return Err(IsomerError::EmptyInterface);
        }
        Ok(())
    }

    pub fn accepts(&self, bracelet: &Bracelet) -> bool {
        let thick = self.thickness.iter().all(|&(symbol, thickness)| {
            thickness.accepts(
                bracelet
                    .runs()
                    .iter()
                    .filter(|&&(s, _)| s == symbol)
                    .map(|&(_, length)| length),
            )
        });
        thick
            && self.interfaces.iter().all(|(pattern, count)| {
                count.accepts(interface_occurrences(bracelet.symbols(), pattern))
            })
    }
}
