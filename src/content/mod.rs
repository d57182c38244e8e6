// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed content: the multiplicity of each symbol in a bracelet.
//!
//! Symbols are the dense range `0..k`. Every symbol must occur at least once
//! and there must be at least two of them.
//!
//! # Examples
//!
//! ```
//! use bracelet_search::Content;
//!
//! let content: Content = "1, 2, 3".parse().unwrap();
//! assert_eq!(content.symbols(), 3);
//! assert_eq!(content.total(), 6);
//! assert_eq!(content.last_symbol(), 2);
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Validation failures for a content vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Fewer than [`Content::MIN_SYMBOLS`] symbols.
    #[error("content needs at least 2 symbols, got {symbols}")]
    TooFewSymbols { symbols: usize },

    /// A symbol was given multiplicity zero.
    #[error("symbol {symbol} has multiplicity 0, every multiplicity must be at least 1")]
    ZeroMultiplicity { symbol: usize },

    /// A token in textual input was not a non-negative integer.
    #[error("'{token}' is not a non-negative integer multiplicity")]
    NotAnInteger { token: String },

    /// The multiplicities sum past `usize::MAX`.
    #[error("total length of the content overflows")]
    Overflow,
}

/// A validated, immutable content vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Content {
    multiplicities: Vec<usize>,
    total: usize,
}

impl Content {
    /// Smallest alphabet the generator accepts.
    pub const MIN_SYMBOLS: usize = 2;

    /// Validate a multiplicity vector.
    pub fn new(multiplicities: Vec<usize>) -> Result<Self, ContentError> {
        if multiplicities.len() < Self::MIN_SYMBOLS {
            return Err(ContentError::TooFewSymbols {
                symbols: multiplicities.len(),
            });
        }
        if let Some(symbol) = multiplicities.iter().position(|&m| m == 0) {
            return Err(ContentError::ZeroMultiplicity { symbol });
        }
        let total = multiplicities
            .iter()
            .try_fold(0usize, |acc, &m| acc.checked_add(m))
            .ok_or(ContentError::Overflow)?;

        Ok(Self {
            multiplicities,
            total,
        })
    }

    /// Number of distinct symbols (`k`).
    pub fn symbols(&self) -> usize {
        self.multiplicities.len()
    }

    /// Length of every bracelet with this content (`n_tot`).
    pub fn total(&self) -> usize {
        self.total
    }

    /// The largest symbol index, `k - 1`.
    pub fn last_symbol(&self) -> usize {
        self.multiplicities.len() - 1
    }

    /// Multiplicity of one symbol.
    ///
    /// # Panics
    ///
    /// Panics if `symbol >= self.symbols()`.
    pub fn multiplicity(&self, symbol: usize) -> usize {
        self.multiplicities[symbol]
    }

    pub fn multiplicities(&self) -> &[usize] {
        &self.multiplicities
    }

    /// Start a fresh enumeration of the bracelets with this content.
    pub fn bracelets(&self) -> crate::engine::Bracelets {
        crate::engine::Bracelets::new(self)
    }
}

impl TryFrom<Vec<usize>> for Content {
    type Error = ContentError;

    fn try_from(multiplicities: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(multiplicities)
    }
}

impl TryFrom<&[usize]> for Content {
    type Error = ContentError;

    fn try_from(multiplicities: &[usize]) -> Result<Self, Self::Error> {
        Self::new(multiplicities.to_vec())
    }
}

impl From<Content> for Vec<usize> {
    fn from(content: Content) -> Self {
        content.multiplicities
    }
}

impl FromStr for Content {
    type Err = ContentError;

    /// Parse integers separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let multiplicities = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<usize>().map_err(|_| ContentError::NotAnInteger {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(multiplicities)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, m) in self.multiplicities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m)?;
        }
        write!(f, "]")
    }
}
