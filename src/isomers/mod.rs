// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ferecrystal isomers: labelled, filterable views of the bracelets.
//!
//! A ferecrystal repeating unit is a cyclic stack of layers. Its isomers for a
//! given composition are exactly the bracelets of that content, written as
//! `(label)thickness` segments joined by `-`.
//!
//! ```
//! use bracelet_search::isomers::{Isomers, Labels};
//! use bracelet_search::Content;
//!
//! let labels = Labels::custom(["VSe2", "SnSe", "SnSe2"]);
//! let isomers = Isomers::with_labels(Content::new(vec![1, 2, 3]).unwrap(), labels).unwrap();
//! assert_eq!(isomers.formula(), "(VSe2)1(SnSe)2(SnSe2)3");
//! assert_eq!(isomers.isomers()[0], "(VSe2)1-(SnSe)2-(SnSe2)3");
//! ```

pub mod conditions;

pub use conditions::{
    count_occurrences, interface_occurrences, InterfaceCount, IsomerFilter, Thickness,
};

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::content::{Content, ContentError};
use crate::output::Bracelet;

/// Errors raised while setting up or filtering isomers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IsomerError {
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Letter labels only cover `A` to `Z`.
    #[error("{symbols} symbols cannot be labelled with the letters A-Z")]
    TooManySymbolsForLetters { symbols: usize },

    #[error("{labels} labels given for {symbols} symbols")]
    LabelCountMismatch { labels: usize, symbols: usize },

    #[error("label '{label}' is used for more than one symbol")]
    DuplicateLabel { label: String },

    #[error("symbol {symbol} has an empty label")]
    EmptyLabel { symbol: usize },

    #[error("no symbol is labelled '{label}'")]
    UnknownLabel { label: String },

    #[error("symbol {symbol} is out of range for {symbols} symbols")]
    UnknownSymbol { symbol: usize, symbols: usize },

    #[error("interface pattern is empty")]
    EmptyInterface,
}

/// How symbols are named in rendered isomers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Labels {
    /// `A`, `B`, `C`, ... (at most 26 symbols).
    #[default]
    Letters,
    /// One caller-supplied label per symbol, in symbol order.
    Custom(Vec<String>),
}

impl Labels {
    pub const MAX_LETTERS: usize = 26;

    pub fn custom<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Labels::Custom(labels.into_iter().map(Into::into).collect())
    }

    /// Validate against the number of symbols and produce one label per symbol.
    fn resolve(self, symbols: usize) -> Result<Vec<String>, IsomerError> {
        match self {
            Labels::Letters => {
                if symbols > Self::MAX_LETTERS {
                    return Err(IsomerError::TooManySymbolsForLetters { symbols });
                }
                Ok((0..symbols).map(|s| letter(s).to_string()).collect())
            }
            Labels::Custom(labels) => {
                if labels.len() != symbols {
                    return Err(IsomerError::LabelCountMismatch {
                        labels: labels.len(),
                        symbols,
                    });
                }
                if let Some(symbol) = labels.iter().position(|l| l.is_empty()) {
                    return Err(IsomerError::EmptyLabel { symbol });
                }
                let mut seen = HashSet::new();
                if let Some(label) = labels.iter().find(|l| !seen.insert(l.as_str())) {
                    return Err(IsomerError::DuplicateLabel {
                        label: label.clone(),
                    });
                }
                Ok(labels)
            }
        }
    }
}

fn letter(symbol: usize) -> char {
    debug_assert!(symbol < Labels::MAX_LETTERS);
    (b'A' + symbol as u8) as char
}

/// All isomers of one composition.
#[derive(Debug, Clone)]
pub struct Isomers {
    content: Content,
    labels: Vec<String>,
    lettered: bool,
    bracelets: Vec<Bracelet>,
}

impl Isomers {
    /// Isomers labelled with letters.
    pub fn new(content: Content) -> Result<Self, IsomerError> {
        Self::with_labels(content, Labels::Letters)
    }

    pub fn with_labels(content: Content, labels: Labels) -> Result<Self, IsomerError> {
        let lettered = labels == Labels::Letters;
        let labels = labels.resolve(content.symbols())?;
        let bracelets: Vec<Bracelet> = content.bracelets().collect();
        debug!(content = %content, isomers = bracelets.len(), "generated isomers");
        Ok(Self {
            content,
            labels,
            lettered,
            bracelets,
        })
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn bracelets(&self) -> &[Bracelet] {
        &self.bracelets
    }

    pub fn len(&self) -> usize {
        self.bracelets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bracelets.is_empty()
    }

    /// Composition of the repeating unit, e.g. `(A)3(B)4(C)5`.
    pub fn formula(&self) -> String {
        self.labels
            .iter()
            .zip(self.content.multiplicities())
            .map(|(label, count)| format!("({}){}", label, count))
            .collect()
    }

    /// One isomer as `(label)count` segments, e.g. `(A)1-(B)2-(C)3`.
    pub fn render(&self, bracelet: &Bracelet) -> String {
        bracelet
            .runs()
            .iter()
            .map(|&(symbol, count)| format!("({}){}", self.labels[symbol], count))
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Every isomer, rendered, in generation order.
    pub fn isomers(&self) -> Vec<String> {
        self.bracelets.iter().map(|b| self.render(b)).collect()
    }

    /// One letter per layer (`ABBCCC`); `None` with custom labels.
    pub fn letter_strings(&self) -> Option<Vec<String>> {
        self.lettered.then(|| {
            self.bracelets
                .iter()
                .map(|b| b.symbols().iter().map(|&s| letter(s)).collect())
                .collect()
        })
    }

    /// Symbol index of a label.
    pub fn symbol_of(&self, label: &str) -> Result<usize, IsomerError> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| IsomerError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Translate a sequence of layer labels into an interface pattern.
    pub fn interface_pattern(&self, labels: &[&str]) -> Result<Vec<usize>, IsomerError> {
        if labels.is_empty() {
            return Err(IsomerError::EmptyInterface);
        }
        labels.iter().map(|label| self.symbol_of(label)).collect()
    }

    /// Isomers satisfying every condition of `filter`, in generation order.
    pub fn subset(&self, filter: &IsomerFilter) -> Result<Vec<&Bracelet>, IsomerError> {
        filter.validate(self.content.symbols())?;
        let subset: Vec<&Bracelet> = self
            .bracelets
            .iter()
            .filter(|b| filter.accepts(b))
            .collect();
        debug!(
            before = self.bracelets.len(),
            after = subset.len(),
            "filtered isomers"
        );
        Ok(subset)
    }

    /// [`Self::subset`], rendered.
    pub fn subset_strings(&self, filter: &IsomerFilter) -> Result<Vec<String>, IsomerError> {
        Ok(self
            .subset(filter)?
            .into_iter()
            .map(|b| self.render(b))
            .collect())
    }
}
