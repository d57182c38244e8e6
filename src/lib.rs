// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rust implementation of fixed-content bracelet generation.
//!
//! A bracelet is an equivalence class of cyclic sequences under rotation and
//! reflection. Given how many times each symbol occurs (the content), the
//! generator lists every primitive bracelet with that content exactly once,
//! as its lexicographically smallest representative, in increasing order.
//!
//! # Architecture
//!
//! The implementation uses the same two-tier memory model throughout:
//!
//! ## Tier 1: Immutable input
//!
//! - [`Content`]: validated symbol multiplicities
//!
//! ## Tier 2: DYNAMIC state (mutable, restored on backtrack)
//!
//! - [`AvailabilityRing`]: symbols with supply left, in ascending order
//! - [`RunLengthTracker`]: run-length encoding of the prefix
//! - [`state::SearchState`]: the sequence buffer and remaining supply
//!
//! # Search Algorithm
//!
//! [`Bracelets`] walks the search tree with an explicit stack, so it is a
//! plain [`Iterator`] that can be paused, dropped or cloned at any point.
//! Each completed buffer is copied out by the [`OutputAdapter`].
//!
//! The [`isomers`] module labels and filters the bracelets of a composition,
//! for example the stacking sequences of a ferecrystal repeating unit.
//!
//! # Example
//!
//! ```
//! use bracelet_search::Content;
//!
//! let content: Content = "2, 2, 1".parse().unwrap();
//! let bracelets: Vec<Vec<usize>> = content.bracelets().map(|b| b.into_symbols()).collect();
//! assert_eq!(
//!     bracelets,
//!     vec![
//!         vec![0, 0, 1, 1, 2],
//!         vec![0, 0, 1, 2, 1],
//!         vec![0, 1, 0, 1, 2],
//!         vec![0, 1, 1, 0, 2],
//!     ]
//! );
//! ```
//!
//! # References
//!
//! - Karim, S.; Sawada, J.; Alamgir, Z.; Husnine, S. M. (2013). "Generating
//!   bracelets with fixed content." Theoretical Computer Science 475, 103-112.

pub mod content;
pub mod engine;
pub mod isomers;
pub mod output;
pub mod ring;
pub mod runlength;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use content::{Content, ContentError};
pub use engine::{BraceletGenerator, Bracelets};
pub use output::{Bracelet, InconsistentRuns, OutputAdapter};
pub use ring::AvailabilityRing;
pub use runlength::{Reflection, RunLengthTracker};
pub use state::statistics::{Counters, Statistics};
