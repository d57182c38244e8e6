// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property-based tests for bracelet generation.
//!
//! For random small contents:
//!
//! 1. **Completeness and uniqueness**: output equals exhaustive canonicalization
//! 2. **Order**: output is strictly increasing
//! 3. **Content**: every bracelet uses each symbol exactly as often as asked
//! 4. **Resumability**: a cloned cursor yields the same tail as the original

mod common;

use bracelet_search::symmetry::is_bracelet;
use bracelet_search::Bracelet;
use common::{brute_force_bracelets, content, generated};
use proptest::prelude::*;

/// Contents small enough to enumerate every arrangement.
fn arb_content() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=3, 2..=4).prop_filter("at most 9 symbols placed", |m| {
        m.iter().sum::<usize>() <= 9
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_matches_brute_force(multiplicities in arb_content()) {
        prop_assert_eq!(generated(&multiplicities), brute_force_bracelets(&multiplicities));
    }

    #[test]
    fn generation_is_strictly_increasing(multiplicities in arb_content()) {
        let bracelets = generated(&multiplicities);
        prop_assert!(bracelets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn every_bracelet_is_canonical_with_given_content(multiplicities in arb_content()) {
        for bracelet in content(&multiplicities).bracelets() {
            prop_assert_eq!(bracelet.content(), multiplicities.clone());
            prop_assert!(is_bracelet(bracelet.symbols()));
        }
    }

    #[test]
    fn cloned_cursor_yields_same_tail(multiplicities in arb_content(), skip in 0usize..20) {
        let mut bracelets = content(&multiplicities).bracelets();
        for _ in bracelets.by_ref().take(skip) {}
        let fork = bracelets.clone();
        let tail: Vec<Bracelet> = bracelets.collect();
        let forked: Vec<Bracelet> = fork.collect();
        prop_assert_eq!(tail, forked);
    }
}
