// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use bracelet_search::symmetry::{canonical_form, is_primitive};
use bracelet_search::{Bracelet, Content};

/// Every arrangement of a multiset, each exactly once.
pub fn multiset_permutations(multiplicities: &[usize]) -> Vec<Vec<usize>> {
    fn extend(remaining: &mut [usize], prefix: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if remaining.iter().all(|&r| r == 0) {
            out.push(prefix.clone());
            return;
        }
        for symbol in 0..remaining.len() {
            if remaining[symbol] > 0 {
                remaining[symbol] -= 1;
                prefix.push(symbol);
                extend(remaining, prefix, out);
                prefix.pop();
                remaining[symbol] += 1;
            }
        }
    }

    let mut out = Vec::new();
    extend(&mut multiplicities.to_vec(), &mut Vec::new(), &mut out);
    out
}

/// Primitive bracelets of a content by exhaustive canonicalization, sorted.
pub fn brute_force_bracelets(multiplicities: &[usize]) -> Vec<Vec<usize>> {
    multiset_permutations(multiplicities)
        .into_iter()
        .filter(|s| is_primitive(s))
        .map(|s| canonical_form(&s))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn content(multiplicities: &[usize]) -> Content {
    Content::try_from(multiplicities).unwrap()
}

/// Dense sequences from the generator, in emission order.
pub fn generated(multiplicities: &[usize]) -> Vec<Vec<usize>> {
    content(multiplicities)
        .bracelets()
        .map(Bracelet::into_symbols)
        .collect()
}
