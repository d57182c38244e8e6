// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry checking for symbol sequences using dihedral groups.
//!
//! Brute-force counterparts of what the search decides incrementally: whether
//! a sequence is the smallest member of its class under rotation and
//! reflection, and whether it is primitive. These are O(n²) and intended for
//! validating individual sequences and for cross-checking the generator.
//!
//! ## Module Structure
//!
//! - `canonical`: Canonicality checking under dihedral symmetry
//! - `mod`: Public API and re-exports

pub mod canonical;

pub use canonical::{
    canonical_form, check_symmetry, dihedral_group, is_bracelet, is_primitive, SymmetryType,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dihedral_group_3_structure() {
        let d3 = dihedral_group(3);

        // First 3 elements are rotations
        assert_eq!(d3[0], [0, 1, 2]); // identity
        assert_eq!(d3[1], [1, 2, 0]); // rotate by 1
        assert_eq!(d3[2], [2, 0, 1]); // rotate by 2

        // Next 3 elements are reflections
        assert_eq!(d3[3], [2, 1, 0]); // reflect
        assert_eq!(d3[4], [0, 2, 1]); // reflect + rotate by 1
        assert_eq!(d3[5], [1, 0, 2]); // reflect + rotate by 2
    }

    #[test]
    fn test_dihedral_group_6_structure() {
        let d6 = dihedral_group(6);
        assert_eq!(d6.len(), 12);

        // First element is identity
        assert_eq!(d6[0], [0, 1, 2, 3, 4, 5]);

        // Second element is rotate by 1
        assert_eq!(d6[1], [1, 2, 3, 4, 5, 0]);

        // Seventh element is reflection (first reflection, no rotation)
        assert_eq!(d6[6], [5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_every_element_is_a_permutation() {
        for n in 1..8 {
            for perm in dihedral_group(n) {
                let mut sorted = perm.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, (0..n).collect::<Vec<_>>());
            }
        }
    }
}
