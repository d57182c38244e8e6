// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonicality of symbol sequences under the dihedral group D_n.

use std::cmp::Ordering;

/// Result of symmetry checking for a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryType {
    /// Sequence is lexicographically minimal (uniquely canonical).
    Canonical,
    /// Sequence is tied for minimum (it has a rotational or reflective symmetry).
    Equivocal,
    /// Sequence is not minimal (reject - not canonical).
    NonCanonical,
}

/// The 2n index permutations of D_n: n rotations, then n reflections.
///
/// Applying permutation `perm` to `s` gives `perm.iter().map(|&i| s[i])`.
pub fn dihedral_group(n: usize) -> Vec<Vec<usize>> {
    let rotations = (0..n).map(|shift| (0..n).map(|i| (i + shift) % n).collect());
    let reflections =
        (0..n).map(|shift| (0..n).map(|i| (2 * n - 1 - i + shift) % n).collect());
    rotations.chain(reflections).collect()
}

fn permuted(sequence: &[usize], permutation: &[usize]) -> Vec<usize> {
    permutation.iter().map(|&i| sequence[i]).collect()
}

/// Check whether a sequence is canonical under dihedral symmetry.
///
/// Algorithm:
/// 1. Apply all 2n permutations from the dihedral group
/// 2. Track the lexicographically minimal image and how many times it occurs
/// 3. Compare input with the minimum:
///    - If input != min → NonCanonical (reject)
///    - If input == min and it occurs more than once → Equivocal
///    - If input == min uniquely → Canonical
///
/// # Examples
///
/// ```
/// use bracelet_search::symmetry::{check_symmetry, SymmetryType};
///
/// assert_eq!(check_symmetry(&[0, 1, 1, 2, 2, 2]), SymmetryType::Canonical);
/// assert_eq!(check_symmetry(&[0, 2, 2, 2, 1, 1]), SymmetryType::NonCanonical);
/// assert_eq!(check_symmetry(&[0, 1, 2, 2, 2, 1]), SymmetryType::Equivocal);
/// ```
pub fn check_symmetry(sequence: &[usize]) -> SymmetryType {
    let mut min_image: Option<Vec<usize>> = None;
    let mut min_count = 0;

    for permutation in dihedral_group(sequence.len()) {
        let image = permuted(sequence, &permutation);
        let ordering = match &min_image {
            None => Ordering::Less,
            Some(min) => image.cmp(min),
        };
        match ordering {
            Ordering::Less => {
                min_image = Some(image);
                min_count = 1;
            }
            Ordering::Equal => min_count += 1,
            Ordering::Greater => {}
        }
    }

    match min_image {
        Some(min) if min.as_slice() != sequence => SymmetryType::NonCanonical,
        _ if min_count > 1 => SymmetryType::Equivocal,
        _ => SymmetryType::Canonical,
    }
}

/// The smallest image of `sequence` under rotation and reflection.
pub fn canonical_form(sequence: &[usize]) -> Vec<usize> {
    dihedral_group(sequence.len())
        .iter()
        .map(|permutation| permuted(sequence, permutation))
        .min()
        .unwrap_or_default()
}

/// True if no proper rotation maps the sequence to itself.
pub fn is_primitive(sequence: &[usize]) -> bool {
    let n = sequence.len();
    (1..n)
        .filter(|d| n % d == 0)
        .all(|d| (0..n).any(|i| sequence[i] != sequence[(i + d) % n]))
}

/// True for the sequences the generator emits: primitive and minimal in
/// their dihedral class.
pub fn is_bracelet(sequence: &[usize]) -> bool {
    is_primitive(sequence) && check_symmetry(sequence) != SymmetryType::NonCanonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_sequence() {
        assert_eq!(check_symmetry(&[0, 1, 2, 1, 2, 2]), SymmetryType::Canonical);
    }

    #[test]
    fn test_noncanonical_reflection() {
        // Reflection of 0 1 2 1 2 2 rotated to start at 0.
        assert_eq!(
            check_symmetry(&[0, 2, 2, 1, 2, 1]),
            SymmetryType::NonCanonical
        );
        assert_eq!(canonical_form(&[0, 2, 2, 1, 2, 1]), vec![0, 1, 2, 1, 2, 2]);
    }

    #[test]
    fn test_noncanonical_rotation() {
        assert_eq!(check_symmetry(&[1, 2, 0]), SymmetryType::NonCanonical);
        assert_eq!(canonical_form(&[2, 0, 1]), vec![0, 1, 2]);
    }

    #[test]
    fn test_uniform_sequence_is_equivocal() {
        assert_eq!(check_symmetry(&[3, 3, 3, 3]), SymmetryType::Equivocal);
        assert!(!is_primitive(&[3, 3, 3, 3]));
    }

    #[test]
    fn test_primitive() {
        assert!(is_primitive(&[0, 0, 1, 1]));
        assert!(!is_primitive(&[0, 1, 0, 1]));
        assert!(!is_primitive(&[0, 1, 1, 0, 1, 1]));
        assert!(is_primitive(&[0]));
        assert!(is_primitive(&[]));
    }

    #[test]
    fn test_is_bracelet() {
        assert!(is_bracelet(&[0, 1, 2, 2, 2, 1]));
        assert!(!is_bracelet(&[0, 1, 0, 1]));
        assert!(!is_bracelet(&[0, 2, 1, 1]));
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(canonical_form(&[]), Vec::<usize>::new());
        assert_eq!(check_symmetry(&[]), SymmetryType::Canonical);
    }
}
