//! Permutation operators: PMX crossover and swap mutation.
//!
//! Both operate on `&[usize]` permutations of `0..n`.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Partially Mapped Crossover (PMX) with random cut points.
///
/// Returns two children; each is a permutation of the same values as the
/// parents. See [`pmx_crossover_at`] for the construction.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n <= 1 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (start, end) = random_segment(n, rng);
    pmx_crossover_at(parent1, parent2, start, end)
}

/// PMX with explicit inclusive cut points `[start, end]`.
///
/// # Algorithm (Goldberg & Lingle, 1985)
///
/// 1. Copy `template[start..=end]` into the child verbatim
/// 2. For every other position take `donor[i]`; while that value already
///    sits in the copied segment at position `k`, replace it with
///    `donor[k]` (the template→donor mapping, followed transitively)
///
/// Child 1 uses `parent1` as template, child 2 uses `parent2`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths, `start > end`, or
/// `end >= n`.
pub fn pmx_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "invalid cut points [{start}, {end}] for length {n}");

    (
        pmx_build_child(parent1, parent2, start, end),
        pmx_build_child(parent2, parent1, start, end),
    )
}

/// Builds one PMX child: segment from `template`, the rest mapped from `donor`.
fn pmx_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    // position of each value inside the template segment, if it is there
    let mut segment_pos = vec![None; n];
    for (k, &v) in template.iter().enumerate().take(end + 1).skip(start) {
        segment_pos[v] = Some(k);
    }

    let mut child = donor.to_vec();
    child[start..=end].copy_from_slice(&template[start..=end]);

    for (i, slot) in child.iter_mut().enumerate() {
        if (start..=end).contains(&i) {
            continue;
        }
        let mut value = donor[i];
        while let Some(k) = segment_pos[value] {
            value = donor[k];
        }
        *slot = value;
    }

    child
}

/// Swap mutation: exchanges two distinct random positions.
///
/// No-op for fewer than two elements.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    perm.swap(i, j);
}

/// Picks a random inclusive segment `[start, end]` within `0..n`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
