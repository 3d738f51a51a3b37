//! Tour representation and cost evaluation.
//!
//! A [`Tour`] always materializes its closing edge: the start city appears
//! first and again last, so `N` cities give a sequence of length `N + 1`.
//! A single city is the tour `[s, s]` with cost zero.

use crate::distance::{City, DistanceMatrix};

/// A closed Hamiltonian cycle over city indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Closes an open visiting order by repeating its first city.
    pub fn from_order(mut order: Vec<usize>) -> Self {
        if let Some(&first) = order.first() {
            order.push(first);
        }
        Self { cities: order }
    }

    /// The closed sequence, `[s, ..., s]`.
    pub fn as_slice(&self) -> &[usize] {
        &self.cities
    }

    /// The visiting order without the closing repeat.
    pub fn order(&self) -> &[usize] {
        let n = self.cities.len().saturating_sub(1);
        &self.cities[..n]
    }

    /// Start (and end) city.
    pub fn start(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    /// Number of distinct cities visited.
    pub fn city_count(&self) -> usize {
        self.order().len()
    }

    /// Sum of consecutive-edge distances, closing edge included.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        self.cities
            .windows(2)
            .map(|w| matrix.get(w[0], w[1]))
            .sum()
    }

    /// Checks the closed-cycle convention over `n` cities: every index in
    /// `0..n` exactly once, followed by the start index again.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 || self.cities.len() != n + 1 || self.cities.first() != self.cities.last() {
            return false;
        }
        is_permutation(self.order(), n)
    }

    /// Same cycle, re-anchored so it starts at `start`.
    ///
    /// Returns `None` if `start` is not on the tour.
    pub fn rotated_to(&self, start: usize) -> Option<Tour> {
        let order = self.order();
        let pos = order.iter().position(|&c| c == start)?;
        let mut rotated = Vec::with_capacity(order.len());
        rotated.extend_from_slice(&order[pos..]);
        rotated.extend_from_slice(&order[..pos]);
        Some(Tour::from_order(rotated))
    }

    /// Resolves indices back to names from the original city table.
    pub fn names<'a>(&self, cities: &'a [City]) -> Vec<&'a str> {
        self.cities
            .iter()
            .filter_map(|&i| cities.get(i).map(|c| c.name.as_str()))
            .collect()
    }
}

/// A solver's answer: a closed tour and its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub tour: Tour,
    pub cost: f64,
}

impl Solution {
    /// Pairs `tour` with its cost recomputed from `matrix`.
    pub fn evaluate(tour: Tour, matrix: &DistanceMatrix) -> Self {
        let cost = tour.cost(matrix);
        Self { tour, cost }
    }
}

/// Cost of an open order treated as a cycle (closing edge included).
pub fn cycle_cost(order: &[usize], matrix: &DistanceMatrix) -> f64 {
    match order {
        [] | [_] => 0.0,
        [first, .., last] => {
            let inner: f64 = order.windows(2).map(|w| matrix.get(w[0], w[1])).sum();
            inner + matrix.get(*last, *first)
        }
    }
}

/// Returns `true` if `perm` holds each of `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
