//! 2-opt edge-exchange improvement.
//!
//! # Algorithm
//!
//! For every pair of non-adjacent edges `(o[i-1], o[i])` and
//! `(o[j-1], o[j mod n])` of the cycle, compute
//!
//! ```text
//! delta = d(o[i-1], o[j-1]) + d(o[i], o[j]) - d(o[i-1], o[i]) - d(o[j-1], o[j])
//! ```
//!
//! and reverse `o[i..j]` when `delta < 0`. Full passes repeat until one
//! finds no improving move. Position 0 never moves, so the tour keeps its
//! start city.
//!
//! # Complexity
//!
//! O(n²) per pass; the number of passes is bounded because every accepted
//! move strictly lowers the cost.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::config::TwoOptConfig;
use super::construct::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::tour::{cycle_cost, Tour};
use log::{debug, info};

/// Minimum gain for a move to count as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Counters from one [`two_opt`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwoOptStats {
    /// Full passes over all edge pairs, including the final quiet one.
    pub passes: usize,
    /// Accepted segment reversals.
    pub moves: usize,
    /// Cycle cost after each accepted move; strictly decreasing.
    pub cost_history: Vec<f64>,
}

/// Improves an open visiting order in place until it is 2-opt optimal.
///
/// The order is treated as a cycle (closing edge included) and `order[0]`
/// stays fixed.
pub fn two_opt(order: &mut [usize], matrix: &DistanceMatrix) -> TwoOptStats {
    let n = order.len();
    let mut stats = TwoOptStats::default();
    // every cycle on three or fewer cities has the same cost
    if n < 4 {
        stats.passes = 1;
        return stats;
    }

    let mut improved = true;
    while improved {
        improved = false;
        stats.passes += 1;

        for i in 1..n - 1 {
            for j in (i + 2)..=n {
                // both edges touch order[0]; reversing just flips direction
                if i == 1 && j == n {
                    continue;
                }
                let a = order[i - 1];
                let b = order[i];
                let c = order[j - 1];
                let d = order[j % n];
                let delta =
                    matrix.get(a, c) + matrix.get(b, d) - matrix.get(a, b) - matrix.get(c, d);
                if delta < -IMPROVEMENT_EPS {
                    order[i..j].reverse();
                    stats.moves += 1;
                    stats.cost_history.push(cycle_cost(order, matrix));
                    improved = true;
                }
            }
        }
    }

    stats
}

/// Result of nearest-neighbor construction followed by 2-opt.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// Improved closed tour.
    pub tour: Tour,
    /// Cost of `tour`.
    pub cost: f64,
    /// Cost of the nearest-neighbor tour before improvement.
    pub initial_cost: f64,
    /// 2-opt counters.
    pub stats: TwoOptStats,
}

/// Runs nearest-neighbor construction followed by 2-opt.
///
/// # Usage
///
/// ```
/// use u_tsp::distance::{Coordinate, DistanceMatrix, Metric};
/// use u_tsp::local::{TwoOptConfig, TwoOptRunner};
///
/// let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(Coordinate::from);
/// let matrix = DistanceMatrix::build(&coords, &Metric::Planar).unwrap();
///
/// let result = TwoOptRunner::run(&matrix, &TwoOptConfig::default()).unwrap();
/// assert!(result.cost <= result.initial_cost);
/// ```
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Builds a nearest-neighbor tour from `config.start` and improves it.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidInput`](crate::TspError::InvalidInput) if the
    /// instance is empty or the start city is unknown.
    pub fn run(matrix: &DistanceMatrix, config: &TwoOptConfig) -> Result<TwoOptResult> {
        config.validate_for(matrix)?;
        info!(
            "nearest neighbor + 2-opt: {} cities, start {}",
            matrix.len(),
            config.start
        );

        let mut order = nearest_neighbor(matrix, config.start)?;
        let initial_cost = cycle_cost(&order, matrix);
        debug!("nearest neighbor tour cost {initial_cost:.6}");

        let stats = two_opt(&mut order, matrix);
        let tour = Tour::from_order(order);
        let cost = tour.cost(matrix);
        info!(
            "2-opt: cost {cost:.6} (from {initial_cost:.6}), {} moves over {} passes",
            stats.moves, stats.passes
        );

        Ok(TwoOptResult {
            tour,
            cost,
            initial_cost,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Coordinate, Metric};
    use crate::random::create_rng;
    use crate::tour::is_permutation;
    use rand::seq::SliceRandom;
    use rand::Rng;

    fn matrix_of(points: &[(f64, f64)]) -> DistanceMatrix {
        let coords: Vec<Coordinate> = points.iter().copied().map(Coordinate::from).collect();
        DistanceMatrix::build(&coords, &Metric::Planar).unwrap()
    }

    fn random_matrix(n: usize, seed: u64) -> DistanceMatrix {
        let mut rng = create_rng(seed);
        let points: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        matrix_of(&points)
    }

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for (k, &head) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(k);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_uncrosses_square() {
        let m = matrix_of(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let mut order = vec![0, 2, 1, 3];
        let stats = two_opt(&mut order, &m);
        assert!((cycle_cost(&order, &m) - 4.0).abs() < 1e-12);
        assert_eq!(order[0], 0);
        assert!(stats.moves >= 1);
    }

    #[test]
    fn test_five_city_scenario_reaches_optimum() {
        // A, B, C, D on the unit square, E at the center
        let points = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.5, 0.5)];
        let m = matrix_of(&points);

        let optimum = permutations(&[1, 2, 3, 4])
            .into_iter()
            .map(|mut rest| {
                rest.insert(0, 0);
                cycle_cost(&rest, &m)
            })
            .fold(f64::INFINITY, f64::min);

        let result = TwoOptRunner::run(&m, &TwoOptConfig::default()).unwrap();
        assert!(result.tour.is_valid(5));
        assert_eq!(result.tour.start(), Some(0));
        assert!(
            (result.cost - optimum).abs() < 1e-6,
            "got {}, optimum {optimum}",
            result.cost
        );
    }

    #[test]
    fn test_cost_history_strictly_decreasing() {
        let m = random_matrix(40, 11);
        let mut rng = create_rng(5);
        let mut order: Vec<usize> = (0..40).collect();
        order[1..].shuffle(&mut rng);
        let before = cycle_cost(&order, &m);

        let stats = two_opt(&mut order, &m);

        assert!(stats.moves > 0);
        assert_eq!(stats.cost_history.len(), stats.moves);
        let mut previous = before;
        for &cost in &stats.cost_history {
            assert!(cost < previous, "{cost} is not below {previous}");
            previous = cost;
        }
        assert!(is_permutation(&order, 40));
        assert_eq!(order[0], 0);
    }

    #[test]
    fn test_result_is_local_optimum() {
        let m = random_matrix(25, 17);
        let mut order: Vec<usize> = (0..25).collect();
        two_opt(&mut order, &m);
        let again = two_opt(&mut order, &m);
        assert_eq!(again.moves, 0);
        assert_eq!(again.passes, 1);
    }

    #[test]
    fn test_never_worse_than_nearest_neighbor() {
        for seed in 0..10 {
            let m = random_matrix(30, seed);
            let r = TwoOptRunner::run(&m, &TwoOptConfig::default().with_start(3)).unwrap();
            assert!(r.cost <= r.initial_cost + 1e-9);
            assert!(r.tour.is_valid(30));
            assert_eq!(r.tour.start(), Some(3));
            assert!((r.tour.cost(&m) - r.cost).abs() < 1e-12);
        }
    }

    #[test]
    fn test_tiny_instances() {
        let m = matrix_of(&[(0.0, 0.0)]);
        let r = TwoOptRunner::run(&m, &TwoOptConfig::default()).unwrap();
        assert_eq!(r.tour.as_slice(), &[0, 0]);
        assert_eq!(r.cost, 0.0);

        let m = matrix_of(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let r = TwoOptRunner::run(&m, &TwoOptConfig::default()).unwrap();
        assert!(r.tour.is_valid(3));
        assert_eq!(r.stats.moves, 0);
    }
}
