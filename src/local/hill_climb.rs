//! Steepest-ascent hill climbing over pairwise swaps, with random restarts.
//!
//! # Algorithm
//!
//! 1. Shuffle all cities into a random permutation
//! 2. Evaluate every swap of two positions (`N·(N-1)/2` neighbors)
//! 3. Move to the best neighbor if it is strictly cheaper; otherwise stop
//! 4. Repeat from a fresh permutation `restarts` times, keeping the best
//!
//! Unlike [`two_opt`](super::two_opt), the neighborhood is position swaps
//! and the seed is random rather than constructive.

use super::config::HillClimbConfig;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::random::rng_from_seed;
use crate::tour::{cycle_cost, Tour};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult {
    /// Best closed tour across all restarts, anchored at `config.start`.
    pub tour: Tour,
    /// Cost of `tour`.
    pub cost: f64,
    /// Local-optimum cost reached by each restart, in order.
    pub restart_costs: Vec<f64>,
    /// Accepted moves summed over all restarts.
    pub steps: usize,
}

/// Executes hill climbing with random restarts.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Runs with a generator seeded from `config.seed`.
    pub fn run(matrix: &DistanceMatrix, config: &HillClimbConfig) -> Result<HillClimbResult> {
        config.validate_for(matrix)?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs with a caller-supplied generator; `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// - [`TspError::Configuration`](crate::TspError::Configuration) if
    ///   `restarts` is zero
    /// - [`TspError::InvalidInput`](crate::TspError::InvalidInput) if the
    ///   instance is empty or the start city is unknown
    pub fn run_with_rng<R: Rng>(
        matrix: &DistanceMatrix,
        config: &HillClimbConfig,
        rng: &mut R,
    ) -> Result<HillClimbResult> {
        config.validate_for(matrix)?;

        let n = matrix.len();
        info!("hill climbing: {n} cities, {} restarts", config.restarts);

        let mut best_order: Vec<usize> = (0..n).collect();
        let mut best_cost = f64::INFINITY;
        let mut restart_costs = Vec::with_capacity(config.restarts);
        let mut steps = 0usize;

        for restart in 0..config.restarts {
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(rng);

            let (cost, climbed) = climb(&mut order, matrix);
            steps += climbed;
            restart_costs.push(cost);
            debug!("restart {restart}: local optimum {cost:.6} after {climbed} moves");

            if cost < best_cost {
                best_cost = cost;
                best_order = order;
            }
        }

        let closed = Tour::from_order(best_order);
        let tour = closed.rotated_to(config.start).unwrap_or(closed);
        let cost = tour.cost(matrix);
        info!("hill climbing: best cost {cost:.6}");

        Ok(HillClimbResult {
            tour,
            cost,
            restart_costs,
            steps,
        })
    }
}

/// Climbs from `order` to a swap-local optimum.
///
/// Returns the final cost and the number of accepted moves.
fn climb(order: &mut [usize], matrix: &DistanceMatrix) -> (f64, usize) {
    let n = order.len();
    let mut current = cycle_cost(order, matrix);
    let mut moves = 0;

    loop {
        let mut best_swap = None;
        let mut best_cost = current;

        for i in 0..n {
            for j in (i + 1)..n {
                order.swap(i, j);
                let cost = cycle_cost(order, matrix);
                order.swap(i, j);
                if cost < best_cost {
                    best_cost = cost;
                    best_swap = Some((i, j));
                }
            }
        }

        let Some((i, j)) = best_swap else {
            return (current, moves);
        };
        order.swap(i, j);
        current = best_cost;
        moves += 1;
    }
}
