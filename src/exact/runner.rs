//! Best-first search over `(current city, visited set)` states.
//!
//! # Algorithm
//!
//! 1. Push the start state with cost 0
//! 2. Pop the lowest key `g + h`; stop once it can no longer beat the
//!    incumbent, discard it if its state is already known at a lower cost
//! 3. A full state closes the cycle and may replace the incumbent
//! 4. Otherwise extend to each unvisited city, pruning children whose key
//!    cannot beat the incumbent or whose state is known at equal-or-lower
//!    cost
//!
//! Uniform-cost search is the same loop with `h = 0`.
//!
//! # Complexity
//!
//! At most `N · 2^N` distinct states; exponential in `N`.

use super::config::ExactConfig;
use super::heuristic::Heuristic;
use super::state::{unwind_path, FrontierEntry, PathNode, SearchState, VisitedSet};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::tour::Tour;
use log::{debug, info};
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

/// Result of an exact search.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// Best closed tour found.
    pub tour: Tour,

    /// Cost of `tour`.
    pub cost: f64,

    /// `true` if the frontier was exhausted, so `tour` is optimal
    /// (given an admissible heuristic). `false` if the expansion budget
    /// stopped the search first.
    pub complete: bool,

    /// States popped and expanded.
    pub expansions: usize,

    /// States pushed onto the frontier.
    pub generated: usize,

    /// Children discarded because `g + h` could not beat the incumbent.
    /// Always zero for uniform-cost search.
    pub pruned: usize,

    /// Children discarded because their state was already known at an
    /// equal or lower cost.
    pub duplicates: usize,

    /// Largest frontier size observed.
    pub peak_frontier: usize,

    /// Distinct `(city, visited)` states recorded.
    pub states_stored: usize,
}

impl ExactResult {
    /// Rough byte footprint of the search structures at their peak.
    pub fn estimated_peak_bytes(&self) -> usize {
        let frontier = self.peak_frontier * std::mem::size_of::<FrontierEntry>();
        let table =
            self.states_stored * (std::mem::size_of::<SearchState>() + std::mem::size_of::<f64>());
        let arena = (self.generated + 1) * std::mem::size_of::<PathNode>();
        frontier + table + arena
    }
}

/// Executes uniform-cost or heuristic-guided exact search.
///
/// # Usage
///
/// ```
/// use u_tsp::distance::{Coordinate, DistanceMatrix, Metric};
/// use u_tsp::exact::{ExactConfig, ExactRunner};
///
/// let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(Coordinate::from);
/// let matrix = DistanceMatrix::build(&coords, &Metric::Planar).unwrap();
///
/// let result = ExactRunner::run(&matrix, &ExactConfig::a_star()).unwrap();
/// assert!((result.cost - 4.0).abs() < 1e-9);
/// ```
pub struct ExactRunner;

impl ExactRunner {
    /// Runs the search described by `config`.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidInput`] if the instance is empty, too large for
    ///   the bitmask, or `config.start` is out of range
    /// - [`TspError::Configuration`] for an invalid budget
    /// - [`TspError::NoSolution`] if the budget ran out before any tour
    ///   was completed
    pub fn run(matrix: &DistanceMatrix, config: &ExactConfig) -> Result<ExactResult> {
        config.validate_for(matrix)?;

        let n = matrix.len();
        let start = config.start;
        let heuristic = config.heuristic;
        info!("exact search: {n} cities, start {start}, heuristic {heuristic:?}");

        if n == 1 {
            return Ok(ExactResult {
                tour: Tour::from_order(vec![start]),
                cost: 0.0,
                complete: true,
                expansions: 0,
                generated: 1,
                pruned: 0,
                duplicates: 0,
                peak_frontier: 1,
                states_stored: 1,
            });
        }

        let full = VisitedSet::full(n);
        let root = SearchState {
            current: start,
            visited: VisitedSet::single(start),
        };

        let mut arena = vec![PathNode {
            city: start,
            parent: None,
        }];
        let mut best_g: HashMap<SearchState, f64> = HashMap::new();
        best_g.insert(root, 0.0);

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            priority: heuristic.estimate(matrix, start, start, root.visited),
            cost: 0.0,
            state: root,
            node: 0,
        });

        let mut best_cost = f64::INFINITY;
        let mut best_node: Option<usize> = None;
        let mut complete = true;
        let mut expansions = 0usize;
        let mut generated = 1usize;
        let mut pruned = 0usize;
        let mut duplicates = 0usize;
        let bounded = heuristic != Heuristic::Zero;
        let mut peak_frontier = 1usize;

        while let Some(entry) = frontier.pop() {
            // keys are lower bounds, so nothing left can beat the incumbent
            if entry.priority >= best_cost {
                break;
            }
            if best_g.get(&entry.state).is_some_and(|&g| g < entry.cost) {
                continue;
            }

            if let Some(limit) = config.max_expansions {
                if expansions >= limit {
                    complete = false;
                    debug!("exact search: expansion budget {limit} reached");
                    break;
                }
            }
            expansions += 1;

            let SearchState { current, visited } = entry.state;

            if visited == full {
                let total = entry.cost + matrix.get(current, start);
                if total < best_cost {
                    debug!("exact search: incumbent {total:.6} after {expansions} expansions");
                    best_cost = total;
                    best_node = Some(entry.node);
                }
                continue;
            }

            for next in visited.missing(n) {
                let cost = entry.cost + matrix.get(current, next);
                let state = SearchState {
                    current: next,
                    visited: visited.with(next),
                };
                let priority = cost + heuristic.estimate(matrix, start, next, state.visited);
                if bounded && priority >= best_cost {
                    pruned += 1;
                    continue;
                }

                match best_g.entry(state) {
                    Entry::Occupied(mut known) => {
                        if *known.get() <= cost {
                            duplicates += 1;
                            continue;
                        }
                        known.insert(cost);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(cost);
                    }
                }

                arena.push(PathNode {
                    city: next,
                    parent: Some(entry.node),
                });
                frontier.push(FrontierEntry {
                    priority,
                    cost,
                    state,
                    node: arena.len() - 1,
                });
                generated += 1;
            }
            peak_frontier = peak_frontier.max(frontier.len());
        }

        let node = best_node.ok_or_else(|| {
            TspError::no_solution(format!(
                "search stopped after {expansions} expansions without completing a tour"
            ))
        })?;

        let tour = Tour::from_order(unwind_path(&arena, node));
        let cost = tour.cost(matrix);
        info!(
            "exact search: cost {cost:.6}, {expansions} expansions, {generated} generated, \
             complete={complete}"
        );

        Ok(ExactResult {
            tour,
            cost,
            complete,
            expansions,
            generated,
            pruned,
            duplicates,
            peak_frontier,
            states_stored: best_g.len(),
        })
    }
}

/// Uniform-cost search from `start`.
pub fn uniform_cost_search(matrix: &DistanceMatrix, start: usize) -> Result<ExactResult> {
    ExactRunner::run(matrix, &ExactConfig::uniform_cost().with_start(start))
}

/// Heuristic-guided search from `start` using `heuristic`.
pub fn heuristic_search(
    matrix: &DistanceMatrix,
    start: usize,
    heuristic: Heuristic,
) -> Result<ExactResult> {
    ExactRunner::run(
        matrix,
        &ExactConfig::a_star()
            .with_heuristic(heuristic)
            .with_start(start),
    )
}

// ============================================================================
// Tests
// ============================================================================
