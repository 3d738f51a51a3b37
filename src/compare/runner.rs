//! Runs several strategies on one instance.

use super::types::{ComparisonReport, Strategy, StrategyOutcome, StrategyReport};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::exact::ExactRunner;
use crate::ga::solve_genetic;
use crate::local::{HillClimbRunner, TwoOptRunner};
use crate::tour::Solution;
use log::{debug, info};
use std::time::Instant;

/// A named list of strategies to run against the same matrix.
///
/// # Usage
///
/// ```
/// use u_tsp::compare::{Comparison, Strategy};
/// use u_tsp::distance::{Coordinate, DistanceMatrix, Metric};
/// use u_tsp::exact::ExactConfig;
/// use u_tsp::local::TwoOptConfig;
///
/// let coords = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)].map(Coordinate::from);
/// let matrix = DistanceMatrix::build(&coords, &Metric::Planar).unwrap();
///
/// let report = Comparison::new()
///     .with("a*", Strategy::Exact(ExactConfig::a_star()))
///     .with("2-opt", Strategy::TwoOpt(TwoOptConfig::default()))
///     .run(&matrix)
///     .unwrap();
///
/// assert_eq!(report.len(), 2);
/// assert!((report.best().unwrap().outcome.cost().unwrap() - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    strategies: Vec<(String, Strategy)>,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `strategy` under `name`.
    pub fn with(mut self, name: impl Into<String>, strategy: Strategy) -> Self {
        self.strategies.push((name.into(), strategy));
        self
    }

    pub fn strategies(&self) -> &[(String, Strategy)] {
        &self.strategies
    }

    /// Validates the matrix, names, and every strategy before anything runs.
    pub fn validate_for(&self, matrix: &DistanceMatrix) -> Result<()> {
        if matrix.is_empty() {
            return Err(TspError::invalid_input("city set is empty"));
        }
        if self.strategies.is_empty() {
            return Err(TspError::configuration("no strategies registered"));
        }
        for (i, (name, strategy)) in self.strategies.iter().enumerate() {
            if self.strategies[..i].iter().any(|(other, _)| other == name) {
                return Err(TspError::configuration(format!(
                    "strategy name {name:?} registered twice"
                )));
            }
            strategy.validate_for(matrix)?;
        }
        Ok(())
    }

    /// Runs every strategy in registration order.
    ///
    /// # Errors
    ///
    /// Any invalid input or configuration is reported before the first
    /// strategy starts. A strategy that ends without a tour is recorded as
    /// [`StrategyOutcome::NoSolution`] rather than failing the run.
    pub fn run(&self, matrix: &DistanceMatrix) -> Result<ComparisonReport> {
        self.validate_for(matrix)?;
        info!(
            "comparison: {} strategies on {} cities",
            self.strategies.len(),
            matrix.len()
        );

        let reports = self
            .strategies
            .iter()
            .map(|(name, strategy)| run_one(name, strategy, matrix))
            .collect::<Result<Vec<_>>>()?;
        Ok(ComparisonReport { reports })
    }

    /// Runs every strategy on its own rayon task, sharing the read-only
    /// matrix. Reports keep registration order.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self, matrix: &DistanceMatrix) -> Result<ComparisonReport> {
        use rayon::prelude::*;

        self.validate_for(matrix)?;
        info!(
            "comparison: {} strategies on {} cities (parallel)",
            self.strategies.len(),
            matrix.len()
        );

        let reports = self
            .strategies
            .par_iter()
            .map(|(name, strategy)| run_one(name, strategy, matrix))
            .collect::<Result<Vec<_>>>()?;
        Ok(ComparisonReport { reports })
    }
}

fn run_one(name: &str, strategy: &Strategy, matrix: &DistanceMatrix) -> Result<StrategyReport> {
    let started = Instant::now();
    let mut peak_memory_bytes = None;

    let solved = match strategy {
        Strategy::Exact(config) => ExactRunner::run(matrix, config).map(|r| {
            peak_memory_bytes = Some(r.estimated_peak_bytes());
            r.tour
        }),
        Strategy::TwoOpt(config) => TwoOptRunner::run(matrix, config).map(|r| r.tour),
        Strategy::HillClimbing(config) => HillClimbRunner::run(matrix, config).map(|r| r.tour),
        Strategy::Genetic(config) => solve_genetic(matrix, config).map(|r| r.tour),
    };
    let elapsed = started.elapsed();

    let outcome = match solved {
        Ok(tour) => StrategyOutcome::Solved(Solution::evaluate(tour, matrix)),
        Err(err) if err.is_no_solution() => StrategyOutcome::NoSolution,
        Err(err) => return Err(err),
    };
    debug!(
        "{name} ({}): {:?} in {elapsed:?}",
        strategy.kind(),
        outcome.cost()
    );

    Ok(StrategyReport {
        name: name.to_string(),
        outcome,
        elapsed,
        peak_memory_bytes,
    })
}
