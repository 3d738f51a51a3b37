//! Strategies and report types for the comparison harness.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::exact::ExactConfig;
use crate::ga::GaConfig;
use crate::local::{HillClimbConfig, TwoOptConfig};
use crate::tour::Solution;
use std::time::Duration;

/// One solver together with its configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Uniform-cost or heuristic-guided exact search.
    Exact(ExactConfig),
    /// Nearest neighbor followed by 2-opt.
    TwoOpt(TwoOptConfig),
    /// Pairwise-swap hill climbing with random restarts.
    HillClimbing(HillClimbConfig),
    /// Genetic algorithm.
    Genetic(GaConfig),
}

impl Strategy {
    /// Short label for the solver family.
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::Exact(_) => "exact",
            Strategy::TwoOpt(_) => "two-opt",
            Strategy::HillClimbing(_) => "hill-climbing",
            Strategy::Genetic(_) => "genetic",
        }
    }

    /// Checks the configuration against `matrix` without running anything.
    pub fn validate_for(&self, matrix: &DistanceMatrix) -> Result<()> {
        match self {
            Strategy::Exact(config) => config.validate_for(matrix),
            Strategy::TwoOpt(config) => config.validate_for(matrix),
            Strategy::HillClimbing(config) => config.validate_for(matrix),
            Strategy::Genetic(config) => config.validate_for(matrix),
        }
    }
}

/// What a strategy produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyOutcome {
    Solved(Solution),
    /// The search ended without completing any tour.
    NoSolution,
}

impl StrategyOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            StrategyOutcome::Solved(solution) => Some(solution),
            StrategyOutcome::NoSolution => None,
        }
    }

    pub fn cost(&self) -> Option<f64> {
        self.solution().map(|s| s.cost)
    }
}

/// Result of one named strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyReport {
    pub name: String,
    pub outcome: StrategyOutcome,
    /// Wall-clock time of the solve alone.
    pub elapsed: Duration,
    /// Estimated search-structure footprint; exact search only.
    pub peak_memory_bytes: Option<usize>,
}

/// Per-strategy results in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonReport {
    pub(crate) reports: Vec<StrategyReport>,
}

impl ComparisonReport {
    /// Report for the strategy registered as `name`.
    pub fn get(&self, name: &str) -> Option<&StrategyReport> {
        self.reports.iter().find(|r| r.name == name)
    }

    /// Cheapest solved strategy; the earliest registered wins ties.
    pub fn best(&self) -> Option<&StrategyReport> {
        let mut best: Option<(&StrategyReport, f64)> = None;
        for report in &self.reports {
            let Some(cost) = report.outcome.cost() else {
                continue;
            };
            match best {
                Some((_, best_cost)) if best_cost <= cost => {}
                _ => best = Some((report, cost)),
            }
        }
        best.map(|(report, _)| report)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StrategyReport> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComparisonReport {
    type Item = &'a StrategyReport;
    type IntoIter = std::slice::Iter<'a, StrategyReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
