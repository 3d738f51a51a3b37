//! Exact search configuration.

use super::heuristic::Heuristic;
use super::state::MAX_EXACT_CITIES;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// Configuration for [`ExactRunner`](super::ExactRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::exact::{ExactConfig, Heuristic};
///
/// let ucs = ExactConfig::uniform_cost();
/// assert_eq!(ucs.heuristic, Heuristic::Zero);
///
/// let astar = ExactConfig::a_star()
///     .with_start(2)
///     .with_max_expansions(1_000_000);
/// assert_eq!(astar.heuristic, Heuristic::NearestPlusMst);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Lower bound added to the frontier key. [`Heuristic::Zero`] gives
    /// uniform-cost search.
    pub heuristic: Heuristic,

    /// City the tour starts and ends at.
    pub start: usize,

    /// Optional cap on popped-and-expanded states.
    ///
    /// When reached, the best tour found so far is returned with
    /// `complete = false`. `None` searches until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self::a_star()
    }
}

impl ExactConfig {
    /// Uniform-cost search (frontier key = accumulated cost).
    pub fn uniform_cost() -> Self {
        Self {
            heuristic: Heuristic::Zero,
            start: 0,
            max_expansions: None,
        }
    }

    /// Heuristic-guided search with the nearest + MST bound.
    pub fn a_star() -> Self {
        Self {
            heuristic: Heuristic::NearestPlusMst,
            start: 0,
            max_expansions: None,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Validates the configuration on its own.
    pub fn validate(&self) -> Result<()> {
        if self.max_expansions == Some(0) {
            return Err(TspError::configuration(
                "max_expansions must be positive or None",
            ));
        }
        Ok(())
    }

    /// Validates the configuration against a concrete instance.
    pub fn validate_for(&self, matrix: &DistanceMatrix) -> Result<()> {
        self.validate()?;
        if matrix.is_empty() {
            return Err(TspError::invalid_input("city set is empty"));
        }
        if matrix.len() > MAX_EXACT_CITIES {
            return Err(TspError::invalid_input(format!(
                "exact search supports at most {MAX_EXACT_CITIES} cities, got {}",
                matrix.len()
            )));
        }
        matrix.check_city(self.start, "start")
    }
}
