//! Local search configuration.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// Configuration for nearest-neighbor construction followed by 2-opt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwoOptConfig {
    /// City the construction starts from; stays at position 0.
    pub start: usize,
}

impl TwoOptConfig {
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Validates the configuration against a concrete instance.
    pub fn validate_for(&self, matrix: &DistanceMatrix) -> Result<()> {
        if matrix.is_empty() {
            return Err(TspError::invalid_input("city set is empty"));
        }
        matrix.check_city(self.start, "start")
    }
}

/// Configuration for steepest-ascent hill climbing with random restarts.
///
/// # Examples
///
/// ```
/// use u_tsp::local::HillClimbConfig;
///
/// let config = HillClimbConfig::default()
///     .with_restarts(25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Number of independent climbs from fresh random permutations.
    pub restarts: usize,

    /// City the returned tour is anchored at.
    pub start: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            restarts: 10,
            start: 0,
            seed: None,
        }
    }
}

impl HillClimbConfig {
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration on its own.
    pub fn validate(&self) -> Result<()> {
        if self.restarts == 0 {
            return Err(TspError::configuration("restarts must be at least 1"));
        }
        Ok(())
    }

    /// Validates the configuration against a concrete instance.
    pub fn validate_for(&self, matrix: &DistanceMatrix) -> Result<()> {
        self.validate()?;
        if matrix.is_empty() {
            return Err(TspError::invalid_input("city set is empty"));
        }
        matrix.check_city(self.start, "start")
    }
}
