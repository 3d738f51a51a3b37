//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// Configuration for the Genetic Algorithm.
///
/// Termination is a fixed generation budget; there is no convergence
/// detection.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.elite_count(), 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_elite_ratio(0.05)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Fraction of the population carried unchanged into the next
    /// generation (0.0–1.0).
    pub elite_ratio: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is skipped, a clone of the first parent is used.
    pub crossover_rate: f64,

    /// Probability of applying swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fixed city anchoring every tour; genomes order the other cities.
    pub start: usize,

    /// Evaluate the population with rayon. Needs the `parallel` feature;
    /// ignored otherwise.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            selection: Selection::default(),
            elite_ratio: 0.1,
            crossover_rate: 1.0,
            mutation_rate: 0.1,
            start: 0,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience for `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried over each generation.
    ///
    /// `population_size * elite_ratio`, rounded down. A positive ratio keeps
    /// at least one elite unless the population has a single member.
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elite_ratio) as usize;
        if count == 0 && self.elite_ratio > 0.0 {
            1.min(self.population_size.saturating_sub(1))
        } else {
            count
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::configuration("population_size must be at least 1"));
        }
        if self.max_generations == 0 {
            return Err(TspError::configuration("max_generations must be at least 1"));
        }
        if self.elite_count() >= self.population_size {
            return Err(TspError::configuration(
                "elite_ratio too high: elites fill entire population",
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(TspError::configuration("tournament size must be at least 1"));
        }
        for (name, value) in [
            ("elite_ratio", self.elite_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TspError::configuration(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
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
