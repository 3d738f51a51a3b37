//! Genetic Algorithm.
//!
//! A generic generational GA built on trait-based abstractions, plus the
//! TSP encoding that drives it. [`GaRunner`] knows nothing about tours;
//! [`TourProblem`] supplies permutation genomes, PMX crossover, and swap
//! mutation.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its evaluated cost
//! - [`GaProblem`]: Problem definition (initialization, evaluation, operators)
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, elitism)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual and per-generation history
//! - [`solve_genetic`]: One-call TSP solve returning a closed [`Tour`](crate::Tour)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use problem::{solve_genetic, solve_genetic_with_rng, GeneticResult, TourGenome, TourProblem};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{GaProblem, Individual};
