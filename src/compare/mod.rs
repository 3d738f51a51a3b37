//! Comparison harness.
//!
//! Runs several named strategies on one [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! and collects cost, wall-clock time, and (for exact search) an estimated
//! peak memory footprint per strategy.
//!
//! - [`Strategy`]: a solver family with its configuration
//! - [`Comparison`]: registration and execution, sequential or (with the
//!   `parallel` feature) on rayon threads
//! - [`ComparisonReport`]: per-strategy [`StrategyReport`]s in registration order

mod runner;
mod types;

pub use runner::Comparison;
pub use types::{ComparisonReport, Strategy, StrategyOutcome, StrategyReport};
