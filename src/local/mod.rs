//! Local search engine.
//!
//! - [`nearest_neighbor`]: greedy construction from a chosen start city
//! - [`two_opt`]: segment-reversal improvement to a 2-opt local optimum
//! - [`TwoOptRunner`]: nearest neighbor followed by 2-opt
//! - [`HillClimbRunner`]: steepest-ascent pairwise-swap climbing with
//!   random restarts

mod config;
mod construct;
mod hill_climb;
mod two_opt;

pub use config::{HillClimbConfig, TwoOptConfig};
pub use construct::nearest_neighbor;
pub use hill_climb::{HillClimbResult, HillClimbRunner};
pub use two_opt::{two_opt, TwoOptResult, TwoOptRunner, TwoOptStats};
