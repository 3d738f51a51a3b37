//! Exact state-space search.
//!
//! One best-first search over [`SearchState`] = `(current city, visited
//! bitmask)`, parameterized by a [`Heuristic`]:
//!
//! - [`Heuristic::Zero`]: uniform-cost search
//! - [`Heuristic::NearestUnvisited`]: distance to the nearest unvisited city
//! - [`Heuristic::NearestPlusMst`]: the above plus an MST over the
//!   unvisited cities (A*-style, tightest bound)
//!
//! # Key Types
//!
//! - [`ExactConfig`]: heuristic, start city, optional expansion budget
//! - [`ExactRunner`]: executes the search
//! - [`ExactResult`]: tour, cost, and search statistics
//!
//! Practical only for small instances; the bitmask caps `N` at
//! [`MAX_EXACT_CITIES`].
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Bellman (1962), "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem"

mod config;
mod heuristic;
mod runner;
mod state;

pub use config::ExactConfig;
pub use heuristic::{mst_cost, Heuristic};
pub use runner::{heuristic_search, uniform_cost_search, ExactResult, ExactRunner};
pub use state::{SearchState, VisitedSet, MAX_EXACT_CITIES};
