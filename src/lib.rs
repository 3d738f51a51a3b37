//! Traveling Salesman Problem solvers over small-to-moderate city sets.
//!
//! Every solver consumes a read-only [`DistanceMatrix`] and returns a closed
//! [`Tour`] (`[s, ..., s]`) with its cost:
//!
//! - **Exact search** ([`exact`]): best-first search over
//!   `(current city, visited bitmask)` states, uniform-cost or guided by an
//!   admissible nearest-neighbor + MST bound. Optimal, exponential.
//! - **Local search** ([`local`]): nearest-neighbor construction improved
//!   by 2-opt, and steepest pairwise-swap hill climbing with random restarts.
//! - **Genetic Algorithm** ([`ga`]): generational GA with tournament or rank
//!   selection, PMX crossover, swap mutation, and elitism.
//! - **Comparison** ([`compare`]): runs several strategies on one instance
//!   and reports cost and time per strategy.
//!
//! # Example
//!
//! ```
//! use u_tsp::distance::{City, DistanceMatrix, Metric};
//! use u_tsp::exact::{ExactConfig, ExactRunner};
//! use u_tsp::local::{TwoOptConfig, TwoOptRunner};
//!
//! let cities = vec![
//!     City::new("Home", (0.0, 0.0)),
//!     City::new("Mill", (3.0, 0.0)),
//!     City::new("Farm", (3.0, 4.0)),
//!     City::new("Well", (0.0, 4.0)),
//! ];
//! let matrix = DistanceMatrix::from_cities(&cities, &Metric::Planar)?;
//!
//! let exact = ExactRunner::run(&matrix, &ExactConfig::a_star())?;
//! let local = TwoOptRunner::run(&matrix, &TwoOptConfig::default())?;
//! assert!((exact.cost - 14.0).abs() < 1e-9);
//! assert!((local.cost - exact.cost).abs() < 1e-9);
//! assert_eq!(exact.tour.names(&cities).first(), Some(&"Home"));
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: rayon-backed population evaluation and
//!   [`Comparison::run_parallel`](compare::Comparison)
//! - `serde`: `Serialize`/`Deserialize` on coordinates, configs, tours, and
//!   reports
//!
//! The library logs through the [`log`] facade and installs no logger.

pub mod compare;
pub mod distance;
pub mod error;
pub mod exact;
pub mod ga;
pub mod local;
pub mod random;
pub mod tour;

pub use distance::{build_matrix, City, Coordinate, DistanceMatrix, Metric};
pub use error::{Result, TspError};
pub use tour::{Solution, Tour};
