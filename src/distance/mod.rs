//! Distance provider.
//!
//! A [`DistanceMetric`] turns two [`Coordinate`]s into a cost; a
//! [`DistanceMatrix`] caches every pairwise cost for an ordered city list.
//! Solvers only ever see the matrix.

mod matrix;
mod metric;

pub use matrix::{build_matrix, City, DistanceMatrix};
pub use metric::{Coordinate, DistanceMetric, Euclidean, Haversine, Metric, EARTH_RADIUS_KM};
