//! Pairwise distance metrics.
//!
//! # References
//!
//! - Sinnott (1984), "Virtues of the Haversine", *Sky and Telescope* 68(2)

use crate::error::{Result, TspError};
use std::fmt;
use std::str::FromStr;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A 2-D coordinate.
///
/// For planar instances `x`/`y` are Cartesian. For geographic instances
/// `x` is latitude and `y` is longitude, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Cartesian point.
    pub fn planar(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Geographic point, `(lat, lon)` in degrees.
    pub fn geographic(lat: f64, lon: f64) -> Self {
        Self { x: lat, y: lon }
    }

    pub fn lat(&self) -> f64 {
        self.x
    }

    pub fn lon(&self) -> f64 {
        self.y
    }

    /// Returns `true` when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Cost between two coordinates.
///
/// Implementations must be non-negative, symmetric, and zero iff the
/// points coincide. Heuristics in [`crate::exact`] additionally rely on
/// the triangle inequality for admissibility.
pub trait DistanceMetric: Send + Sync {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64;
}

/// Straight-line distance in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Great-circle distance on a sphere (haversine, `atan2` form).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    /// Sphere radius; the result is in the same unit.
    pub radius: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS_KM,
        }
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        let lat1 = a.lat().to_radians();
        let lat2 = b.lat().to_radians();
        let dlat = lat2 - lat1;
        let dlon = (b.lon() - a.lon()).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // rounding can push h a hair outside [0, 1] near antipodes
        let h = h.clamp(0.0, 1.0);
        2.0 * self.radius * h.sqrt().atan2((1.0 - h).sqrt())
    }
}

/// Metric tag chosen by the caller alongside the city table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// [`Euclidean`] over `(x, y)`.
    #[default]
    Planar,
    /// [`Haversine`] in kilometres over `(lat, lon)`.
    Geographic,
}

impl DistanceMetric for Metric {
    fn distance(&self, a: Coordinate, b: Coordinate) -> f64 {
        match self {
            Metric::Planar => Euclidean.distance(a, b),
            Metric::Geographic => Haversine::default().distance(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Planar => f.write_str("planar"),
            Metric::Geographic => f.write_str("geographic"),
        }
    }
}

impl FromStr for Metric {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planar" | "euclidean" => Ok(Metric::Planar),
            "geographic" | "haversine" => Ok(Metric::Geographic),
            other => Err(TspError::invalid_input(format!(
                "unknown metric '{other}', expected 'planar' or 'geographic'"
            ))),
        }
    }
}
