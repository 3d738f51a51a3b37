//! Precomputed pairwise distance table.

use super::metric::{Coordinate, DistanceMetric};
use crate::error::{Result, TspError};

/// Absolute tolerance used when validating symmetry of user-supplied rows.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A named city. Index identity comes from its position in the input list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub name: String,
    pub coord: Coordinate,
}

impl City {
    pub fn new(name: impl Into<String>, coord: impl Into<Coordinate>) -> Self {
        Self {
            name: name.into(),
            coord: coord.into(),
        }
    }
}

/// Symmetric `N×N` cost table with a zero diagonal, stored row-major.
///
/// Built once per solve and read-only afterwards, so it can be shared
/// across threads running independent solvers.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances between `coords` under `metric`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidInput`] if `coords` is empty or contains a
    /// non-finite component.
    pub fn build<M: DistanceMetric + ?Sized>(coords: &[Coordinate], metric: &M) -> Result<Self> {
        if coords.is_empty() {
            return Err(TspError::invalid_input("city set is empty"));
        }
        if let Some(i) = coords.iter().position(|c| !c.is_finite()) {
            return Err(TspError::invalid_input(format!(
                "city {i} has a non-finite coordinate"
            )));
        }

        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(coords[i], coords[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Ok(Self { n, data })
    }

    /// Builds the matrix for a named city table.
    pub fn from_cities<M: DistanceMetric + ?Sized>(cities: &[City], metric: &M) -> Result<Self> {
        let coords: Vec<Coordinate> = cities.iter().map(|c| c.coord).collect();
        Self::build(&coords, metric)
    }

    /// Wraps a precomputed table after checking its shape.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidInput`] if the table is empty, not square, holds
    /// negative or non-finite values, has a non-zero diagonal, or is not
    /// symmetric.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::invalid_input("city set is empty"));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(TspError::invalid_input(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        for i in 0..n {
            if data[i * n + i] != 0.0 {
                return Err(TspError::invalid_input(format!(
                    "diagonal entry {i} is not zero"
                )));
            }
            for j in 0..n {
                let d = data[i * n + j];
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::invalid_input(format!(
                        "distance ({i}, {j}) = {d} is not a finite non-negative value"
                    )));
                }
                if (d - data[j * n + i]).abs() > SYMMETRY_TOLERANCE {
                    return Err(TspError::invalid_input(format!(
                        "distance ({i}, {j}) differs from ({j}, {i})"
                    )));
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false` for a constructed matrix; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from `i` to `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// All distances out of city `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Returns an error unless `city` indexes this matrix.
    pub fn check_city(&self, city: usize, role: &str) -> Result<()> {
        if city >= self.n {
            return Err(TspError::invalid_input(format!(
                "{role} city {city} is not among the {} known cities",
                self.n
            )));
        }
        Ok(())
    }
}

/// Builds a [`DistanceMatrix`] from a named city table.
///
/// Shorthand for [`DistanceMatrix::from_cities`].
pub fn build_matrix<M: DistanceMetric + ?Sized>(
    cities: &[City],
    metric: &M,
) -> Result<DistanceMatrix> {
    DistanceMatrix::from_cities(cities, metric)
}
