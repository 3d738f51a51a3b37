//! Error taxonomy shared by every solver.
//!
//! Input-shape problems ([`TspError::InvalidInput`], [`TspError::Configuration`])
//! are detected before any search starts. [`TspError::NoSolution`] is an
//! ordinary outcome that callers are expected to handle.

use thiserror::Error;

/// Errors produced by the TSP engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// Empty city set, unknown start city, or malformed coordinates.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The search ended without completing a tour.
    #[error("no solution: {0}")]
    NoSolution(String),

    /// A budget or rate parameter is out of range.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn no_solution(message: impl Into<String>) -> Self {
        Self::NoSolution(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns `true` for [`TspError::NoSolution`].
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::NoSolution(_))
    }
}
