//! Error types.

use thiserror::Error;

/// Errors raised while building a problem instance or validating a request.
///
/// The solvers themselves never fail: once a [`CostMatrix`](crate::matrix::CostMatrix)
/// exists and the start index is in range, every solve runs to completion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Fewer than two cities.
    #[error("matrix must have at least 2 cities, got {size}")]
    InvalidDimension { size: usize },

    /// A city index outside `[0, size)`.
    #[error("city index {index} out of range (expected 0..{size})")]
    IndexOutOfRange { index: usize, size: usize },

    /// A matrix entry is missing, not a number, infinite, or negative.
    #[error("malformed matrix at ({row}, {col}): {reason}")]
    MalformedMatrix {
        row: usize,
        col: usize,
        reason: String,
    },

    /// A generator configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = TspError::InvalidDimension { size: 1 };
        assert_eq!(e.to_string(), "matrix must have at least 2 cities, got 1");

        let e = TspError::IndexOutOfRange { index: 4, size: 3 };
        assert_eq!(e.to_string(), "city index 4 out of range (expected 0..3)");

        let e = TspError::MalformedMatrix {
            row: 1,
            col: 2,
            reason: "negative cost -1".into(),
        };
        assert_eq!(e.to_string(), "malformed matrix at (1, 2): negative cost -1");
    }
}
