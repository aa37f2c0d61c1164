//! Error types shared across the crate.
//!
//! Every recoverable condition is detected before any algorithmic work
//! starts. Out-of-range indices handed directly to the algorithm functions
//! are caller contract violations and panic instead.

use thiserror::Error;

/// Precondition failures on caller-supplied data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Fewer waypoints than a route needs.
    #[error("at least {required} waypoints are required, got {count}")]
    TooFewWaypoints {
        /// Number of waypoints supplied.
        count: usize,
        /// Minimum accepted.
        required: usize,
    },
    /// The matrix has no rows.
    #[error("matrix is empty")]
    EmptyMatrix,
    /// A row does not have as many columns as the matrix has rows.
    #[error("matrix row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        /// Offending row.
        row: usize,
        /// Expected column count.
        expected: usize,
        /// Actual column count.
        actual: usize,
    },
    /// Two inputs that must share a size do not.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size.
        expected: usize,
        /// Actual size.
        actual: usize,
    },
    /// A cost is NaN or negative.
    #[error("invalid cost {value} at ({row}, {col})")]
    InvalidEntry {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Rejected value.
        value: f64,
    },
    /// `matrix[i][i]` is not zero.
    #[error("diagonal entry {index} is {value}, expected 0")]
    NonZeroDiagonal {
        /// Diagonal index.
        index: usize,
        /// Rejected value.
        value: f64,
    },
    /// A tour needs at least two entries to form a leg.
    #[error("tour has {len} entries, at least 2 are required")]
    TourTooShort {
        /// Tour length.
        len: usize,
    },
    /// A tour refers to an index outside the matrix.
    #[error("index {index} is out of range for {size} waypoints")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of waypoints.
        size: usize,
    },
    /// The start index is outside the matrix.
    #[error("start index {start} is out of range for {size} waypoints")]
    StartOutOfRange {
        /// Requested start.
        start: usize,
        /// Number of waypoints.
        size: usize,
    },
    /// A waypoint needed for geometry has no coordinates.
    #[error("waypoint {index} has no location")]
    MissingLocation {
        /// Waypoint index.
        index: usize,
    },
    /// A waypoint's coordinates are NaN or infinite.
    #[error("waypoint {index} has a non-finite location")]
    InvalidLocation {
        /// Waypoint index.
        index: usize,
    },
    /// A `label,x,y` line could not be parsed.
    #[error("line {line}: expected `label,x,y`, got {content:?}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// Raw line content.
        content: String,
    },
}

/// Failures reported by a [`DistanceMatrixProvider`](crate::provider::DistanceMatrixProvider).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The provider could not be reached.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
    /// The provider answered with data that is not a usable matrix.
    #[error("malformed provider response: {0}")]
    Malformed(String),
    /// The provider refused the request because the waypoints are invalid.
    #[error("provider rejected input: {0}")]
    Rejected(#[from] InputError),
}

/// Errors returned by solving and route aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Caller-supplied data failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// Finite edges do not connect every waypoint.
    #[error("graph is disconnected: {components} components reachable by finite edges")]
    DisconnectedGraph {
        /// Number of connected components.
        components: usize,
    },
    /// The solved tour would use an infinite-cost leg.
    #[error("no finite edge from waypoint {from} to waypoint {to}")]
    UnreachableLeg {
        /// Leg origin index.
        from: usize,
        /// Leg destination index.
        to: usize,
    },
    /// The distance matrix provider failed.
    #[error("distance matrix provider failed: {0}")]
    ProviderFailure(#[from] ProviderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_converts() {
        let err: RouteError = InputError::EmptyMatrix.into();
        assert_eq!(err, RouteError::InvalidInput(InputError::EmptyMatrix));
        assert_eq!(err.to_string(), "invalid input: matrix is empty");
    }

    #[test]
    fn test_provider_error_message() {
        let err: RouteError = ProviderError::Unavailable("timeout".into()).into();
        assert_eq!(
            err.to_string(),
            "distance matrix provider failed: provider unavailable: timeout"
        );
    }

    #[test]
    fn test_invalid_location_message() {
        let err: ProviderError = InputError::InvalidLocation { index: 3 }.into();
        assert_eq!(
            err.to_string(),
            "provider rejected input: waypoint 3 has a non-finite location"
        );
    }
}
