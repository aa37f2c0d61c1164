//! Paired distance and duration matrices.

use super::DistanceMatrix;
use crate::error::InputError;

/// A distance matrix with an optional duration matrix of identical shape.
///
/// Durations are often asymmetric in real traffic data. Tours are always
/// ordered by distance; durations are only summed along that order.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, TravelMatrices};
///
/// let d = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let t = DistanceMatrix::from_rows(vec![vec![0.0, 60.0], vec![90.0, 0.0]]).unwrap();
/// let m = TravelMatrices::with_durations(d, t).unwrap();
/// assert_eq!(m.durations().map(|t| t.get(1, 0)), Some(90.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrices {
    distances: DistanceMatrix,
    durations: Option<DistanceMatrix>,
}

impl TravelMatrices {
    /// Wraps a distance matrix without durations.
    pub fn new(distances: DistanceMatrix) -> Self {
        Self {
            distances,
            durations: None,
        }
    }

    /// Pairs a distance matrix with a duration matrix of the same size.
    pub fn with_durations(
        distances: DistanceMatrix,
        durations: DistanceMatrix,
    ) -> Result<Self, InputError> {
        if durations.size() != distances.size() {
            return Err(InputError::DimensionMismatch {
                expected: distances.size(),
                actual: durations.size(),
            });
        }
        Ok(Self {
            distances,
            durations: Some(durations),
        })
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn durations(&self) -> Option<&DistanceMatrix> {
        self.durations.as_ref()
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.distances.size()
    }
}
