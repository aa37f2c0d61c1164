//! In-process providers: coordinates and precomputed matrices.

use super::DistanceMatrixProvider;
use crate::distance::{DistanceMatrix, TravelMatrices};
use crate::error::ProviderError;
use crate::models::Waypoint;

/// Straight-line distances between waypoint coordinates.
///
/// With a configured speed, durations are `distance / speed`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Waypoint;
/// use u_tour::provider::{DistanceMatrixProvider, EuclideanProvider};
///
/// let wps = vec![
///     Waypoint::with_location("A", 0.0, 0.0),
///     Waypoint::with_location("B", 30.0, 40.0),
/// ];
/// let m = EuclideanProvider::new().with_speed(10.0).travel_matrices(&wps).unwrap();
/// assert!((m.distances().get(0, 1) - 50.0).abs() < 1e-10);
/// assert!((m.durations().unwrap().get(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EuclideanProvider {
    speed: Option<f64>,
}

impl EuclideanProvider {
    /// Creates a provider that yields distances only.
    pub fn new() -> Self {
        Self { speed: None }
    }

    /// Sets the travel speed in distance units per time unit.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }
}

impl DistanceMatrixProvider for EuclideanProvider {
    fn travel_matrices(&self, waypoints: &[Waypoint]) -> Result<TravelMatrices, ProviderError> {
        let distances = DistanceMatrix::from_waypoints(waypoints)?;
        let Some(speed) = self.speed else {
            return Ok(TravelMatrices::new(distances));
        };
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ProviderError::Malformed(format!(
                "speed must be positive and finite, got {speed}"
            )));
        }
        let data = (0..distances.size())
            .flat_map(|i| (0..distances.size()).map(move |j| (i, j)))
            .map(|(i, j)| distances.get(i, j) / speed)
            .collect();
        let durations = DistanceMatrix::from_data(distances.size(), data)?;
        Ok(TravelMatrices::with_durations(distances, durations)?)
    }
}

/// Serves matrices computed elsewhere, e.g. a cached mapping API response.
///
/// Fails with [`ProviderError::Malformed`] when asked for a different number
/// of waypoints than the matrices cover.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticProvider {
    matrices: TravelMatrices,
}

impl StaticProvider {
    pub fn new(matrices: TravelMatrices) -> Self {
        Self { matrices }
    }
}

impl DistanceMatrixProvider for StaticProvider {
    fn travel_matrices(&self, waypoints: &[Waypoint]) -> Result<TravelMatrices, ProviderError> {
        if waypoints.len() != self.matrices.size() {
            return Err(ProviderError::Malformed(format!(
                "matrix covers {} waypoints, {} requested",
                self.matrices.size(),
                waypoints.len()
            )));
        }
        Ok(self.matrices.clone())
    }
}
