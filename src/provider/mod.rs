//! Distance matrix providers and the end-to-end route planner.
//!
//! A [`DistanceMatrixProvider`] turns waypoints into travel matrices. Network
//! backed providers (mapping APIs) live outside this crate and receive their
//! credentials through their own constructors. [`RoutePlanner`] ties a
//! provider to a solve strategy and produces a
//! [`RouteSummary`](crate::models::RouteSummary).

mod euclidean;
mod planner;

pub use euclidean::{EuclideanProvider, StaticProvider};
pub use planner::{RoutePlanner, MIN_WAYPOINTS};

use crate::distance::TravelMatrices;
use crate::error::ProviderError;
use crate::models::Waypoint;

/// Fetch travel matrices for a set of waypoints.
///
/// Implementers must return matrices of size `waypoints.len()`, or an error.
/// A half-populated matrix is never acceptable: missing entries are either
/// `f64::INFINITY` (no route) or a [`ProviderError::Malformed`].
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, TravelMatrices};
/// use u_tour::error::ProviderError;
/// use u_tour::models::Waypoint;
/// use u_tour::provider::DistanceMatrixProvider;
///
/// struct UnitProvider;
///
/// impl DistanceMatrixProvider for UnitProvider {
///     fn travel_matrices(&self, waypoints: &[Waypoint]) -> Result<TravelMatrices, ProviderError> {
///         let n = waypoints.len();
///         let mut dm = DistanceMatrix::new(n);
///         for i in 0..n {
///             for j in 0..n {
///                 if i != j {
///                     dm.set(i, j, 1.0);
///                 }
///             }
///         }
///         Ok(TravelMatrices::new(dm))
///     }
/// }
///
/// let m = UnitProvider.travel_matrices(&[Waypoint::new("a"), Waypoint::new("b")])?;
/// assert_eq!(m.size(), 2);
/// # Ok::<(), ProviderError>(())
/// ```
pub trait DistanceMatrixProvider {
    /// Return distance (and optionally duration) matrices for `waypoints`.
    fn travel_matrices(&self, waypoints: &[Waypoint]) -> Result<TravelMatrices, ProviderError>;
}
