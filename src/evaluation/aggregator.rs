//! Route aggregator that maps a tour to waypoints, legs and totals.

use crate::distance::DistanceMatrix;
use crate::error::{InputError, RouteError};
use crate::models::{RouteSummary, Tour, TravelLeg, Waypoint};

/// Turns a solved tour into ordered waypoints, per-leg costs and totals.
///
/// Durations are summed along the same order as distances, even when the
/// duration matrix is asymmetric and a different order would be faster.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Tour, Waypoint};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::RouteAggregator;
///
/// let waypoints = vec![Waypoint::new("A"), Waypoint::new("B"), Waypoint::new("C")];
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 8.0],
///     vec![10.0, 0.0, 5.0],
///     vec![8.0, 5.0, 0.0],
/// ]).unwrap();
///
/// let aggregator = RouteAggregator::new(&waypoints, &dm);
/// let summary = aggregator.aggregate(&Tour::new(vec![0, 1, 2, 0], 23.0)).unwrap();
/// assert!((summary.total_distance() - 23.0).abs() < 1e-10);
/// assert_eq!(summary.num_legs(), 3);
/// assert_eq!(summary.waypoints()[1].label(), "B");
/// ```
pub struct RouteAggregator<'a> {
    waypoints: &'a [Waypoint],
    distances: &'a DistanceMatrix,
    durations: Option<&'a DistanceMatrix>,
}

impl<'a> RouteAggregator<'a> {
    /// Creates an aggregator over distances only.
    pub fn new(waypoints: &'a [Waypoint], distances: &'a DistanceMatrix) -> Self {
        Self {
            waypoints,
            distances,
            durations: None,
        }
    }

    /// Adds a duration matrix to sum alongside distances.
    pub fn with_durations(mut self, durations: &'a DistanceMatrix) -> Self {
        self.durations = Some(durations);
        self
    }

    /// Builds the route summary for `tour`.
    ///
    /// All inputs are checked before anything is built: the matrix must be
    /// non-empty, waypoints and durations must match its size, the tour
    /// needs at least two entries and every index must be in range. No
    /// partial summary is ever returned.
    pub fn aggregate(&self, tour: &Tour) -> Result<RouteSummary, RouteError> {
        self.check(tour)?;

        let mut summary = RouteSummary::new(tour.clone());
        for &i in tour.nodes() {
            summary.push_waypoint(self.waypoints[i].clone());
        }
        for (from, to) in tour.legs() {
            summary.push_leg(TravelLeg {
                from: self.waypoints[from].clone(),
                to: self.waypoints[to].clone(),
                from_index: from,
                to_index: to,
                distance: self.distances.get(from, to),
                duration: self.durations.map(|t| t.get(from, to)),
            });
        }
        Ok(summary)
    }

    fn check(&self, tour: &Tour) -> Result<(), InputError> {
        let size = self.distances.size();
        if size == 0 {
            return Err(InputError::EmptyMatrix);
        }
        if self.waypoints.len() != size {
            return Err(InputError::DimensionMismatch {
                expected: size,
                actual: self.waypoints.len(),
            });
        }
        if let Some(durations) = self.durations {
            if durations.size() != size {
                return Err(InputError::DimensionMismatch {
                    expected: size,
                    actual: durations.size(),
                });
            }
        }
        if tour.len() < 2 {
            return Err(InputError::TourTooShort { len: tour.len() });
        }
        if let Some(&index) = tour.nodes().iter().find(|&&i| i >= size) {
            return Err(InputError::IndexOutOfRange { index, size });
        }
        Ok(())
    }
}
