//! Travel legs and route summaries.

use serde::{Deserialize, Serialize};

use super::{Tour, Waypoint};

/// One edge of a solved route between two consecutive waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLeg {
    /// Origin waypoint.
    pub from: Waypoint,
    /// Destination waypoint.
    pub to: Waypoint,
    /// Matrix index of the origin.
    pub from_index: usize,
    /// Matrix index of the destination.
    pub to_index: usize,
    /// Leg distance.
    pub distance: f64,
    /// Leg duration, when a duration matrix was supplied.
    pub duration: Option<f64>,
}

/// The ordered waypoints of a solved route plus its totals.
///
/// Built by [`RouteAggregator`](crate::evaluation::RouteAggregator).
///
/// # Examples
///
/// ```
/// use u_tour::models::{RouteSummary, Tour};
///
/// let summary = RouteSummary::new(Tour::new(Vec::new(), 0.0));
/// assert_eq!(summary.num_legs(), 0);
/// assert!(summary.total_duration().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    tour: Tour,
    waypoints: Vec<Waypoint>,
    legs: Vec<TravelLeg>,
    total_distance: f64,
    total_duration: Option<f64>,
}

impl RouteSummary {
    /// Creates an empty summary for the given tour.
    pub fn new(tour: Tour) -> Self {
        Self {
            tour,
            waypoints: Vec::new(),
            legs: Vec::new(),
            total_distance: 0.0,
            total_duration: None,
        }
    }

    /// Appends a waypoint to the ordered list.
    pub fn push_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    /// Appends a leg and adds its costs to the totals.
    ///
    /// The duration total becomes `Some` as soon as one leg carries a duration.
    pub fn push_leg(&mut self, leg: TravelLeg) {
        self.total_distance += leg.distance;
        if let Some(d) = leg.duration {
            *self.total_duration.get_or_insert(0.0) += d;
        }
        self.legs.push(leg);
    }

    /// The tour this summary was built from.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Waypoints in visiting order (closed tours repeat the start).
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn legs(&self) -> &[TravelLeg] {
        &self.legs
    }

    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }

    /// Sum of leg distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sum of leg durations, if durations were available.
    pub fn total_duration(&self) -> Option<f64> {
        self.total_duration
    }
}
