//! Domain model types for tour construction.
//!
//! Waypoints are opaque stops carried alongside a matrix index, tours are
//! ordered index sequences, and route summaries pair a tour with its
//! per-leg costs and totals.

mod summary;
mod tour;
mod waypoint;

pub use summary::{RouteSummary, TravelLeg};
pub use tour::Tour;
pub use waypoint::{parse_waypoints, Waypoint};
