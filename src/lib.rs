//! # u-tour
//!
//! Approximate travelling-salesman tours over a precomputed distance matrix,
//! plus the per-leg and total costs of the resulting route.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Waypoint, Tour, TravelLeg, RouteSummary)
//! - [`distance`] — Distance and duration matrices
//! - [`graph`] — Union-find and minimum spanning trees (Kruskal, Prim)
//! - [`constructive`] — Tour heuristics (nearest neighbor, spanning-tree walk)
//! - [`evaluation`] — Route aggregation into legs and totals
//! - [`solver`] — Strategy selection and the `solve_tour` entry point
//! - [`provider`] — Matrix providers and the end-to-end route planner
//! - [`error`] — Error types

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod models;
pub mod provider;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_support;
