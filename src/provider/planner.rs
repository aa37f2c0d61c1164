//! End-to-end route planning over a matrix provider.

use log::{debug, warn};

use super::DistanceMatrixProvider;
use crate::error::{InputError, ProviderError, RouteError};
use crate::evaluation::RouteAggregator;
use crate::models::{RouteSummary, Waypoint};
use crate::solver::{solve_tour, SolveOptions, Strategy};

/// Fewest waypoints a route request may carry.
pub const MIN_WAYPOINTS: usize = 2;

/// Plans routes: fetch matrices, solve a tour, aggregate legs and totals.
///
/// The planner holds no mutable state; one instance may serve concurrent
/// requests if its provider allows it.
///
/// # Examples
///
/// ```
/// use u_tour::models::Waypoint;
/// use u_tour::provider::{EuclideanProvider, RoutePlanner};
/// use u_tour::solver::Strategy;
///
/// let planner = RoutePlanner::new(EuclideanProvider::new());
/// let wps = vec![
///     Waypoint::with_location("A", 0.0, 0.0),
///     Waypoint::with_location("B", 10.0, 0.0),
///     Waypoint::with_location("C", 1.0, 0.0),
/// ];
/// let summary = planner.plan(&wps, Strategy::Greedy).unwrap();
/// let order: Vec<_> = summary.waypoints().iter().map(|w| w.label()).collect();
/// assert_eq!(order, vec!["A", "C", "B", "A"]);
/// assert!((summary.total_distance() - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner<P> {
    provider: P,
    options: SolveOptions,
}

impl<P: DistanceMatrixProvider> RoutePlanner<P> {
    /// Creates a planner with default [`SolveOptions`].
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            options: SolveOptions::default(),
        }
    }

    /// Replaces the solve options.
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn options(&self) -> SolveOptions {
        self.options
    }

    /// Orders `waypoints` with `strategy` and summarizes the route.
    ///
    /// # Errors
    ///
    /// - [`InputError::TooFewWaypoints`] for fewer than [`MIN_WAYPOINTS`]
    /// - [`RouteError::InvalidInput`] if the provider rejects the waypoints,
    ///   e.g. a missing or non-finite location
    /// - [`RouteError::ProviderFailure`] if the provider fails or returns
    ///   matrices of the wrong size
    /// - any error of [`solve_tour`] or [`RouteAggregator::aggregate`]
    pub fn plan(
        &self,
        waypoints: &[Waypoint],
        strategy: Strategy,
    ) -> Result<RouteSummary, RouteError> {
        if waypoints.len() < MIN_WAYPOINTS {
            return Err(InputError::TooFewWaypoints {
                count: waypoints.len(),
                required: MIN_WAYPOINTS,
            }
            .into());
        }

        let matrices = self
            .provider
            .travel_matrices(waypoints)
            .map_err(|e| match e {
                ProviderError::Rejected(input) => RouteError::InvalidInput(input),
                e => {
                    warn!("distance matrix provider failed: {e}");
                    RouteError::ProviderFailure(e)
                }
            })?;
        if matrices.size() != waypoints.len() {
            return Err(RouteError::ProviderFailure(ProviderError::Malformed(format!(
                "expected a {n}x{n} matrix, got {m}x{m}",
                n = waypoints.len(),
                m = matrices.size()
            ))));
        }

        let tour = solve_tour(matrices.distances(), strategy, self.options)?;

        let mut aggregator = RouteAggregator::new(waypoints, matrices.distances());
        if let Some(durations) = matrices.durations() {
            aggregator = aggregator.with_durations(durations);
        }
        let summary = aggregator.aggregate(&tour)?;
        debug!(
            "planned {} waypoints with {strategy}: {} legs, distance {}",
            waypoints.len(),
            summary.num_legs(),
            summary.total_distance()
        );
        Ok(summary)
    }
}
