//! Route aggregation: ordered waypoints, travel legs and totals.

mod aggregator;

pub use aggregator::RouteAggregator;
