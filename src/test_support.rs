//! Shared fixtures for unit tests.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::distance::DistanceMatrix;
use crate::models::Waypoint;

/// Labelled waypoints at the given coordinates.
pub(crate) fn waypoints_at(points: &[(f64, f64)]) -> Vec<Waypoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Waypoint::with_location(format!("w{i}"), x, y))
        .collect()
}

/// Euclidean matrix over the given coordinates.
pub(crate) fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
    DistanceMatrix::from_waypoints(&waypoints_at(points)).expect("all waypoints located")
}

/// The three-stop example: d(0,1)=10, d(1,2)=5, d(2,0)=8.
pub(crate) fn triangle() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0.0, 10.0, 8.0],
        vec![10.0, 0.0, 5.0],
        vec![8.0, 5.0, 0.0],
    ])
    .expect("valid triangle")
}

/// Reproducible symmetric matrix with integer weights in `1..=50`.
///
/// Integer weights make ties likely, which exercises tie-breaking.
pub(crate) fn random_symmetric(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dm = DistanceMatrix::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let d = f64::from(rng.random_range(1_u32..=50));
            dm.set(i, j, d);
            dm.set(j, i, d);
        }
    }
    dm
}

/// Proptest strategy for Euclidean matrices of 1 to `max_n` points.
pub(crate) fn euclidean_strategy(max_n: usize) -> impl Strategy<Value = DistanceMatrix> {
    prop::collection::vec((0.0_f64..1000.0, 0.0_f64..1000.0), 1..=max_n)
        .prop_map(|points| euclidean(&points))
}
