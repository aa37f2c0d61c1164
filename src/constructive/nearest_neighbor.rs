//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from `start`, always step to the nearest
//! unvisited waypoint, then optionally return to `start`.
//!
//! # Complexity
//!
//! O(n²) where n = number of waypoints.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Ties go to the lowest index. When only infinite edges remain, the first
/// unvisited waypoint is still taken and the total becomes infinite; callers
/// that need to reject such tours check the total (see
/// [`solve_tour`](crate::solver::solve_tour)).
///
/// With fewer than two waypoints no scan happens: the result is `[start]`,
/// or `[start, start]` when `closed`, with zero distance.
///
/// # Arguments
///
/// * `distances` — Distance matrix
/// * `start` — Index the tour starts from
/// * `closed` — Whether to append the leg back to `start`
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 8.0],
///     vec![10.0, 0.0, 5.0],
///     vec![8.0, 5.0, 0.0],
/// ]).unwrap();
///
/// let tour = nearest_neighbor_tour(&dm, 0, true);
/// assert_eq!(tour.nodes(), &[0, 2, 1, 0]);
/// assert!((tour.total_distance() - 23.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize, closed: bool) -> Tour {
    let n = distances.size();
    if n == 0 {
        return Tour::new(Vec::new(), 0.0);
    }
    assert!(start < n, "start {start} out of range for {n} waypoints");

    let mut path = Vec::with_capacity(n + 1);
    path.push(start);
    if n < 2 {
        if closed {
            path.push(start);
        }
        return Tour::new(path, 0.0);
    }

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut current = start;
    let mut total = 0.0;

    for _ in 1..n {
        let Some((next, d)) = distances.nearest_unvisited(current, &visited) else {
            break;
        };
        visited[next] = true;
        path.push(next);
        total += d;
        current = next;
    }

    if closed {
        total += distances.get(current, start);
        path.push(start);
    }

    Tour::new(path, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{euclidean, euclidean_strategy, random_symmetric, triangle};
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_nn_line() {
        let dm = euclidean(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let tour = nearest_neighbor_tour(&dm, 0, true);
        assert_eq!(tour.nodes(), &[0, 1, 2, 3, 0]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert!((tour.total_distance() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = euclidean(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]);
        let tour = nearest_neighbor_tour(&dm, 0, false);
        // Picks 2 first (distance 1) then 1 (distance 9)
        assert_eq!(tour.nodes(), &[0, 2, 1]);
        assert!((tour.total_distance() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_open_tour_has_no_closing_leg() {
        let tour = nearest_neighbor_tour(&triangle(), 0, false);
        assert_eq!(tour.nodes(), &[0, 2, 1]);
        assert!((tour.total_distance() - 13.0).abs() < 1e-10);
        assert!(!tour.is_closed());
    }

    #[test]
    fn test_nn_tie_breaks_to_lowest_index() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 4.0, 2.0, 2.0],
            vec![4.0, 0.0, 3.0, 3.0],
            vec![2.0, 3.0, 0.0, 6.0],
            vec![2.0, 3.0, 6.0, 0.0],
        ])
        .expect("valid");
        let tour = nearest_neighbor_tour(&dm, 0, true);
        assert_eq!(tour.nodes()[1], 2);
        assert_eq!(tour.nodes(), &[0, 2, 1, 3, 0]);
    }

    #[test]
    fn test_nn_non_zero_start() {
        let tour = nearest_neighbor_tour(&triangle(), 1, true);
        assert_eq!(tour.nodes(), &[1, 2, 0, 1]);
        assert!((tour.total_distance() - 23.0).abs() < 1e-10);
    }

    #[rstest]
    #[case(false, vec![0])]
    #[case(true, vec![0, 0])]
    fn test_nn_single_waypoint(#[case] closed: bool, #[case] expected: Vec<usize>) {
        let tour = nearest_neighbor_tour(&DistanceMatrix::new(1), 0, closed);
        assert_eq!(tour.nodes(), expected.as_slice());
        assert_eq!(tour.total_distance(), 0.0);
    }

    #[test]
    fn test_nn_empty() {
        let tour = nearest_neighbor_tour(&DistanceMatrix::new(0), 0, true);
        assert!(tour.is_empty());
    }

    #[test]
    fn test_nn_takes_infinite_edge_when_forced() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, inf],
            vec![1.0, 0.0, inf],
            vec![inf, inf, 0.0],
        ])
        .expect("valid");
        let tour = nearest_neighbor_tour(&dm, 0, true);
        assert_eq!(tour.nodes(), &[0, 1, 2, 0]);
        assert!(tour.total_distance().is_infinite());
    }

    #[test]
    fn test_nn_random_instances_hamiltonian() {
        for seed in 0..20 {
            let dm = random_symmetric(9, seed);
            let tour = nearest_neighbor_tour(&dm, (seed % 9) as usize, true);
            assert!(tour.is_hamiltonian(9), "seed {seed}");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn nn_visits_every_index_once(dm in euclidean_strategy(15), closed in any::<bool>()) {
            let n = dm.size();
            let tour = nearest_neighbor_tour(&dm, 0, closed);
            prop_assert!(tour.is_hamiltonian(n));
            prop_assert_eq!(tour.len(), if closed { n + 1 } else { n });
            let priced = dm.path_cost(tour.nodes());
            prop_assert!((priced - tour.total_distance()).abs() < 1e-6 * (1.0 + priced));
        }
    }
}
