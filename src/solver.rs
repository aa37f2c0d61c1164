//! Strategy selection and the single tour-solving entry point.
//!
//! [`solve_tour`] validates its inputs, checks that finite edges connect
//! every waypoint, runs the chosen heuristic and rejects any tour that would
//! travel an infinite-cost leg. Each call allocates its own working state,
//! so concurrent solves share nothing.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constructive::{nearest_neighbor_tour, spanning_tree_tour};
use crate::distance::DistanceMatrix;
use crate::error::{InputError, RouteError};
use crate::graph::{kruskal_mst, prim_mst, SpanningTree, UnionFind};
use crate::models::Tour;

/// Tolerance used when warning about asymmetric matrices.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Tour construction heuristic.
///
/// # Examples
///
/// ```
/// use u_tour::solver::Strategy;
///
/// let s: Strategy = "prim-mst".parse().unwrap();
/// assert_eq!(s, Strategy::PrimMst);
/// assert_eq!(Strategy::KruskalMst.to_string(), "kruskal-mst");
/// assert!("simulated-annealing".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Nearest-neighbor walk.
    #[default]
    Greedy,
    /// Kruskal spanning tree, then depth-first tour.
    KruskalMst,
    /// Prim spanning tree, then depth-first tour.
    PrimMst,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Greedy, Strategy::KruskalMst, Strategy::PrimMst];

    /// Wire name of this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::KruskalMst => "kruskal-mst",
            Strategy::PrimMst => "prim-mst",
        }
    }

    fn uses_spanning_tree(&self) -> bool {
        !matches!(self, Strategy::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?}, expected one of greedy, kruskal-mst, prim-mst")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Options for a solve.
///
/// Default: start at index 0, closed tour.
///
/// `closed` only affects the greedy strategy; spanning-tree tours always
/// return to their start. Prim always roots its tree at index 0 and the
/// depth-first walk then starts at `start`.
///
/// # Examples
///
/// ```
/// use u_tour::solver::SolveOptions;
///
/// let opts = SolveOptions::new().with_start(2).with_closed(false);
/// assert_eq!(opts.start(), 2);
/// assert!(!opts.closed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    start: usize,
    closed: bool,
}

impl SolveOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self {
            start: 0,
            closed: true,
        }
    }

    /// Sets the start index.
    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    /// Sets whether greedy tours return to the start.
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn closed(&self) -> bool {
        self.closed
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Solves a tour over `distances` with the given strategy.
///
/// # Errors
///
/// - [`RouteError::InvalidInput`] for an empty matrix or an out-of-range start
/// - [`RouteError::DisconnectedGraph`] when finite edges leave more than one component
/// - [`RouteError::UnreachableLeg`] when the tour would use an infinite edge
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::solver::{solve_tour, SolveOptions, Strategy};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 8.0],
///     vec![10.0, 0.0, 5.0],
///     vec![8.0, 5.0, 0.0],
/// ]).unwrap();
///
/// for strategy in Strategy::ALL {
///     let tour = solve_tour(&dm, strategy, SolveOptions::default()).unwrap();
///     assert!(tour.is_hamiltonian(3));
///     assert!((tour.total_distance() - 23.0).abs() < 1e-10);
/// }
/// ```
pub fn solve_tour(
    distances: &DistanceMatrix,
    strategy: Strategy,
    options: SolveOptions,
) -> Result<Tour, RouteError> {
    let n = distances.size();
    if n == 0 {
        return Err(InputError::EmptyMatrix.into());
    }
    if options.start >= n {
        return Err(InputError::StartOutOfRange {
            start: options.start,
            size: n,
        }
        .into());
    }
    check_connected(distances)?;

    if strategy.uses_spanning_tree() && !distances.is_symmetric(SYMMETRY_TOLERANCE) {
        warn!("{strategy} assumes a symmetric matrix; reading upper-triangle costs only");
    }
    debug!("solving {n} waypoints with {strategy} from {}", options.start);

    let tour = match strategy {
        Strategy::Greedy => nearest_neighbor_tour(distances, options.start, options.closed),
        Strategy::KruskalMst => tree_tour(distances, &kruskal_mst(distances), options.start)?,
        Strategy::PrimMst => tree_tour(distances, &prim_mst(distances), options.start)?,
    };

    if let Some((from, to)) = tour
        .legs()
        .find(|&(from, to)| distances.get(from, to).is_infinite())
    {
        return Err(RouteError::UnreachableLeg { from, to });
    }

    debug!(
        "{strategy} tour over {n} waypoints: total distance {}",
        tour.total_distance()
    );
    Ok(tour)
}

fn tree_tour(
    distances: &DistanceMatrix,
    tree: &SpanningTree,
    start: usize,
) -> Result<Tour, RouteError> {
    if !tree.is_spanning() {
        return Err(RouteError::DisconnectedGraph {
            components: tree.num_nodes() - tree.num_edges(),
        });
    }
    debug!(
        "spanning tree: {} edges, weight {}",
        tree.num_edges(),
        tree.total_weight()
    );
    let nodes = spanning_tree_tour(tree, start);
    let total = distances.path_cost(&nodes);
    Ok(Tour::new(nodes, total))
}

/// Fails with [`RouteError::DisconnectedGraph`] unless finite edges, taken
/// in either direction, connect every waypoint.
pub fn check_connected(distances: &DistanceMatrix) -> Result<(), RouteError> {
    let n = distances.size();
    let mut components = UnionFind::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if distances.get(i, j).is_finite() || distances.get(j, i).is_finite() {
                components.union(i, j);
            }
        }
    }
    match components.components() {
        0 | 1 => Ok(()),
        components => Err(RouteError::DisconnectedGraph { components }),
    }
}
