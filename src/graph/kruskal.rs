//! Kruskal's minimum spanning tree.
//!
//! # Algorithm
//!
//! Enumerate every pair `(i, j)` with `i < j` as a candidate edge, sort the
//! candidates by weight, then accept each edge whose endpoints lie in
//! different components of a [`UnionFind`]. Stop once `n - 1` edges are in.
//!
//! The sort is stable, so equal weights keep enumeration order (lower `i`,
//! then lower `j`) and the resulting edge set is fully determined by the
//! input weights.
//!
//! # Complexity
//!
//! O(n² log n) for the sort over n(n-1)/2 candidates.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and
//! the traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use super::{SpanningTree, UnionFind};
use crate::distance::DistanceMatrix;

/// Builds a minimum spanning tree with Kruskal's algorithm.
///
/// Only `distances.get(i, j)` for `i < j` is read, so the matrix is assumed
/// symmetric. Infinite entries are treated as missing edges; if they
/// disconnect the graph the result is a forest and
/// [`SpanningTree::is_spanning`] is `false`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::graph::kruskal_mst;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 8.0],
///     vec![10.0, 0.0, 5.0],
///     vec![8.0, 5.0, 0.0],
/// ]).unwrap();
/// let tree = kruskal_mst(&dm);
/// assert_eq!(tree.num_edges(), 2);
/// assert!((tree.total_weight() - 13.0).abs() < 1e-10);
/// ```
pub fn kruskal_mst(distances: &DistanceMatrix) -> SpanningTree {
    let n = distances.size();
    let mut tree = SpanningTree::new(n);
    if n < 2 {
        return tree;
    }

    let mut candidates = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let w = distances.get(i, j);
            if w.is_finite() {
                candidates.push((w, i, j));
            }
        }
    }
    candidates.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut components = UnionFind::new(n);
    for (w, i, j) in candidates {
        if components.union(i, j) {
            tree.add_edge(i, j, w);
            if tree.num_edges() == n - 1 {
                break;
            }
        }
    }
    tree
}
