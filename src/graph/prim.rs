//! Prim's minimum spanning tree with a lazy binary heap.
//!
//! # Algorithm
//!
//! Seed a min-heap with `(0, root, no parent)`. Pop the lightest entry; if
//! its node is already in the tree the entry is stale and dropped. Otherwise
//! add the node, record the edge to its parent (the seed has none) and push
//! `(d(node, v), v, node)` for every node `v` not yet in the tree. Runs
//! until the heap drains.
//!
//! Heap entries order by weight, then node, then parent (a missing parent
//! first), so equal weights resolve deterministically.
//!
//! # Complexity
//!
//! O(n² log n) on a complete graph: up to n² pushes of O(log n) each.
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::SpanningTree;
use crate::distance::DistanceMatrix;

/// Root used by [`prim_mst`].
pub const PRIM_ROOT: usize = 0;

#[derive(Debug, Clone, Copy)]
struct Frontier {
    weight: f64,
    node: usize,
    parent: Option<usize>,
}

impl Frontier {
    fn key(&self) -> (f64, usize, Option<usize>) {
        (self.weight, self.node, self.parent)
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed so `BinaryHeap` pops the smallest key first.
    fn cmp(&self, other: &Self) -> Ordering {
        let (w1, n1, p1) = self.key();
        let (w2, n2, p2) = other.key();
        w2.total_cmp(&w1)
            .then_with(|| n2.cmp(&n1))
            .then_with(|| p2.cmp(&p1))
    }
}

/// Builds a minimum spanning tree with Prim's algorithm, rooted at
/// [`PRIM_ROOT`].
///
/// Frontier weights are read as `distances.get(node, v)` from the node just
/// added, so the matrix is assumed symmetric. Infinite entries are treated
/// as missing edges; nodes reachable only through them are left out and
/// [`SpanningTree::is_spanning`] is `false`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::graph::{kruskal_mst, prim_mst};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 8.0],
///     vec![10.0, 0.0, 5.0],
///     vec![8.0, 5.0, 0.0],
/// ]).unwrap();
/// let prim = prim_mst(&dm);
/// assert_eq!(prim.neighbors(0), &[2]);
/// assert!((prim.total_weight() - kruskal_mst(&dm).total_weight()).abs() < 1e-10);
/// ```
pub fn prim_mst(distances: &DistanceMatrix) -> SpanningTree {
    let n = distances.size();
    let mut tree = SpanningTree::new(n);
    if n == 0 {
        return tree;
    }

    let mut in_tree = vec![false; n];
    let mut heap = BinaryHeap::new();
    heap.push(Frontier {
        weight: 0.0,
        node: PRIM_ROOT,
        parent: None,
    });

    while let Some(Frontier {
        weight,
        node,
        parent,
    }) = heap.pop()
    {
        if in_tree[node] {
            continue;
        }
        in_tree[node] = true;
        if let Some(parent) = parent {
            tree.add_edge(parent, node, weight);
        }
        for (v, _) in in_tree.iter().enumerate().filter(|&(_, &done)| !done) {
            let w = distances.get(node, v);
            if w.is_finite() {
                heap.push(Frontier {
                    weight: w,
                    node: v,
                    parent: Some(node),
                });
            }
        }
    }
    tree
}
