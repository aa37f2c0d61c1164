//! Spanning-tree tour: depth-first preorder with shortcutting.
//!
//! # Algorithm
//!
//! Walk the tree depth-first from `start`, recording each node the first
//! time it is reached. Unvisited neighbors are taken in the tree's
//! neighbor order, which is the builder's edge-insertion order, so the
//! result depends on which builder produced the tree. The walk uses an
//! explicit stack of `(node, next neighbor position)` frames and reproduces
//! the recursive preorder exactly.
//!
//! Shortcutting then drops any repeated node. On a valid tree the preorder
//! never repeats, so this pass only matters for malformed adjacency.
//! Finally the tour is closed by returning to `start`.
//!
//! Priced against the full matrix, the jumps between branches are not tree
//! edges. On metric instances the tour costs at most twice the tree.
//!
//! # Complexity
//!
//! O(n) for a tree with n nodes.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::graph::SpanningTree;

/// Converts a spanning tree into a closed tour starting at `start`.
///
/// Returns `n + 1` indices for a spanning tree over `n` nodes. Nodes not
/// reachable from `start` are absent.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty tree.
///
/// # Examples
///
/// ```
/// use u_tour::graph::SpanningTree;
/// use u_tour::constructive::spanning_tree_tour;
///
/// // 0 - 1 - 2, and 0 - 3
/// let mut tree = SpanningTree::new(4);
/// tree.add_edge(0, 1, 1.0);
/// tree.add_edge(1, 2, 1.0);
/// tree.add_edge(0, 3, 1.0);
/// assert_eq!(spanning_tree_tour(&tree, 0), vec![0, 1, 2, 3, 0]);
/// ```
pub fn spanning_tree_tour(tree: &SpanningTree, start: usize) -> Vec<usize> {
    let n = tree.num_nodes();
    if n == 0 {
        return Vec::new();
    }
    assert!(start < n, "start {start} out of range for {n} nodes");

    let preorder = depth_first_preorder(tree, start);
    let mut tour = shortcut(&preorder, n);
    tour.push(start);
    tour
}

fn depth_first_preorder(tree: &SpanningTree, start: usize) -> Vec<usize> {
    let n = tree.num_nodes();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut stack = vec![(start, 0_usize)];
    visited[start] = true;
    order.push(start);

    while let Some(frame) = stack.last_mut() {
        let (node, cursor) = *frame;
        frame.1 += 1;
        let Some(&next) = tree.neighbors(node).get(cursor) else {
            stack.pop();
            continue;
        };
        if !visited[next] {
            visited[next] = true;
            order.push(next);
            stack.push((next, 0));
        }
    }
    order
}

/// Keeps the first occurrence of each node.
fn shortcut(walk: &[usize], n: usize) -> Vec<usize> {
    let mut seen = vec![false; n];
    walk.iter()
        .copied()
        .filter(|&node| !std::mem::replace(&mut seen[node], true))
        .collect()
}
