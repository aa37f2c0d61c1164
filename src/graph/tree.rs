//! Spanning tree adjacency.

/// An undirected edge of a spanning tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeEdge {
    /// First endpoint, as inserted.
    pub a: usize,
    /// Second endpoint, as inserted.
    pub b: usize,
    /// Edge weight taken from the distance matrix.
    pub weight: f64,
}

/// An undirected tree (or forest) over `n` nodes.
///
/// Neighbor lists keep edge-insertion order, which fixes the depth-first
/// visiting order of [`spanning_tree_tour`](crate::constructive::spanning_tree_tour).
///
/// # Examples
///
/// ```
/// use u_tour::graph::SpanningTree;
///
/// let mut tree = SpanningTree::new(3);
/// tree.add_edge(0, 2, 4.0);
/// tree.add_edge(0, 1, 1.0);
/// assert_eq!(tree.neighbors(0), &[2, 1]);
/// assert!(tree.is_spanning());
/// assert!((tree.total_weight() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    adjacency: Vec<Vec<usize>>,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    /// Creates an edgeless forest of `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Adds the undirected edge `a`–`b`.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edges.push(TreeEdge { a, b, weight });
    }

    /// Neighbors of `node` in insertion order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Sum of edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Returns `true` if the tree connects every node with `n - 1` edges.
    ///
    /// Edges are only ever added between different components by the
    /// builders, so the edge count alone decides this for their output.
    pub fn is_spanning(&self) -> bool {
        let n = self.num_nodes();
        n == 0 || self.num_edges() == n - 1
    }
}
