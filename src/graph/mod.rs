//! Graph structures for the spanning-tree heuristics.
//!
//! - [`UnionFind`] — Disjoint sets with path compression and union by rank
//! - [`SpanningTree`] — Undirected adjacency in edge-insertion order
//! - [`kruskal_mst`] — Kruskal's algorithm (1956), O(n² log n)
//! - [`prim_mst`] — Prim's algorithm with a lazy heap (1957), O(n² log n)
//!
//! Both builders produce trees of equal total weight on the same matrix.
//! Their edge sets, and so the neighbor order, may differ when several
//! minimum trees exist.

mod kruskal;
mod prim;
mod tree;
mod union_find;

pub use kruskal::kruskal_mst;
pub use prim::{prim_mst, PRIM_ROOT};
pub use tree::{SpanningTree, TreeEdge};
pub use union_find::UnionFind;
