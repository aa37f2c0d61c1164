//! Constructive heuristics for building tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor, O(n²)
//! - [`spanning_tree_tour`] — Depth-first preorder of a spanning tree with
//!   shortcutting (the "double tree" approximation), O(n)

mod nearest_neighbor;
mod spanning_tree_tour;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use spanning_tree_tour::spanning_tree_tour;
