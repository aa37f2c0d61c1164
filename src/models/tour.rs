//! Tour type: an ordered visiting sequence of matrix indices.

use serde::{Deserialize, Serialize};

/// An ordered sequence of matrix indices with its accumulated distance.
///
/// A closed tour repeats its first index at the end, so for `n` waypoints a
/// closed tour holds `n + 1` entries and an open one `n`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 23.0);
/// assert!(tour.is_closed());
/// assert_eq!(tour.start(), Some(0));
/// assert!(tour.is_hamiltonian(3));
/// assert_eq!(tour.legs().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
    total_distance: f64,
}

impl Tour {
    /// Creates a tour from a node sequence and its total distance.
    pub fn new(nodes: Vec<usize>, total_distance: f64) -> Self {
        Self {
            nodes,
            total_distance,
        }
    }

    /// The visiting order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Number of entries, including a repeated closing index.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Sum of the leg costs, including the closing leg for closed tours.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if the last entry repeats the first.
    ///
    /// A single-entry tour is open.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() >= 2 && self.nodes.first() == self.nodes.last()
    }

    /// Consecutive `(from, to)` index pairs.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if every index in `0..n` appears exactly once, ignoring
    /// the repeated closing index.
    pub fn is_hamiltonian(&self, n: usize) -> bool {
        let body = if self.is_closed() {
            &self.nodes[..self.nodes.len() - 1]
        } else {
            &self.nodes[..]
        };
        if body.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in body {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}
