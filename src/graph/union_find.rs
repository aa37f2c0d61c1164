//! Disjoint-set forest with path compression and union by rank.

/// Tracks connected components under incremental merges.
///
/// # Examples
///
/// ```
/// use u_tour::graph::UnionFind;
///
/// let mut uf = UnionFind::new(3);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(1, 2));
/// assert_eq!(uf.find(0), uf.find(2));
/// assert!(!uf.union(0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the representative of `x`'s set, compressing the path to it.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `u` and `v`.
    ///
    /// The lower-rank root goes under the higher-rank one; on equal ranks
    /// `v`'s root goes under `u`'s and `u`'s rank grows. Returns `false` if
    /// both were already in the same set.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        match self.rank[root_u].cmp(&self.rank[root_v]) {
            std::cmp::Ordering::Greater => self.parent[root_v] = root_u,
            std::cmp::Ordering::Less => self.parent[root_u] = root_v,
            std::cmp::Ordering::Equal => {
                self.parent[root_v] = root_u;
                self.rank[root_u] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// Returns `true` if `u` and `v` are in the same set.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.components(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_chain() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert_eq!(uf.find(0), uf.find(2));
        assert!(!uf.union(0, 2));
        assert_eq!(uf.components(), 1);
    }

    #[test]
    fn test_equal_rank_attaches_under_first() {
        let mut uf = UnionFind::new(2);
        uf.union(0, 1);
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank[0], 1);
        assert_eq!(uf.rank[1], 0);
    }

    #[test]
    fn test_lower_rank_attaches_under_higher() {
        let mut uf = UnionFind::new(3);
        uf.union(1, 2); // root 1, rank 1
        uf.union(0, 1); // root 0 has rank 0 < 1
        assert_eq!(uf.find(0), 1);
        assert_eq!(uf.rank[1], 1);
    }

    #[test]
    fn test_find_is_idempotent_and_compresses() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(0, 2);
        uf.union(4, 0);
        let root = uf.find(3);
        assert_eq!(uf.find(root), root);
        for x in 0..5 {
            let r = uf.find(x);
            assert_eq!(r, root);
            assert_eq!(uf.parent[x], root);
        }
    }

    #[test]
    fn test_disjoint_sets() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(1, 2));
        assert_eq!(uf.components(), 2);
        assert_eq!(uf.len(), 4);
    }
}
