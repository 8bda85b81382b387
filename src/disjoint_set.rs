//! A [disjoint-sets/union-find] structure over the vertices `0..n` of a graph.
//!
//! Sets are represented as upside down trees where each element stores the index of its
//! parent. `find` compresses the path it walks so that every visited element points
//! directly at the root afterwards. There is no balancing by rank or size: `union` always
//! hangs the second root below the first one.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure

use super::Node;

#[derive(Clone, Debug)]
pub struct DisjointSet {
    /// The parent of each element in its set's tree; roots are their own parent.
    parent: Vec<Node>,
}

impl DisjointSet {
    /// Constructs `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Gives the representative of the set that `node` belongs to.
    ///
    /// The first pass walks up to the root, the second pass rewrites the parent of each
    /// element on the way to point at that root. Long chains are handled without recursion.
    ///
    /// # Panics
    ///
    /// If `node` is out of bounds.
    pub fn find(&mut self, node: Node) -> Node {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Joins the sets rooted at `first_root` and `second_root` by making the first root the
    /// parent of the second.
    ///
    /// Both arguments must be roots as returned by [`DisjointSet::find`].
    ///
    /// # Panics
    ///
    /// If either root is out of bounds.
    pub fn union(&mut self, first_root: Node, second_root: Node) {
        debug_assert_eq!(self.parent[first_root], first_root);
        debug_assert_eq!(self.parent[second_root], second_root);

        self.parent[second_root] = first_root;
    }

    /// Returns `true` if `first` and `second` are in the same set.
    pub fn same_set(&mut self, first: Node, second: Node) -> bool {
        self.find(first) == self.find(second)
    }
}
