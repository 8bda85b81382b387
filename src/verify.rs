//! Structural checks for a set of tree edges.

use super::prelude::*;
use crate::disjoint_set::DisjointSet;

/// Returns `true` if no edge closes a cycle among the edges before it.
pub fn is_acyclic(edges: &[Edge], vertex_count: Node) -> bool {
    let mut sets = DisjointSet::new(vertex_count);

    edges.iter().all(|e| {
        let source_root = sets.find(e.source);
        let destination_root = sets.find(e.destination);
        if source_root == destination_root {
            return false;
        }

        sets.union(source_root, destination_root);
        true
    })
}

/// Returns `true` if the edges connect all `vertex_count` vertices.
pub fn is_connected(edges: &[Edge], vertex_count: Node) -> bool {
    if vertex_count == 0 {
        return true;
    }

    let mut sets = DisjointSet::new(vertex_count);
    for e in edges {
        let source_root = sets.find(e.source);
        let destination_root = sets.find(e.destination);
        if source_root != destination_root {
            sets.union(source_root, destination_root);
        }
    }

    let root = sets.find(0);
    (1..vertex_count).all(|v| sets.find(v) == root)
}
