use super::prelude::*;
use rand::Rng;
use std::ops::RangeInclusive;

/// Random connected graphs: a random recursive tree (every node `v > 0` attaches to a
/// uniform node `u < v`) followed by `extra_edges` uniform edges, which may be self-loops
/// or duplicates.
///
/// # Example
/// ```
/// use pcg_rand::Pcg64;
/// use rand::SeedableRng;
/// use rust_mst::generator::RandomConnectedGraph;
///
/// let mut rng = Pcg64::seed_from_u64(1);
/// let graph = RandomConnectedGraph::new(10, 5, 1..=100).build(&mut rng);
///
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.number_of_edges(), 14);
/// ```
#[derive(Clone, Debug)]
pub struct RandomConnectedGraph {
    nodes: Node,
    extra_edges: usize,
    weights: RangeInclusive<Weight>,
}

impl RandomConnectedGraph {
    pub fn new(nodes: Node, extra_edges: usize, weights: RangeInclusive<Weight>) -> Self {
        assert!(!weights.is_empty());
        Self {
            nodes,
            extra_edges,
            weights,
        }
    }

    pub fn number_of_edges(&self) -> usize {
        self.nodes.saturating_sub(1) + self.extra_edges
    }

    pub fn run(&self, rng: &mut impl Rng, writer: &mut impl EdgeWriter) {
        for v in 1..self.nodes {
            let u = rng.gen_range(0..v);
            writer.add_edge(Edge::new(u, v, rng.gen_range(self.weights.clone())));
        }

        if self.nodes == 0 {
            return;
        }

        for _ in 0..self.extra_edges {
            let u = rng.gen_range(0..self.nodes);
            let v = rng.gen_range(0..self.nodes);
            writer.add_edge(Edge::new(u, v, rng.gen_range(self.weights.clone())));
        }
    }

    pub fn build(&self, rng: &mut impl Rng) -> Graph {
        let mut edges = Vec::with_capacity(self.number_of_edges());
        self.run(rng, &mut edges);
        Graph::new(self.nodes, edges)
    }
}
