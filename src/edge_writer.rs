use super::*;
use crate::graph::Edge;

/// Sink for edges produced one at a time, e.g. by a graph generator.
pub trait EdgeWriter {
    fn add_edge(&mut self, edge: Edge);
}

impl EdgeWriter for Vec<Edge> {
    fn add_edge(&mut self, edge: Edge) {
        self.push(edge);
    }
}

/// Collects the vertex degrees of a spanning tree or forest edge by edge.
#[derive(Clone, Debug)]
pub struct TreeDegrees {
    number_of_edges: usize,
    degrees: Vec<usize>,
}

/// How a spanning tree or forest is shaped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TreeShape {
    pub edges: usize,
    /// Vertices of degree one.
    pub leaves: usize,
    pub max_degree: usize,
    /// Vertices the tree never reached.
    pub isolated: usize,
}

impl TreeDegrees {
    pub fn new(number_of_nodes: Node) -> Self {
        Self {
            number_of_edges: 0,
            degrees: vec![0; number_of_nodes],
        }
    }

    pub fn from_edges<'a>(number_of_nodes: Node, edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut tree = Self::new(number_of_nodes);
        for &edge in edges {
            tree.add_edge(edge);
        }
        tree
    }

    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    pub fn shape(&self) -> TreeShape {
        let count = |degree| self.degrees.iter().filter(|&&d| d == degree).count();

        TreeShape {
            edges: self.number_of_edges,
            leaves: count(1),
            max_degree: self.degrees.iter().copied().max().unwrap_or(0),
            isolated: count(0),
        }
    }
}

impl EdgeWriter for TreeDegrees {
    fn add_edge(&mut self, edge: Edge) {
        self.number_of_edges += 1;
        self.degrees[edge.source] += 1;
        self.degrees[edge.destination] += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn star() {
        let edges = [Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(3, 0, 1)];
        let tree = TreeDegrees::from_edges(4, &edges);

        assert_eq!(tree.degrees(), &[3, 1, 1, 1]);
        assert_eq!(
            tree.shape(),
            TreeShape {
                edges: 3,
                leaves: 3,
                max_degree: 3,
                isolated: 0,
            }
        );
    }

    #[test]
    fn path_with_unreached_vertices() {
        let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 4)];
        let shape = TreeDegrees::from_edges(5, &edges).shape();

        assert_eq!(shape.leaves, 2);
        assert_eq!(shape.max_degree, 2);
        assert_eq!(shape.isolated, 2);
    }

    #[test]
    fn no_vertices() {
        assert_eq!(TreeDegrees::new(0).shape(), TreeShape::default());
    }
}
