use super::*;
use crate::error::GraphError;
use serde::Serialize;

/// An undirected, weighted connection between two vertices.
///
/// `source` and `destination` are labels only; no algorithm treats them as a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: Node,
    pub destination: Node,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: Node, destination: Node, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the endpoint opposite to `node`. For a self-loop this is `node` itself.
    #[inline]
    pub fn other(&self, node: Node) -> Node {
        if self.source == node {
            self.destination
        } else {
            self.source
        }
    }

    #[inline]
    pub fn touches(&self, node: Node) -> bool {
        self.source == node || self.destination == node
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

/// A weighted undirected graph with vertices `0..vertex_count`.
///
/// Edges keep their insertion order; duplicates and self-loops are stored as given.
/// The graph cannot be modified after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: Node,
    edges: Vec<Edge>,
    node_names: Option<Vec<String>>,
}

impl Graph {
    /// Builds a graph from its parts.
    ///
    /// # Panics
    ///
    /// If an edge has an endpoint outside `0..vertex_count`.
    /// Use [`Graph::try_new`] for input that has not been checked yet.
    pub fn new(vertex_count: Node, edges: Vec<Edge>) -> Self {
        match Self::try_new(vertex_count, edges) {
            Ok(graph) => graph,
            Err(err) => panic!("{}", err),
        }
    }

    pub fn try_new(vertex_count: Node, edges: Vec<Edge>) -> Result<Self, GraphError> {
        if let Some((index, edge)) = edges
            .iter()
            .enumerate()
            .find(|(_, e)| e.source >= vertex_count || e.destination >= vertex_count)
        {
            return Err(GraphError::EndpointOutOfRange {
                index,
                from: edge.source,
                to: edge.destination,
                vertex_count,
            });
        }

        Ok(Self {
            vertex_count,
            edges,
            node_names: None,
        })
    }

    /// Attaches display names, one per vertex.
    pub fn with_node_names(mut self, names: Vec<String>) -> Result<Self, GraphError> {
        if names.len() != self.vertex_count {
            return Err(GraphError::NameCountMismatch {
                vertex_count: self.vertex_count,
                names: names.len(),
            });
        }

        self.node_names = Some(names);
        Ok(self)
    }

    pub fn vertex_count(&self) -> Node {
        self.vertex_count
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn node_names(&self) -> Option<&[String]> {
        self.node_names.as_deref()
    }

    pub fn node_name(&self, node: Node) -> Option<&str> {
        self.node_names
            .as_ref()
            .and_then(|names| names.get(node))
            .map(String::as_str)
    }

    /// A graph without vertices or without edges has an empty spanning forest.
    pub fn is_trivial(&self) -> bool {
        self.vertex_count == 0 || self.edges.is_empty()
    }

    /// Indices into [`Graph::edges`] grouped by incident vertex.
    /// A self-loop is listed once at its vertex.
    pub(crate) fn incidence_lists(&self) -> Vec<Vec<usize>> {
        let mut incident = vec![Vec::new(); self.vertex_count];

        for (index, edge) in self.edges.iter().enumerate() {
            incident[edge.source].push(index);
            if !edge.is_self_loop() {
                incident[edge.destination].push(index);
            }
        }

        incident
    }
}
