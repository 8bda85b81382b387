//! Loads graphs from JSON documents.
//!
//! A document is either `{"graphs": [...]}` or a single graph. Each graph is given either by
//! name or by index:
//!
//! ```json
//! { "nodes": ["A", "B"], "edges": [{ "from": "A", "to": "B", "weight": 1 }] }
//! { "vertices": 2, "edges": [{ "source": 0, "destination": 1, "weight": 1 }] }
//! ```

use super::prelude::*;
use fxhash::FxHashMap;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Batch { graphs: Vec<GraphRecord> },
    Single(GraphRecord),
}

#[derive(Debug, Default, Deserialize)]
struct GraphRecord {
    #[serde(default)]
    nodes: Option<Vec<String>>,
    #[serde(default)]
    vertices: Option<Node>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EdgeRecord {
    Named {
        from: String,
        to: String,
        #[serde(default)]
        weight: Weight,
    },
    Indexed {
        source: Node,
        destination: Node,
        #[serde(default)]
        weight: Weight,
    },
}

/// Reads every graph of the document at `path`.
pub fn read_graphs(path: impl AsRef<Path>) -> Result<Vec<Graph>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    let graphs = parse_graphs_from_reader(BufReader::new(file))?;

    debug!("read {} graphs from {}", graphs.len(), path.display());
    Ok(graphs)
}

pub fn parse_graphs_from_reader(reader: impl Read) -> Result<Vec<Graph>, Error> {
    into_graphs(serde_json::from_reader(reader)?)
}

pub fn parse_graphs(text: &str) -> Result<Vec<Graph>, Error> {
    into_graphs(serde_json::from_str(text)?)
}

fn into_graphs(document: Document) -> Result<Vec<Graph>, Error> {
    let records = match document {
        Document::Batch { graphs } => graphs,
        Document::Single(record) => vec![record],
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record.into_graph().map_err(|source| Error::Graph {
                graph_id: index + 1,
                source,
            })
        })
        .collect()
}

impl GraphRecord {
    fn into_graph(self) -> Result<Graph, GraphError> {
        match self.nodes {
            Some(names) if !names.is_empty() => {
                let edges = {
                    let table = index_names(&names)?;
                    resolve_edges(self.edges, Some(&table))?
                };
                Graph::try_new(names.len(), edges)?.with_node_names(names)
            }
            _ => {
                let edges = resolve_edges(self.edges, None)?;
                Graph::try_new(self.vertices.unwrap_or(0), edges)
            }
        }
    }
}

fn index_names(names: &[String]) -> Result<FxHashMap<&str, Node>, GraphError> {
    let mut table = FxHashMap::default();
    table.reserve(names.len());

    for (index, name) in names.iter().enumerate() {
        if table.insert(name.as_str(), index).is_some() {
            return Err(GraphError::DuplicateNode(name.clone()));
        }
    }

    Ok(table)
}

fn resolve_edges(
    records: Vec<EdgeRecord>,
    table: Option<&FxHashMap<&str, Node>>,
) -> Result<Vec<Edge>, GraphError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match record {
            EdgeRecord::Indexed {
                source,
                destination,
                weight,
            } => Ok(Edge::new(source, destination, weight)),
            EdgeRecord::Named { from, to, weight } => {
                let table = table.ok_or(GraphError::MissingNodeTable { index })?;
                let lookup = |name: String| {
                    table
                        .get(name.as_str())
                        .copied()
                        .ok_or(GraphError::UnknownNode { index, name })
                };
                Ok(Edge::new(lookup(from)?, lookup(to)?, weight))
            }
        })
        .collect()
}
