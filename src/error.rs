use super::Node;
use std::path::PathBuf;
use thiserror::Error;

/// Structural problems of a single graph description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {index} ({from} - {to}) has an endpoint outside 0..{vertex_count}")]
    EndpointOutOfRange {
        index: usize,
        from: Node,
        to: Node,
        vertex_count: Node,
    },

    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),

    #[error("edge {index} references unknown node `{name}`")]
    UnknownNode { index: usize, name: String },

    #[error("edge {index} uses node names but the graph has no `nodes` table")]
    MissingNodeTable { index: usize },

    #[error("expected {vertex_count} node names, got {names}")]
    NameCountMismatch { vertex_count: Node, names: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("malformed graph document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("graph {graph_id}: {source}")]
    Graph {
        graph_id: usize,
        #[source]
        source: GraphError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
