pub mod algorithm;
pub mod comparison;
pub mod disjoint_set;
pub mod edge_writer;
pub mod error;
pub mod generator;
pub mod graph;
pub mod graph_reader;
pub mod mst_result;
pub mod parameters;
pub mod report;
pub mod runner;
pub mod verify;

pub type Node = usize;
pub type Weight = i64;
/// Sum of edge weights; wide enough that no tree over `Weight` edges can overflow it.
pub type Cost = i128;

pub mod prelude {
    use super::*;

    pub use super::{Cost, Node, Weight};
    pub use algorithm::{algo_kruskal::Kruskal, algo_prim::Prim, Algorithm};
    pub use edge_writer::EdgeWriter;
    pub use error::{Error, GraphError};
    pub use graph::{Edge, Graph};
    pub use mst_result::{KruskalCounters, MstResult, OperationCounters, PrimCounters};
}
