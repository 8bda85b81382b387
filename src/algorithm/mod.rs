use super::prelude::*;

pub mod algo_kruskal;
pub mod algo_prim;

/// A minimum spanning tree engine.
///
/// Each call owns all of its working state, so repeated runs on the same graph return
/// identical results and distinct graphs may be processed concurrently.
pub trait Algorithm {
    const LABEL: &'static str;
    type Counters: OperationCounters;

    /// Computes a minimum spanning tree of `graph`, or a partial forest if it is disconnected.
    fn find_mst(graph: &Graph) -> MstResult<Self::Counters>;
}
