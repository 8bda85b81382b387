use super::prelude::*;
use serde::Serialize;
use std::fmt::Debug;

/// Primitive operation counts reported by an engine.
pub trait OperationCounters: Copy + Default + Debug + Eq + Serialize + Send {
    fn comparisons(&self) -> u64;

    /// Sum of all counters of this engine.
    fn total_operations(&self) -> u64;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KruskalCounters {
    /// Root equality checks, one per examined edge.
    pub comparisons: u64,
    pub find_calls: u64,
    pub union_calls: u64,
}

impl OperationCounters for KruskalCounters {
    fn comparisons(&self) -> u64 {
        self.comparisons
    }

    fn total_operations(&self) -> u64 {
        self.comparisons + self.find_calls + self.union_calls
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrimCounters {
    /// Visited checks.
    pub comparisons: u64,
    pub queue_adds: u64,
    pub polls: u64,
}

impl OperationCounters for PrimCounters {
    fn comparisons(&self) -> u64 {
        self.comparisons
    }

    fn total_operations(&self) -> u64 {
        self.comparisons + self.queue_adds + self.polls
    }
}

/// The spanning tree (or forest) found by one engine run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MstResult<C> {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    pub total_cost: Cost,
    pub counters: C,
}

impl<C: OperationCounters> MstResult<C> {
    pub fn total_operations(&self) -> u64 {
        self.counters.total_operations()
    }

    /// Returns `true` if the edges form a spanning tree of `graph`, i.e. no component
    /// was left out.
    pub fn spans(&self, graph: &Graph) -> bool {
        graph.vertex_count() == 0 || self.edges.len() + 1 == graph.vertex_count()
    }
}
