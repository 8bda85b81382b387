use super::prelude::*;
use crate::comparison::{as_millis, timed, Comparison, Timed};
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InputStats {
    pub vertices: Node,
    pub edges: usize,
}

/// A tree edge as written to reports, with display names if the graph has them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderedEdge {
    Named {
        from: String,
        to: String,
        weight: Weight,
    },
    Indexed(Edge),
}

impl RenderedEdge {
    pub fn new(graph: &Graph, edge: &Edge) -> Self {
        match (graph.node_name(edge.source), graph.node_name(edge.destination)) {
            (Some(from), Some(to)) => RenderedEdge::Named {
                from: from.to_owned(),
                to: to.to_owned(),
                weight: edge.weight,
            },
            _ => RenderedEdge::Indexed(*edge),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AlgorithmReport<C> {
    pub mst_edges: Vec<RenderedEdge>,
    pub total_cost: Cost,
    pub operations_count: u64,
    #[serde(flatten)]
    pub counters: C,
    pub execution_time_ms: f64,
    /// `false` if the graph is disconnected and only a partial forest was found.
    pub spans: bool,

    #[serde(skip)]
    pub tree: Vec<Edge>,
}

impl<C: OperationCounters> AlgorithmReport<C> {
    fn new(graph: &Graph, run: &Timed<MstResult<C>>) -> Self {
        let result = &run.value;

        Self {
            mst_edges: result
                .edges
                .iter()
                .map(|e| RenderedEdge::new(graph, e))
                .collect_vec(),
            total_cost: result.total_cost,
            operations_count: result.total_operations(),
            counters: result.counters,
            execution_time_ms: as_millis(run.elapsed),
            spans: result.spans(graph),
            tree: result.edges.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GraphReport {
    pub graph_id: usize,
    pub input_stats: InputStats,
    pub prim: AlgorithmReport<PrimCounters>,
    pub kruskal: AlgorithmReport<KruskalCounters>,
    pub comparison: Comparison,
}

impl GraphReport {
    /// Returns `true` if both engines found a spanning tree but of different cost.
    ///
    /// On a disconnected graph Prim only covers the component of vertex 0, so a cost
    /// difference there is expected and not reported.
    pub fn costs_disagree(&self) -> bool {
        self.prim.spans && self.kruskal.spans && !self.comparison.costs_match
    }
}

/// Runs Prim and then Kruskal on `graph`, timing each call separately.
pub fn run_graph(graph_id: usize, graph: &Graph) -> GraphReport {
    let prim = timed(|| Prim::find_mst(graph));
    let kruskal = timed(|| Kruskal::find_mst(graph));

    let report = GraphReport {
        graph_id,
        input_stats: InputStats {
            vertices: graph.vertex_count(),
            edges: graph.number_of_edges(),
        },
        prim: AlgorithmReport::new(graph, &prim),
        kruskal: AlgorithmReport::new(graph, &kruskal),
        comparison: Comparison::new(&prim, &kruskal),
    };

    debug!(
        "graph {}: {} cost {} ({:.3} ms), {} cost {} ({:.3} ms)",
        graph_id,
        Prim::LABEL,
        report.prim.total_cost,
        report.prim.execution_time_ms,
        Kruskal::LABEL,
        report.kruskal.total_cost,
        report.kruskal.execution_time_ms,
    );

    if !report.kruskal.spans {
        warn!(
            "graph {} is disconnected: {} edges span {} vertices",
            graph_id,
            report.kruskal.tree.len(),
            graph.vertex_count()
        );
    }
    if report.costs_disagree() {
        warn!(
            "graph {}: costs differ by {}",
            graph_id, report.comparison.cost_difference
        );
    }

    report
}

/// Runs every graph, distributing them round-robin over `num_threads` threads.
///
/// Reports are returned in input order with 1-based graph ids, independent of the thread count.
pub fn run_batch(graphs: &[Graph], num_threads: usize) -> Vec<GraphReport> {
    let num_threads = num_threads.max(1).min(graphs.len().max(1));

    if num_threads == 1 {
        return graphs
            .iter()
            .enumerate()
            .map(|(index, graph)| run_graph(index + 1, graph))
            .collect_vec();
    }

    let mut reports = crossbeam::thread::scope(|s| {
        let handles = (0..num_threads)
            .map(|rank| {
                s.spawn(move |_| {
                    graphs
                        .iter()
                        .enumerate()
                        .skip(rank)
                        .step_by(num_threads)
                        .map(|(index, graph)| run_graph(index + 1, graph))
                        .collect_vec()
                })
            })
            .collect_vec();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect_vec()
    })
    .unwrap();

    reports.sort_unstable_by_key(|r| r.graph_id);
    reports
}
