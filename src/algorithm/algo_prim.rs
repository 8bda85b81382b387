use super::*;
use bit_vec::BitVec;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Prim's algorithm: grow a single tree from vertex 0, always taking the lightest edge of
/// the frontier.
///
/// Frontier edges whose endpoints both became visited after they were pushed stay in the
/// heap and are dropped when polled, hence `polls` may exceed the number of tree edges.
///
/// `comparisons` counts visited checks: one or two per polled edge and one per edge in the
/// incidence list of each newly added vertex. The whole edge list is never rescanned, so the
/// count grows with the degrees of the tree vertices rather than with `V * E`.
pub struct Prim;

const START: Node = 0;

/// Min-heap of edge indices keyed by weight; equal weights come out in push order.
struct Frontier {
    heap: BinaryHeap<Reverse<(Weight, u64, usize)>>,
    pushed: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    fn push(&mut self, weight: Weight, edge_index: usize) {
        self.heap.push(Reverse((weight, self.pushed, edge_index)));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, _, index))| index)
    }
}

impl Algorithm for Prim {
    const LABEL: &'static str = "prim";
    type Counters = PrimCounters;

    fn find_mst(graph: &Graph) -> MstResult<PrimCounters> {
        if graph.is_trivial() {
            return MstResult::default();
        }

        let tree_size = graph.vertex_count() - 1;
        let edges = graph.edges();
        let incident = graph.incidence_lists();

        let mut visited = BitVec::from_elem(graph.vertex_count(), false);
        let mut frontier = Frontier::new();
        let mut counters = PrimCounters::default();
        let mut tree = Vec::with_capacity(tree_size);
        let mut total_cost: Cost = 0;

        visited.set(START, true);
        for &index in &incident[START] {
            frontier.push(edges[index].weight, index);
            counters.queue_adds += 1;
        }

        while tree.len() < tree_size {
            let index = match frontier.pop() {
                Some(index) => index,
                None => break,
            };
            counters.polls += 1;

            let edge = edges[index];

            counters.comparisons += 1;
            let next = if !visited[edge.source] {
                edge.source
            } else {
                counters.comparisons += 1;
                if visited[edge.destination] {
                    continue;
                }
                edge.destination
            };

            visited.set(next, true);
            total_cost += Cost::from(edge.weight);
            tree.push(edge);

            for &index in &incident[next] {
                counters.comparisons += 1;
                if !visited[edges[index].other(next)] {
                    frontier.push(edges[index].weight, index);
                    counters.queue_adds += 1;
                }
            }
        }

        MstResult {
            edges: tree,
            total_cost,
            counters,
        }
    }
}
