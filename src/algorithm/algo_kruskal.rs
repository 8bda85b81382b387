use super::*;
use crate::disjoint_set::DisjointSet;

/// Kruskal's algorithm: scan the edges by ascending weight and keep every edge that joins
/// two different components.
///
/// The sort is stable, so equal weights are tried in insertion order.
pub struct Kruskal;

impl Algorithm for Kruskal {
    const LABEL: &'static str = "kruskal";
    type Counters = KruskalCounters;

    fn find_mst(graph: &Graph) -> MstResult<KruskalCounters> {
        if graph.is_trivial() {
            return MstResult::default();
        }

        let tree_size = graph.vertex_count() - 1;

        let mut edges = graph.edges().to_vec();
        edges.sort_by_key(|e| e.weight);

        let mut components = DisjointSet::new(graph.vertex_count());
        let mut counters = KruskalCounters::default();
        let mut tree = Vec::with_capacity(tree_size);
        let mut total_cost: Cost = 0;

        for edge in edges {
            let source_root = components.find(edge.source);
            let destination_root = components.find(edge.destination);
            counters.find_calls += 2;
            counters.comparisons += 1;

            if source_root != destination_root {
                components.union(source_root, destination_root);
                counters.union_calls += 1;

                total_cost += Cost::from(edge.weight);
                tree.push(edge);
            }

            if tree.len() == tree_size {
                break;
            }
        }

        MstResult {
            edges: tree,
            total_cost,
            counters,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn counts_operations() {
        let graph = Graph::new(
            4,
            vec![
                Edge::new(0, 3, 4),
                Edge::new(2, 3, 3),
                Edge::new(1, 2, 2),
                Edge::new(0, 1, 1),
            ],
        );

        let result = Kruskal::find_mst(&graph);

        assert_eq!(
            result.edges,
            vec![Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(2, 3, 3)]
        );
        assert_eq!(result.total_cost, 6);
        assert_eq!(
            result.counters,
            KruskalCounters {
                comparisons: 3,
                find_calls: 6,
                union_calls: 3,
            }
        );
        assert_eq!(result.total_operations(), 12);
    }

    #[test]
    fn skips_cycle_edges() {
        // the triangle's heaviest edge is examined but rejected before 2-3 completes the tree
        let graph = Graph::new(
            4,
            vec![
                Edge::new(0, 1, 1),
                Edge::new(1, 2, 1),
                Edge::new(0, 2, 2),
                Edge::new(2, 3, 5),
            ],
        );

        let result = Kruskal::find_mst(&graph);

        assert_eq!(result.total_cost, 7);
        assert_eq!(result.edges.len(), 3);
        assert_eq!(result.counters.comparisons, 4);
        assert_eq!(result.counters.find_calls, 8);
        assert_eq!(result.counters.union_calls, 3);
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let graph = Graph::new(
            3,
            vec![Edge::new(1, 2, 7), Edge::new(0, 1, 7), Edge::new(0, 2, 7)],
        );

        let result = Kruskal::find_mst(&graph);

        assert_eq!(result.edges, vec![Edge::new(1, 2, 7), Edge::new(0, 1, 7)]);
        assert_eq!(result.counters.comparisons, 2);
    }

    #[test]
    fn self_loops_and_duplicates() {
        let graph = Graph::new(
            2,
            vec![
                Edge::new(0, 0, -3),
                Edge::new(1, 0, 2),
                Edge::new(0, 1, 2),
            ],
        );

        let result = Kruskal::find_mst(&graph);

        assert_eq!(result.edges, vec![Edge::new(1, 0, 2)]);
        assert_eq!(result.total_cost, 2);
        assert_eq!(result.counters.comparisons, 2);
        assert_eq!(result.counters.union_calls, 1);
    }

    #[test]
    fn disconnected_graph_exhausts_edges() {
        let graph = Graph::new(5, vec![Edge::new(3, 4, 1), Edge::new(0, 1, 10)]);

        let result = Kruskal::find_mst(&graph);

        assert_eq!(result.edges.len(), 2);
        assert_eq!(result.total_cost, 11);
        assert_eq!(
            result.counters,
            KruskalCounters {
                comparisons: 2,
                find_calls: 4,
                union_calls: 2,
            }
        );
    }
}
