use pcg_rand::Pcg64;
use rand::SeedableRng;
use rust_mst::generator::RandomConnectedGraph;
use rust_mst::prelude::*;
use std::time::{Duration, Instant};

const NUM_REPEATS: u32 = 5;
const SIZES: [usize; 6] = [10, 100, 1000, 10000, 50000, 100000];
const AVG_DEGREES: [usize; 3] = [2, 8, 32];
const CSV_HEADER: &str = "algo,n,m,ns,ops";

fn benchmark<A: Algorithm>(graph: &Graph) {
    let mut runtime = Duration::ZERO;
    let mut cost = None;
    let mut operations = 0;

    for _ in 0..NUM_REPEATS {
        let start = Instant::now();
        let result = A::find_mst(graph);
        runtime += start.elapsed();

        assert!(result.spans(graph));
        assert!(cost.map_or(true, |c| c == result.total_cost));
        cost = Some(result.total_cost);
        operations = result.total_operations();
    }

    println!(
        "{}",
        csv_row(
            A::LABEL,
            graph,
            runtime.as_nanos() / NUM_REPEATS as u128,
            operations
        )
    );
}

fn csv_row(label: &str, graph: &Graph, nanos: u128, operations: u64) -> String {
    format!(
        "{},{},{},{},{}",
        label,
        graph.vertex_count(),
        graph.number_of_edges(),
        nanos,
        operations
    )
}

fn main() {
    let mut rng = Pcg64::seed_from_u64(0x5eed);

    println!("{}", CSV_HEADER);
    for n in SIZES {
        for degree in AVG_DEGREES {
            let extra_edges = (n * degree / 2).saturating_sub(n - 1);
            let graph = RandomConnectedGraph::new(n, extra_edges, 1..=1_000_000).build(&mut rng);

            benchmark::<Prim>(&graph);
            benchmark::<Kruskal>(&graph);
        }
    }
}
