use super::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

/// A value together with the wall-clock time it took to compute.
#[derive(Clone, Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` and measures it with [`Instant`] immediately around the call.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();

    Timed { value, elapsed }
}

pub(crate) fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e3
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Faster {
    Prim,
    Kruskal,
    Tie,
}

impl fmt::Display for Faster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Faster::Prim => Prim::LABEL,
            Faster::Kruskal => Kruskal::LABEL,
            Faster::Tie => "tie",
        })
    }
}

/// Differences between the Prim and the Kruskal run on one graph, always `prim - kruskal`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub costs_match: bool,
    pub cost_difference: Cost,
    pub time_difference_ms: f64,
    pub comparisons_difference: i64,
    pub operations_difference: i64,
    pub faster: Faster,
}

impl Comparison {
    pub fn new(
        prim: &Timed<MstResult<PrimCounters>>,
        kruskal: &Timed<MstResult<KruskalCounters>>,
    ) -> Self {
        let faster = match prim.elapsed.cmp(&kruskal.elapsed) {
            Ordering::Less => Faster::Prim,
            Ordering::Greater => Faster::Kruskal,
            Ordering::Equal => Faster::Tie,
        };

        Self {
            costs_match: prim.value.total_cost == kruskal.value.total_cost,
            cost_difference: prim.value.total_cost - kruskal.value.total_cost,
            time_difference_ms: as_millis(prim.elapsed) - as_millis(kruskal.elapsed),
            comparisons_difference: difference(
                prim.value.counters.comparisons(),
                kruskal.value.counters.comparisons(),
            ),
            operations_difference: difference(
                prim.value.total_operations(),
                kruskal.value.total_operations(),
            ),
            faster,
        }
    }
}

fn difference(a: u64, b: u64) -> i64 {
    a as i64 - b as i64
}

#[cfg(test)]
mod test {
    use super::*;

    fn fixed<T>(value: T, micros: u64) -> Timed<T> {
        Timed {
            value,
            elapsed: Duration::from_micros(micros),
        }
    }

    #[test]
    fn compares_example_graph() {
        let graph = Graph::new(
            4,
            vec![
                Edge::new(0, 1, 1),
                Edge::new(1, 2, 2),
                Edge::new(2, 3, 3),
                Edge::new(0, 3, 4),
            ],
        );

        let prim = fixed(Prim::find_mst(&graph), 1500);
        let kruskal = fixed(Kruskal::find_mst(&graph), 500);
        let cmp = Comparison::new(&prim, &kruskal);

        assert!(cmp.costs_match);
        assert_eq!(cmp.cost_difference, 0);
        assert!((cmp.time_difference_ms - 1.0).abs() < 1e-9);
        assert_eq!(cmp.comparisons_difference, 12 - 3);
        assert_eq!(cmp.operations_difference, 19 - 12);
        assert_eq!(cmp.faster, Faster::Kruskal);
    }

    #[test]
    fn labels() {
        let prim = fixed(MstResult::<PrimCounters>::default(), 7);
        let kruskal = fixed(
            MstResult::<KruskalCounters> {
                total_cost: 3,
                ..Default::default()
            },
            7,
        );
        let cmp = Comparison::new(&prim, &kruskal);

        assert_eq!(cmp.faster, Faster::Tie);
        assert!(!cmp.costs_match);
        assert_eq!(cmp.cost_difference, -3);
        assert_eq!(Faster::Prim.to_string(), "prim");
        assert_eq!(serde_json::to_string(&Faster::Tie).unwrap(), "\"tie\"");
    }

    #[test]
    fn extreme_cost_difference() {
        let prim = fixed(
            MstResult::<PrimCounters> {
                total_cost: 2 * Cost::from(Weight::MAX),
                ..Default::default()
            },
            1,
        );
        let kruskal = fixed(
            MstResult::<KruskalCounters> {
                total_cost: 2 * Cost::from(Weight::MIN),
                ..Default::default()
            },
            2,
        );
        let cmp = Comparison::new(&prim, &kruskal);

        assert!(!cmp.costs_match);
        assert_eq!(
            cmp.cost_difference,
            2 * (Cost::from(Weight::MAX) - Cost::from(Weight::MIN))
        );
    }

    #[test]
    fn timed_measures() {
        let t = timed(|| 40 + 2);
        assert_eq!(t.value, 42);
        assert!(t.elapsed >= Duration::ZERO);
    }
}
