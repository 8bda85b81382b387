use super::prelude::*;
use crate::edge_writer::TreeDegrees;
use crate::runner::GraphReport;
use itertools::Itertools;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct ResultsDocument<'a> {
    results: &'a [GraphReport],
}

const CSV_HEADER: [&str; 11] = [
    "graph_id",
    "vertices",
    "edges",
    "prim_cost",
    "kruskal_cost",
    "costs_match",
    "prim_ms",
    "kruskal_ms",
    "prim_operations",
    "kruskal_operations",
    "faster",
];

fn create(path: &Path) -> Result<BufWriter<File>, Error> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|err| Error::io(path, err))
}

/// Writes `{"results": [...]}` to `path`.
pub fn write_json(path: impl AsRef<Path>, reports: &[GraphReport]) -> Result<(), Error> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    write_json_to(&mut writer, reports)?;
    writer.flush().map_err(|err| Error::io(path, err))
}

pub fn write_json_to(writer: impl Write, reports: &[GraphReport]) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, &ResultsDocument { results: reports })?;
    Ok(())
}

/// Writes one summary row per graph to `path`.
pub fn write_csv(path: impl AsRef<Path>, reports: &[GraphReport]) -> Result<(), Error> {
    let path = path.as_ref();
    let mut writer = create(path)?;

    write_csv_to(&mut writer, reports)
        .and_then(|_| writer.flush())
        .map_err(|err| Error::io(path, err))
}

pub fn write_csv_to(writer: &mut impl Write, reports: &[GraphReport]) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER.iter().join(","))?;

    for r in reports {
        writeln!(
            writer,
            "{},{},{},{},{},{},{:.6},{:.6},{},{},{}",
            r.graph_id,
            r.input_stats.vertices,
            r.input_stats.edges,
            r.prim.total_cost,
            r.kruskal.total_cost,
            r.comparison.costs_match,
            r.prim.execution_time_ms,
            r.kruskal.execution_time_ms,
            r.prim.operations_count,
            r.kruskal.operations_count,
            r.comparison.faster
        )?;
    }

    Ok(())
}

const SHAPE_HEADER: [&str; 6] = ["graph_id", "algo", "edges", "leaves", "max_degree", "isolated"];

/// Prints one CSV row per graph and engine describing the shape of the tree found.
pub fn report_tree_shapes(
    writer: &mut impl Write,
    graphs: &[Graph],
    reports: &[GraphReport],
) -> std::io::Result<()> {
    writeln!(writer, "{}", SHAPE_HEADER.iter().join(","))?;

    for (graph, report) in graphs.iter().zip(reports) {
        for (label, tree) in [
            (Prim::LABEL, &report.prim.tree),
            (Kruskal::LABEL, &report.kruskal.tree),
        ] {
            let shape = TreeDegrees::from_edges(graph.vertex_count(), tree).shape();
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                report.graph_id, label, shape.edges, shape.leaves, shape.max_degree, shape.isolated
            )?;
        }
    }

    Ok(())
}
