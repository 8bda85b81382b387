use log::{error, info};
use rust_mst::error::Error;
use rust_mst::graph_reader::read_graphs;
use rust_mst::parameters::{get_and_check_options, Parameters};
use rust_mst::report::{report_tree_shapes, write_csv, write_json};
use rust_mst::runner::run_batch;
use std::io::stdout;
use std::time::Instant;

fn execute(opt: &Parameters) -> Result<(), Error> {
    let graphs = read_graphs(&opt.input)?;
    info!(
        "loaded {} graphs from {}, using {} threads",
        graphs.len(),
        opt.input.display(),
        opt.num_threads
    );

    let start = Instant::now();
    let reports = run_batch(&graphs, opt.num_threads);
    let runtime = start.elapsed();

    if opt.report_tree_shape {
        report_tree_shapes(&mut stdout().lock(), &graphs, &reports)
            .map_err(Error::Stdout)?;
    }

    write_json(&opt.output, &reports)?;
    if let Some(csv) = &opt.csv {
        write_csv(csv, &reports)?;
        info!("summary written to {}", csv.display());
    }

    println!("Results written to {}", opt.output.display());
    println!("runtime_s:{}", runtime.as_secs_f64());

    Ok(())
}

fn main() {
    let opt = get_and_check_options();

    env_logger::Builder::new()
        .filter_level(opt.log_level())
        .parse_default_env()
        .init();

    if let Err(err) = execute(&opt) {
        error!("{}", err);
        std::process::exit(1);
    }
}
