use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rust-mst",
    about = "Computes minimum spanning trees with Prim and Kruskal and compares both runs"
)]
pub struct Parameters {
    /// JSON document with a single graph or `{"graphs": [...]}`
    #[structopt(short = "i", long, parse(from_os_str), default_value = "data/input.json")]
    pub input: PathBuf,

    /// Where the JSON results are written
    #[structopt(short = "o", long, parse(from_os_str), default_value = "data/output.json")]
    pub output: PathBuf,

    /// Also write a CSV summary with one row per graph
    #[structopt(short = "c", long, parse(from_os_str))]
    pub csv: Option<PathBuf>,

    /// Number of threads processing graphs; 0 uses all CPUs
    #[structopt(short = "t", long, default_value = "1")]
    pub num_threads: usize,

    /// Print edges, leaves, maximum degree and unreached vertices of every tree
    #[structopt(short = "r", long)]
    pub report_tree_shape: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[structopt(short = "v", long, parse(from_occurrences))]
    pub verbose: u8,
}

impl Parameters {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn get_and_check_options() -> Parameters {
    check_options(Parameters::from_args())
}

fn check_options(mut opt: Parameters) -> Parameters {
    if opt.num_threads == 0 {
        opt.num_threads = num_cpus::get();
    }
    assert!(opt.num_threads > 0);

    assert_ne!(opt.input, opt.output, "refusing to overwrite the input file");

    opt
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Parameters {
        check_options(Parameters::from_iter(
            std::iter::once("rust-mst").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn defaults() {
        let opt = parse(&[]);

        assert_eq!(opt.input, PathBuf::from("data/input.json"));
        assert_eq!(opt.output, PathBuf::from("data/output.json"));
        assert_eq!(opt.csv, None);
        assert_eq!(opt.num_threads, 1);
        assert!(!opt.report_tree_shape);
        assert_eq!(opt.log_level(), LevelFilter::Info);
    }

    #[test]
    fn flags() {
        let opt = parse(&["-i", "in.json", "-o", "out.json", "-c", "s.csv", "-t", "0", "-r", "-vv"]);

        assert_eq!(opt.input, PathBuf::from("in.json"));
        assert_eq!(opt.csv, Some(PathBuf::from("s.csv")));
        assert_eq!(opt.num_threads, num_cpus::get());
        assert!(opt.report_tree_shape);
        assert_eq!(opt.log_level(), LevelFilter::Trace);
    }

    #[test]
    #[should_panic]
    fn same_input_and_output() {
        parse(&["-i", "x.json", "-o", "x.json"]);
    }
}
