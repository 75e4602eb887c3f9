//! Tribench - compare structured and string-encoded RDF triple representations
//!
//! Usage:
//!   tribench 3                      run test 3 (and the tests it depends on)
//!   tribench 8 --triples 100000     run test 8 on a smaller dataset
//!   tribench --list                 list the registered tests
//!
//! Each executed test prints `<id>. <name>: <seconds>s <megabytes>MB` to stdout.
//! Logs go to stderr and follow `RUST_LOG` (default `info`).

use clap::Parser;
use std::process::ExitCode;
use tribench::benchmarks::memory_tracker::TrackingAllocator;
use tribench::benchmarks::runner::{BenchContext, OutputFormat, Runner};
use tribench::benchmarks::suite::{register_standard_suite, standard_tests};
use tribench::config::BenchConfig;
use tribench::Error;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[derive(Parser, Debug)]
#[command(name = "tribench")]
#[command(about = "Compare structured and string-encoded in-memory RDF triples")]
struct Args {
    /// Id of the test to run
    test_id: Option<u32>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Number of generated triples
    #[arg(short, long)]
    triples: Option<usize>,

    /// Number of lookups per find test
    #[arg(short, long)]
    find_count: Option<usize>,

    /// Initial PRNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print results as JSON lines
    #[arg(long)]
    json: bool,

    /// List the registered tests and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn bench_config(&self) -> tribench::Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_json_file(path)?,
            None => BenchConfig::default(),
        };
        if let Some(triples) = self.triples {
            config.triple_count = triples;
        }
        if let Some(find_count) = self.find_count {
            config.find_count = find_count;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(args: &Args) -> tribench::Result<()> {
    if args.list {
        for case in standard_tests() {
            println!("{}. {}", case.id, case.name);
        }
        return Ok(());
    }

    let config = args.bench_config()?;
    // Reject an unknown selector before generating the dataset.
    if let Some(id) = args.test_id {
        if !standard_tests().iter().any(|case| case.id == id) {
            return Err(Error::UnknownTest(id));
        }
    }
    log::info!(
        "Generating {} triples (seed {}, {} finds per query test)",
        config.triple_count,
        config.seed,
        config.find_count
    );
    let context = BenchContext::new(config)?;

    let format = if args.json { OutputFormat::Json } else { OutputFormat::Text };
    let mut runner = Runner::stdout(context, args.test_id).with_format(format);
    register_standard_suite(&mut runner)?;
    runner.finish()?;

    if args.test_id.is_none() {
        log::info!("No test selected, pass a test id (see --list)");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
