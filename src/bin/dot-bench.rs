//! CLI for verifying and benchmarking the dot product variants.
//!
//! Usage:
//!   dot-bench                         # Benchmark all algorithms
//!   dot-bench run dot_product --sizes 128,4096 --seed 7
//!   dot-bench list                    # List algorithms and variants
//!   dot-bench verify                  # Check variants against the reference
//!   dot-bench compare --n 1000000     # One call per variant, (answer, seconds)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dot_bench::config::{BenchConfig, DEFAULT_COMPARE_LEN};
use dot_bench::registry::build_registry;
use dot_bench::utils::time_seed;
use dot_bench::{tui, BenchError};

#[derive(Parser, Debug)]
#[command(name = "dot-bench", version, about = "Verify and benchmark dot product variants")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Benchmark one algorithm, or all of them
    Run(RunArgs),
    /// List available algorithms
    List,
    /// Verify every variant against its reference
    Verify,
    /// Call each dot product variant once and print (answer, seconds)
    Compare {
        /// Vector length
        #[arg(long, default_value_t = DEFAULT_COMPARE_LEN)]
        n: usize,
        /// Random seed for the inputs (default: time-based)
        #[arg(long, env = "DOT_BENCH_SEED")]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Name of a specific algorithm to run (omit for all)
    algorithm: Option<String>,
    /// Comma-separated vector sizes (default: 64,256,1024,4096,16384)
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,
    /// Number of measurement runs per variant
    #[arg(long, short = 'r')]
    runs: Option<usize>,
    /// Number of warmup calls per variant
    #[arg(long)]
    warmup: Option<usize>,
    /// Random seed for reproducible inputs (default: time-based)
    #[arg(long, env = "DOT_BENCH_SEED")]
    seed: Option<u64>,
    /// Export raw timings to CSV
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl RunArgs {
    fn to_config(&self) -> BenchConfig {
        let defaults = BenchConfig::default();
        BenchConfig {
            sizes: self.sizes.clone().unwrap_or(defaults.sizes),
            runs_per_variant: self.runs.unwrap_or(defaults.runs_per_variant),
            warmup_iterations: self.warmup.unwrap_or(defaults.warmup_iterations),
            seed: self.seed,
            csv_path: self.csv.clone(),
        }
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let registry = build_registry();
    let mut config = args.to_config();
    config.validate()?;
    // Pin the seed once so every algorithm sees the same inputs.
    config.seed = Some(config.resolved_seed());

    tui::print_header();

    match &args.algorithm {
        Some(name) => {
            let algo = registry
                .find(name)
                .ok_or_else(|| BenchError::UnknownAlgorithm(name.clone()))
                .with_context(|| format!("available: {:?}", registry.list_names()))?;
            tui::run_and_display(algo, &config)?;
        }
        None => {
            for algo in registry.all() {
                tui::run_and_display(algo.as_ref(), &config)?;
            }
        }
    }

    println!("Note: Speedup is relative to the first variant ('original').");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dot_bench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Run(RunArgs::default())) {
        Command::Run(args) => run(&args)?,
        Command::List => tui::print_available_algorithms(&build_registry()),
        Command::Verify => {
            dot_bench::verify_all(&build_registry())?;
            println!("All variants match their reference.");
        }
        Command::Compare { n, seed } => {
            let seed = seed.unwrap_or_else(time_seed);
            let results = dot_bench::run_compare(n, seed);
            tui::print_compare(&results);
            info!(n, seed, "comparison done");
        }
    }

    Ok(())
}
