//! Benchmark execution, verification and CSV export.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::math::dot_product::bench::{compare, CompareResult};
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::timer::measure_variants;

/// All variant results for one input size
#[derive(Clone, Debug)]
pub struct SizeResults {
    pub size: usize,
    pub results: Vec<BenchmarkResult>,
}

/// Measure every variant of `algo` at each configured size.
///
/// Inputs for a given size are the same for all variants. The sample
/// schedule is shuffled with a seed derived from the input seed.
pub fn run_algorithm(algo: &dyn AlgorithmRunner, config: &BenchConfig) -> Result<Vec<SizeResults>> {
    config.validate()?;
    let seed = config.resolved_seed();
    let timing = config.timing();
    info!(algorithm = algo.name(), seed, "running benchmarks");

    let mut all = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let variants = algo.variants(size, seed);
        debug!(size, variants = variants.len(), "measuring");
        let mut results = measure_variants(variants, &timing, seed.wrapping_add(size as u64));
        crate::utils::tui::sort_variants(&mut results);
        all.push(SizeResults { size, results });
    }

    Ok(all)
}

/// Run the verification of every registered algorithm, stopping at the first failure
pub fn verify_all(registry: &AlgorithmRegistry) -> Result<()> {
    for algo in registry.all() {
        match algo.verify() {
            Ok(()) => info!(algorithm = algo.name(), "verified"),
            Err(e) => {
                warn!(algorithm = algo.name(), error = %e, "verification failed");
                return Err(e);
            }
        }
    }
    Ok(())
}

/// One call per dot product variant over `n` values in [0, 1)
pub fn run_compare(n: usize, seed: u64) -> Vec<CompareResult> {
    info!(n, seed, "comparing dot product variants");
    compare(n, seed)
}

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData<'a> {
    pub algo_name: &'a str,
    pub input_size: usize,
    pub result: &'a BenchmarkResult,
}

/// Flatten per-size results into CSV rows
pub fn raw_rows<'a>(algo_name: &'a str, sizes: &'a [SizeResults]) -> Vec<RawTimingData<'a>> {
    sizes
        .iter()
        .flat_map(|s| {
            s.results.iter().map(move |result| RawTimingData {
                algo_name,
                input_size: s.size,
                result,
            })
        })
        .collect()
}

/// Export timing data to CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "algorithm",
        "variant",
        "compiler",
        "input_size",
        "avg_time_ns",
        "median_time_ns",
        "min_time_ns",
        "max_time_ns",
        "std_dev_ns",
        "samples",
        "result",
    ])?;

    for entry in data {
        let r = entry.result;
        let compiler = if r.name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writer.write_record([
            entry.algo_name.to_string(),
            r.name.clone(),
            compiler.to_string(),
            entry.input_size.to_string(),
            r.avg_time.as_nanos().to_string(),
            r.median_time.as_nanos().to_string(),
            r.min_time.as_nanos().to_string(),
            r.max_time.as_nanos().to_string(),
            r.std_dev.as_nanos().to_string(),
            r.samples.to_string(),
            r.result_sample.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    info!(path = %path.display(), rows = data.len(), "wrote CSV");
    Ok(())
}
