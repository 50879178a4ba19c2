//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use terminal_size::{terminal_size, Width};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::math::dot_product::bench::CompareResult;
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::format_measurement;
use crate::utils::runner::{self, SizeResults};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

fn is_c_variant(name: &str) -> bool {
    name.starts_with("c-") || name.starts_with("c_")
}

/// Sort priority: original (0), Rust (1), C (2), SIMD (3)
fn variant_sort_key(result: &BenchmarkResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "original" {
        (0, String::new())
    } else if is_c_variant(&name) {
        (2, name)
    } else if name.contains("sse") || name.contains("avx") || name.contains("neon") {
        (3, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then grouped by kind
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

fn display_name(name: &str) -> String {
    match crate::utils::C_COMPILER_NAME {
        Some(c) if is_c_variant(name) => format!("{} ({})", name, c),
        _ => name.to_string(),
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size.
///
/// Speedup and relative error are measured against the first row.
pub fn print_results_table(size_results: &SizeResults) {
    let results = &size_results.results;
    let Some(baseline) = results.first() else {
        return;
    };

    let fixed_width = 72;
    let variant_col_width = get_term_width().saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = baseline.avg_time.as_nanos() as f64;

    println!("  Size: {} ({} runs)", size_results.size, baseline.samples);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };
        let cv = if avg_ns > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };

        let relative_error = match (result.result_sample, baseline.result_sample) {
            (Some(res), Some(base)) => {
                let diff = (res - base).abs();
                if base.abs() > 1e-9 {
                    diff / base.abs()
                } else {
                    diff
                }
            }
            _ => 0.0,
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name(&result.name), variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Benchmark one algorithm and print a table per size, then export CSV if asked
pub fn run_and_display(algo: &dyn AlgorithmRunner, config: &BenchConfig) -> Result<()> {
    print_algo_info_box(algo);

    let sizes = runner::run_algorithm(algo, config)?;
    for size_results in &sizes {
        print_results_table(size_results);
    }

    if let Some(path) = &config.csv_path {
        runner::export_csv(path, &runner::raw_rows(algo.name(), &sizes))?;
        println!("Raw timings written to {}", path.display());
    }

    Ok(())
}

/// Print `name: (answer, seconds)` for each compared variant
pub fn print_compare(results: &[CompareResult]) {
    let width = results.iter().map(|r| r.name.len()).max().unwrap_or(8) + 1;
    for r in results {
        let label = format!("{}:", display_name(r.name));
        match &r.answer {
            Ok(answer) => println!(
                "{:<width$} ({}, {:.6})",
                label,
                answer,
                r.elapsed.as_secs_f64(),
                width = width + 1
            ),
            Err(e) => println!("{:<width$} error: {}", label, e, width = width + 1),
        }
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dot Product Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<20} variants: {}", "", algo.available_variants().join(", "));
    }
}
