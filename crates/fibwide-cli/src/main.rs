//! fibwide CLI - exact fixed-width Fibonacci calculator.
//!
//! A command-line interface for the `fibwide-core` library. Supports single
//! number calculation, cross-engine comparison, and the benchmark sweep
//! that records per-index wall-clock timings to plain-text log files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use fibwide_core::{Algorithm, U256};
use indicatif::{ProgressBar, ProgressStyle};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine selection, including the comparison mode.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineArg {
    /// O(n) iterative accumulation, native u128.
    Sequence,
    /// O(log n) recursive fast doubling, native u128.
    Doubling,
    /// O(log n) iterative fast doubling (bit-length scan), native u128.
    DoublingClz,
    /// O(n) iterative accumulation, 256-bit.
    #[value(name = "sequence-256")]
    Sequence256,
    /// O(log n) iterative fast doubling, 256-bit.
    #[value(name = "doubling-clz-256")]
    DoublingClz256,
    /// Runs every engine and compares results and timings.
    All,
}

impl EngineArg {
    /// Engines selected by this argument, baseline first.
    fn selected(self) -> Vec<Algorithm> {
        match self {
            EngineArg::Sequence => vec![Algorithm::Sequence],
            EngineArg::Doubling => vec![Algorithm::Doubling],
            EngineArg::DoublingClz => vec![Algorithm::DoublingClz],
            EngineArg::Sequence256 => vec![Algorithm::Iterative256],
            EngineArg::DoublingClz256 => vec![Algorithm::DoublingClz256],
            EngineArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// CLI arguments structure.
#[derive(Parser)]
#[command(name = "fibwide", version, about = "Exact fixed-width Fibonacci calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Calculate F(n) (positional argument).
    #[arg(conflicts_with = "n")]
    number: Option<u32>,

    /// Calculate F(n) using `--n`.
    #[arg(long, conflicts_with = "number")]
    n: Option<u32>,

    /// Engine to use for single calculation.
    #[arg(short, long, value_enum, default_value_t = EngineArg::DoublingClz256)]
    algorithm: EngineArg,

    /// Show detailed result analysis (digits, bits, exactness).
    #[arg(short, long)]
    detail: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Sweep indices 0..=MAX ascending then descending, timing every call
    /// and logging `index elapsed_ns` lines per engine.
    Bench {
        /// Largest index to sweep (inclusive).
        #[arg(long, default_value_t = 370)]
        max: u32,

        /// Engine to benchmark (default: all engines).
        #[arg(short, long, value_enum, default_value_t = EngineArg::All)]
        algorithm: EngineArg,

        /// Directory receiving the `<engine>_time.dat` log files.
        #[arg(long, default_value = "logs")]
        out_dir: PathBuf,
    },
}

struct EngineResult {
    algorithm: Algorithm,
    duration: Duration,
    result: U256,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Bench {
        max,
        algorithm,
        out_dir,
    }) = cli.command
    {
        return run_bench(max, algorithm, &out_dir);
    }

    let n = match cli.n.or(cli.number) {
        Some(n) => n,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    run_single_calculation(n, cli.algorithm, cli.detail);
    Ok(())
}

/// Executes a single Fibonacci calculation and displays the result.
///
/// With `EngineArg::All` every engine runs, results are compared for
/// agreement and listed fastest first.
fn run_single_calculation(n: u32, engine: EngineArg, detail: bool) {
    println!("--- Execution Configuration ---");
    println!("fibwide v{VERSION}");
    println!("Calculating F({n})");
    println!();
    println!("--- Starting Execution ---");

    let mut results: Vec<EngineResult> = Vec::new();
    for algorithm in engine.selected() {
        let start = Instant::now();
        let result = algorithm.compute(n);
        let duration = start.elapsed();
        results.push(EngineResult {
            algorithm,
            duration,
            result,
        });
    }

    results.sort_by_key(|r| r.duration);

    println!();
    println!("--- Results ---");
    for r in &results {
        println!(
            "{:<35} {:>12?}  F({}) = {}",
            r.algorithm.to_string(),
            r.duration,
            n,
            r.result
        );
        if n > r.algorithm.max_exact_index() {
            println!(
                "{:<35} note: index exceeds the exact domain (max {}), value wrapped modulo the width",
                "",
                r.algorithm.max_exact_index()
            );
        }
    }

    if engine == EngineArg::All {
        // 128-bit engines carry only the low limb, so agreement is judged
        // on each engine's own domain.
        let wide = results
            .iter()
            .find(|r| r.algorithm == Algorithm::Iterative256)
            .map(|r| r.result);
        if let Some(wide) = wide {
            let agree = results.iter().all(|r| {
                if n > r.algorithm.max_exact_index() {
                    true
                } else {
                    r.result == wide || r.result.low == wide.low
                }
            });
            println!();
            if agree {
                println!("All engines agree within their domains.");
            } else {
                println!("WARNING: engine disagreement detected at n={n}");
            }
        }
    }

    if detail {
        let best = &results[0];
        let digits = best.result.to_string().len();
        println!();
        println!("--- Detail ---");
        println!("Decimal digits: {digits}");
        println!("Bit length    : {}", best.result.bit_len());
    }
}

/// Runs the benchmark sweep for every selected engine.
///
/// Mirrors the original timing client: for each engine, compute F(i) for
/// `i = 0..=max` ascending then `max..=0` descending, timing each call and
/// appending `index elapsed_ns` lines to `<out_dir>/<slug>_time.dat`.
fn run_bench(max: u32, engine: EngineArg, out_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating log directory {}", out_dir.display()))?;

    let engines = engine.selected();
    println!("Benchmark sweep: 0..={max} ascending then descending");
    println!("Logging to {}", out_dir.display());
    println!();

    for algorithm in engines {
        let path = out_dir.join(format!("{}_time.dat", algorithm.slug()));
        let file = File::create(&path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        let mut log = BufWriter::new(file);

        let total = 2 * (u64::from(max) + 1);
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:<28} [{bar:40.green/dim}] {pos}/{len}")
                .expect("static template")
                .progress_chars("##-"),
        );
        pb.set_message(algorithm.to_string());

        for i in (0..=max).chain((0..=max).rev()) {
            let start = Instant::now();
            let result = algorithm.compute(i);
            let elapsed = start.elapsed().as_nanos();
            // Keep the result observable so the call cannot be elided.
            std::hint::black_box(result);
            writeln!(log, "{i} {elapsed}")
                .with_context(|| format!("writing to {}", path.display()))?;
            pb.inc(1);
        }

        pb.finish();
        log.flush()
            .with_context(|| format!("flushing {}", path.display()))?;
        println!("{algorithm} -> {}", path.display());
    }

    println!();
    println!("--- Benchmark Complete ---");
    Ok(())
}
