//! Parameter-sweep driver for the call center simulation core.
//!
//! Enumerates every configuration combination in the sweep grid, runs
//! one independent engine instance per combination, and writes the
//! aggregate results as a CSV table. Runs are embarrassingly parallel:
//! each owns its config and its derived seed, so they are distributed
//! across worker threads with no shared state.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;

use call_center_sim_core_rs::{run_simulation, SimulationError, SimulationReport};

mod sweep;
use sweep::{RunSpec, SweepGrid};

#[derive(Debug, Parser)]
#[command(
    name = "call-center-sim",
    about = "Sweep call center configurations and tabulate simulation results"
)]
struct Args {
    /// Output CSV path
    #[arg(long, default_value = "simulation_results.csv")]
    output: PathBuf,

    /// Base seed; every run derives its own seed from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file overriding the default sweep grid
    #[arg(long)]
    config: Option<PathBuf>,

    /// Worker threads (defaults to available parallelism)
    #[arg(long)]
    jobs: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let grid = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading sweep grid {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing sweep grid {}", path.display()))?
        }
        None => SweepGrid::default(),
    };

    let runs = grid.enumerate(args.seed);
    let jobs = args
        .jobs
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
        .max(1);

    let reports = run_sweep(&runs, jobs)?;
    write_csv(&args.output, &runs, &reports)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Simulation completed. {} results written to {}",
        runs.len(),
        args.output.display()
    );
    Ok(())
}

/// Execute every run, preserving grid order in the returned reports
fn run_sweep(runs: &[RunSpec], jobs: usize) -> anyhow::Result<Vec<SimulationReport>> {
    let chunk_size = runs.len().div_ceil(jobs).max(1);
    let mut reports = Vec::with_capacity(runs.len());

    std::thread::scope(|scope| -> anyhow::Result<()> {
        let handles: Vec<_> = runs
            .chunks(chunk_size)
            .map(|specs| {
                scope.spawn(move || -> Result<Vec<SimulationReport>, SimulationError> {
                    specs
                        .iter()
                        .map(|spec| run_simulation(&spec.config, spec.seed))
                        .collect()
                })
            })
            .collect();

        for handle in handles {
            let chunk = handle
                .join()
                .map_err(|_| anyhow!("sweep worker panicked"))??;
            reports.extend(chunk);
        }
        Ok(())
    })?;

    Ok(reports)
}

/// Write the results table, one row per run in grid order
fn write_csv(
    path: &Path,
    runs: &[RunSpec],
    reports: &[SimulationReport],
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "NumAgents,SimulationTime,MaxWaitTime,Lambda,AverageCallTime,Seed,TotalCalls,AbandonedCalls,Utilization"
    )?;

    for (spec, report) in runs.iter().zip(reports.iter()) {
        writeln!(
            writer,
            "{},{},{},{:.1},{:.1},{},{},{},{:.2}",
            spec.config.num_agents,
            spec.config.horizon,
            spec.config.max_wait_time,
            spec.config.lambda,
            spec.config.average_call_time,
            spec.seed,
            report.total_calls,
            report.abandoned_calls,
            report.utilization * 100.0,
        )?;
    }

    writer.flush()
}
