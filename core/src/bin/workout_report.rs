use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error};

use workout_stats_core::{demo_packages, load_batch, render_batch, run_batch, BatchInput, Metrics};

#[derive(Parser, Debug)]
#[command(author, version, about = "Distance, mean speed and calories for workout packages", long_about = None)]
struct Cli {
    /// Batch file (JSON: {"packages": [["RUN", [15000, 1, 75]], ...]}); demo batch when omitted
    packages: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<bool> {
    let input = match &cli.packages {
        Some(path) => {
            let path = path.to_string_lossy();
            load_batch(&path).with_context(|| format!("loading batch {path}"))?
        }
        None => BatchInput { packages: demo_packages(), ..Default::default() },
    };

    let metrics = Metrics::new().context("registering metrics")?;
    let outcome = run_batch(&input.packages, &input.cfg, &metrics);

    for line in render_batch(&outcome, &input.cfg).context("rendering reports")? {
        println!("{line}");
    }
    for failure in &outcome.failures {
        error!(
            "package #{} ({}): {}",
            failure.index, failure.workout_type, failure.message
        );
        eprintln!(
            "error: package #{} ({}): {}",
            failure.index, failure.workout_type, failure.message
        );
    }

    if let Ok(text) = metrics.render() {
        debug!("metrics:\n{text}");
    }
    Ok(outcome.is_ok())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
