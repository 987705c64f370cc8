use log::debug;
use serde::Serialize;

use crate::dispatch::read_package;
use crate::error::WorkoutError;
use crate::metrics::Metrics;
use crate::report::Report;
use crate::types::{BatchCfg, Package};

/// Feil for én pakke, med posisjon i batchen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageFailure {
    pub index: usize,
    pub workout_type: String,
    pub kind: &'static str,
    pub message: String,
    #[serde(skip)]
    pub error: WorkoutError,
}

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub reports: Vec<Report>,
    pub failures: Vec<PackageFailure>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool { self.failures.is_empty() }
}

/// Dispatch + beregning for én pakke.
pub fn process_package(package: &Package, metrics: &Metrics) -> Result<Report, WorkoutError> {
    let result = read_package(package.workout_type(), package.data()).and_then(|w| w.training_info());
    match &result {
        Ok(_) => metrics.record_workout(package.workout_type()),
        Err(e) => metrics.record_error(e.kind()),
    }
    result
}

/// Behandler pakkene i rekkefølge. `fail_fast` (standard) stopper ved første feil,
/// ellers samles alle feil.
pub fn run_batch(packages: &[Package], cfg: &BatchCfg, metrics: &Metrics) -> BatchOutcome {
    let mut out = BatchOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match process_package(package, metrics) {
            Ok(report) => out.reports.push(report),
            Err(error) => {
                debug!("pakke #{index} ({}) feilet: {error}", package.workout_type());
                out.failures.push(PackageFailure {
                    index,
                    workout_type: package.workout_type().to_string(),
                    kind: error.kind(),
                    message: error.to_string(),
                    error,
                });
                if cfg.fail_fast() {
                    break;
                }
            }
        }
    }

    debug!(
        "batch ferdig: {} rapporter, {} feil",
        out.reports.len(),
        out.failures.len()
    );
    out
}

/// Én linje per rapport, som tekst eller JSON.
pub fn render_batch(outcome: &BatchOutcome, cfg: &BatchCfg) -> Result<Vec<String>, serde_json::Error> {
    if cfg.json_output() {
        outcome.reports.iter().map(Report::to_json).collect()
    } else {
        Ok(outcome.reports.iter().map(Report::message).collect())
    }
}
