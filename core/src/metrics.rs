use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Tellere for behandlede økter og feil, med eget register.
pub struct Metrics {
    registry: Registry,
    workouts_processed: IntCounterVec,
    workout_errors: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let workouts_processed = IntCounterVec::new(
            Opts::new("workouts_processed_total", "Workouts turned into a report"),
            &["workout_type"],
        )?;
        let workout_errors = IntCounterVec::new(
            Opts::new("workout_errors_total", "Packages that failed, by error kind"),
            &["kind"],
        )?;

        registry.register(Box::new(workouts_processed.clone()))?;
        registry.register(Box::new(workout_errors.clone()))?;

        Ok(Self { registry, workouts_processed, workout_errors })
    }

    pub fn record_workout(&self, code: &str) {
        self.workouts_processed.with_label_values(&[code]).inc();
    }

    pub fn record_error(&self, kind: &str) {
        self.workout_errors.with_label_values(&[kind]).inc();
    }

    pub fn workouts_processed(&self, code: &str) -> u64 {
        self.workouts_processed.with_label_values(&[code]).get()
    }

    pub fn workout_errors(&self, kind: &str) -> u64 {
        self.workout_errors.with_label_values(&[kind]).get()
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
