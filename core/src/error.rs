use thiserror::Error;

/// Errors raised while building a workout or computing its metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// Non-positive duration, wrong value count or a physically invalid field.
    #[error("invalid reading: {0}")]
    InvalidReading(String),

    /// Type code outside {SWM, RUN, WLK}.
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    /// A formula would have divided by zero; the payload names the quantity.
    #[error("division by zero while computing {0}")]
    DivisionByZero(&'static str),
}

impl WorkoutError {
    /// Stable label used for metrics and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            WorkoutError::InvalidReading(_) => "invalid_reading",
            WorkoutError::UnknownWorkoutType(_) => "unknown_workout_type",
            WorkoutError::DivisionByZero(_) => "division_by_zero",
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WorkoutError::InvalidReading(msg.into())
    }
}

/// Errors from reading or writing batch files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON error with the path of the offending field (e.g. `packages[1]`).
    #[error("invalid JSON in {path} at `{field}`: {source}")]
    Json {
        path: String,
        field: String,
        #[source]
        source: serde_json::Error,
    },
}
