// core/src/lib.rs
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod formulas;
pub mod metrics;
pub mod models;
pub mod report;
pub mod storage;
pub mod types;
pub mod workout;

#[cfg(feature = "python")]
mod py;

// Re-eksporter det vanligste API-et fra crate-roten
pub use cli::{process_package, render_batch, run_batch, BatchOutcome, PackageFailure};
pub use dispatch::read_package;
pub use error::{StorageError, WorkoutError};
pub use metrics::Metrics;
pub use models::{RunningReading, SwimmingReading, WalkingReading, WorkoutReading};
pub use report::Report;
pub use storage::{load_batch, parse_batch};
pub use types::{demo_packages, BatchCfg, BatchInput, Package};
pub use workout::{Workout, WorkoutKind};
