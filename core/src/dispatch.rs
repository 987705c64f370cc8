// core/src/dispatch.rs
use crate::error::WorkoutError;
use crate::models::{RunningReading, SwimmingReading, WalkingReading};
use crate::workout::{Workout, WorkoutKind};

/// Les rådata fra sensorene og bygg riktig økt.
///
/// Rekkefølge på verdiene:
/// - `SWM`: `[action, duration, weight, pool_length, pool_count]`
/// - `RUN`: `[action, duration, weight]`
/// - `WLK`: `[action, duration, weight, height]`
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(workout_type)?;
    if data.len() != kind.arity() {
        return Err(WorkoutError::invalid(format!(
            "{} expects {} values, got {}",
            kind.code(),
            kind.arity(),
            data.len()
        )));
    }

    let action = as_count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(RunningReading::new(action, duration, weight)?),
        WorkoutKind::SportsWalking => {
            Workout::SportsWalking(WalkingReading::new(action, duration, weight, data[3])?)
        }
        WorkoutKind::Swimming => {
            let pool_count = as_count("pool_count", data[4])?;
            Workout::Swimming(SwimmingReading::new(action, duration, weight, data[3], pool_count)?)
        }
    };
    Ok(workout)
}

/// Tellere må være hele, ikke-negative tall som passer i u32.
fn as_count(field: &str, v: f64) -> Result<u32, WorkoutError> {
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= f64::from(u32::MAX) {
        // verdien er heltallig og innenfor området
        Ok(v as u32)
    } else {
        Err(WorkoutError::invalid(format!(
            "{field} must be a non-negative whole number, got {v}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_assigned_positionally() {
        match read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap() {
            Workout::Swimming(s) => {
                assert_eq!(s.base.action, 720);
                assert_eq!(s.base.duration_h, 1.0);
                assert_eq!(s.base.weight_kg, 80.0);
                assert_eq!(s.pool_length_m, 25.0);
                assert_eq!(s.pool_count, 40);
            }
            other => panic!("expected swimming, got {other:?}"),
        }

        match read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap() {
            Workout::SportsWalking(w) => assert_eq!(w.height_cm, 180.0),
            other => panic!("expected walking, got {other:?}"),
        }
    }

    #[test]
    fn fractional_or_negative_counts_are_rejected() {
        assert!(matches!(
            read_package("RUN", &[100.5, 1.0, 75.0]),
            Err(WorkoutError::InvalidReading(_))
        ));
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidReading(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
            Err(WorkoutError::InvalidReading(_))
        ));
    }

    #[test]
    fn unknown_code_wins_over_length_check() {
        assert_eq!(
            read_package("XYZ", &[]),
            Err(WorkoutError::UnknownWorkoutType("XYZ".into()))
        );
    }
}
