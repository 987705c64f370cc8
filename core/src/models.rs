use crate::error::WorkoutError;

/// Felles rådata for alle treningstyper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutReading {
    pub action: u32,      // skritt eller tak
    pub duration_h: f64,  // timer
    pub weight_kg: f64,   // kg
}

impl WorkoutReading {
    /// Validerer varighet og vekt. Varighet <= 0 avvises her,
    /// ikke først ved divisjon.
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(WorkoutError::invalid(format!(
                "duration must be a positive number of hours, got {duration_h}"
            )));
        }
        require_positive("weight_kg", weight_kg)?;
        Ok(Self { action, duration_h, weight_kg })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningReading {
    pub base: WorkoutReading,
}

impl RunningReading {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self { base: WorkoutReading::new(action, duration_h, weight_kg)? })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingReading {
    pub base: WorkoutReading,
    pub height_cm: f64,
}

impl WalkingReading {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Result<Self, WorkoutError> {
        let base = WorkoutReading::new(action, duration_h, weight_kg)?;
        require_positive("height_cm", height_cm)?;
        Ok(Self { base, height_cm })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingReading {
    pub base: WorkoutReading,
    pub pool_length_m: f64,
    pub pool_count: u32,
}

impl SwimmingReading {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: u32,
    ) -> Result<Self, WorkoutError> {
        let base = WorkoutReading::new(action, duration_h, weight_kg)?;
        require_positive("pool_length_m", pool_length_m)?;
        Ok(Self { base, pool_length_m, pool_count })
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::invalid(format!("{field} must be positive, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_or_negative_duration_is_rejected() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = RunningReading::new(1000, d, 75.0).unwrap_err();
            assert!(matches!(err, WorkoutError::InvalidReading(_)), "d={d}: {err:?}");
        }
    }

    #[test]
    fn zero_height_and_pool_length_are_rejected() {
        assert!(WalkingReading::new(9000, 1.0, 75.0, 0.0).is_err());
        assert!(SwimmingReading::new(720, 1.0, 80.0, 0.0, 40).is_err());
        assert!(SwimmingReading::new(720, 1.0, 80.0, -25.0, 40).is_err());
    }

    #[test]
    fn zero_weight_is_rejected() {
        assert!(RunningReading::new(15000, 1.0, 0.0).is_err());
    }

    #[test]
    fn zero_actions_and_laps_are_allowed() {
        assert!(RunningReading::new(0, 1.0, 75.0).is_ok());
        assert!(SwimmingReading::new(0, 1.0, 80.0, 25.0, 0).is_ok());
    }
}
