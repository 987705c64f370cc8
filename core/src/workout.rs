// core/src/workout.rs
use log::debug;

use crate::error::WorkoutError;
use crate::formulas::{
    distance_km, mean_speed_kmh, pool_speed_kmh, running_calories, swimming_calories,
    walking_calories, LEN_STEP_M, LEN_STROKE_M,
};
use crate::models::{RunningReading, SwimmingReading, WalkingReading, WorkoutReading};
use crate::report::Report;

/// Treningstype med egne konstanter (kode, navn, steglengde, antall verdier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        match code {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            other => Err(WorkoutError::UnknownWorkoutType(other.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Navnet som vises i rapporten.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Meter per skritt/tak.
    pub fn step_length_m(self) -> f64 {
        match self {
            WorkoutKind::Swimming => LEN_STROKE_M,
            WorkoutKind::Running | WorkoutKind::SportsWalking => LEN_STEP_M,
        }
    }

    /// Antall rådata-verdier dispatcheren forventer.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

/// En ferdig konstruert økt. Variantene bærer sine egne felt;
/// formlene velges med `match`, ikke med overstyring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(RunningReading),
    SportsWalking(WalkingReading),
    Swimming(SwimmingReading),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn base(&self) -> &WorkoutReading {
        match self {
            Workout::Running(r) => &r.base,
            Workout::SportsWalking(w) => &w.base,
            Workout::Swimming(s) => &s.base,
        }
    }

    /// Distanse (km). Svømming bruker også denne, med taklengde 1.38 m.
    pub fn distance_km(&self) -> f64 {
        distance_km(self.base().action, self.kind().step_length_m())
    }

    pub fn mean_speed_kmh(&self) -> Result<f64, WorkoutError> {
        match self {
            Workout::Swimming(s) => pool_speed_kmh(s.pool_length_m, s.pool_count, s.base.duration_h),
            _ => mean_speed_kmh(self.distance_km(), self.base().duration_h),
        }
    }

    pub fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed_kmh()?;
        let b = self.base();
        match self {
            Workout::Running(_) => Ok(running_calories(speed, b.weight_kg, b.duration_h)),
            Workout::SportsWalking(w) => walking_calories(speed, b.weight_kg, w.height_cm, b.duration_h),
            Workout::Swimming(_) => Ok(swimming_calories(speed, b.weight_kg)),
        }
    }

    /// Beregn alle verdier og bygg rapporten.
    pub fn training_info(&self) -> Result<Report, WorkoutError> {
        let kind = self.kind();
        let distance = self.distance_km();
        let speed = self.mean_speed_kmh()?;
        let calories = self.spent_calories()?;

        debug!(
            "[{}] distance={:.4} km, speed={:.4} km/h, calories={:.4}",
            kind.code(),
            distance,
            speed,
            calories
        );

        Report::new(kind.label(), self.base().duration_h, distance, speed, calories)
    }
}
