// core/src/formulas.rs
use crate::error::WorkoutError;

pub const M_IN_KM: f64 = 1000.0;    // meter per km
pub const MIN_IN_H: f64 = 60.0;     // minutter per time
pub const LEN_STEP_M: f64 = 0.65;   // skrittlengde (m), løp og gange
pub const LEN_STROKE_M: f64 = 1.38; // taklengde (m), svømming

// Løp
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

// Sportsgange
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Svømming
pub const SWIM_SPEED_SHIFT: f64 = 1.1;
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Divisjon med eksplisitt vakt mot null-divisor.
#[inline]
pub fn checked_div(num: f64, den: f64, what: &'static str) -> Result<f64, WorkoutError> {
    if den == 0.0 {
        return Err(WorkoutError::DivisionByZero(what));
    }
    Ok(num / den)
}

/// Gulvdivisjon for flyttall: runder mot minus uendelig, ikke mot null.
///
/// Går via fmod slik at kvotienten blir konsistent med floored modulo
/// (`a == b * q + r`, `r` har samme fortegn som `b`), også når `a / b`
/// ligger rett under et heltall.
pub fn floor_div(a: f64, b: f64) -> Result<f64, WorkoutError> {
    if b == 0.0 {
        return Err(WorkoutError::DivisionByZero("floor division"));
    }
    let m = a % b; // fortegn følger a
    let mut div = (a - m) / b;
    if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        // bevar fortegnet på null: -0.0 når a/b er negativ
        return Ok(0.0_f64.copysign(a / b));
    }
    let mut q = div.floor();
    if div - q > 0.5 {
        q += 1.0;
    }
    Ok(q)
}

/// Distanse i km fra antall skritt/tak.
#[inline]
pub fn distance_km(action: u32, step_len_m: f64) -> f64 {
    f64::from(action) * step_len_m / M_IN_KM
}

/// Snittfart (km/t) fra distanse og varighet.
#[inline]
pub fn mean_speed_kmh(distance_km: f64, duration_h: f64) -> Result<f64, WorkoutError> {
    checked_div(distance_km, duration_h, "mean speed")
}

/// Snittfart i basseng: lengde * antall / 1000 / varighet.
pub fn pool_speed_kmh(pool_length_m: f64, pool_count: u32, duration_h: f64) -> Result<f64, WorkoutError> {
    let km = pool_length_m * f64::from(pool_count) / M_IN_KM;
    checked_div(km, duration_h, "mean speed")
}

/// Løp: (18 * v - 20) * vekt / 1000 * t * 60. Kan bli negativ ved lav fart.
pub fn running_calories(speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * speed_kmh - RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_h
        * MIN_IN_H
}

/// Sportsgange: (0.035 * vekt + (v^2 // høyde) * 0.029 * vekt) * t * 60.
pub fn walking_calories(
    speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_h: f64,
) -> Result<f64, WorkoutError> {
    let ratio = floor_div(speed_kmh.powi(2), height_cm)?;
    Ok((WALK_WEIGHT_MULTIPLIER * weight_kg
        + ratio * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_h
        * MIN_IN_H)
}

/// Svømming: (v + 1.1) * 2 * vekt.
#[inline]
pub fn swimming_calories(speed_kmh: f64, weight_kg: f64) -> f64 {
    (speed_kmh + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg
}
