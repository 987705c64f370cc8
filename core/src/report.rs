use std::fmt;

use serde::Serialize;

use crate::error::WorkoutError;

/// Ferdig beregnet sammendrag for én økt. Bygges én gang, endres aldri.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    training_type: &'static str,
    duration_h: f64,
    distance_km: f64,
    speed_kmh: f64,
    calories_kcal: f64,
}

impl Report {
    /// Avviser ikke-finite verdier slik at inf/NaN aldri havner i utskriften.
    pub fn new(
        training_type: &'static str,
        duration_h: f64,
        distance_km: f64,
        speed_kmh: f64,
        calories_kcal: f64,
    ) -> Result<Self, WorkoutError> {
        for (name, v) in [
            ("duration", duration_h),
            ("distance", distance_km),
            ("mean speed", speed_kmh),
            ("calories", calories_kcal),
        ] {
            if !v.is_finite() {
                return Err(WorkoutError::invalid(format!("{name} is not finite ({v})")));
            }
        }
        Ok(Self { training_type, duration_h, distance_km, speed_kmh, calories_kcal })
    }

    pub fn training_type(&self) -> &'static str { self.training_type }
    pub fn duration_h(&self) -> f64 { self.duration_h }
    pub fn distance_km(&self) -> f64 { self.distance_km }
    pub fn speed_kmh(&self) -> f64 { self.speed_kmh }
    pub fn calories_kcal(&self) -> f64 { self.calories_kcal }

    /// Fast format, tre desimaler på alle tall.
    pub fn message(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories: {:.3}.",
            self.training_type, self.duration_h, self.distance_km, self.speed_kmh, self.calories_kcal
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_has_three_decimals() {
        let r = Report::new("Swimming", 1.0, 0.9936, 1.0, 336.0).unwrap();
        assert_eq!(
            r.message(),
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories: 336.000."
        );
        assert_eq!(r.to_string(), r.message());
    }

    #[test]
    fn negative_calories_are_rendered_as_is() {
        let r = Report::new("Running", 1.0, 0.65, 0.65, -74.7).unwrap();
        assert!(r.message().ends_with("Calories: -74.700."));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(Report::new("Running", 1.0, 1.0, f64::INFINITY, 1.0).is_err());
        assert!(Report::new("Running", 1.0, 1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn json_uses_field_names() {
        let r = Report::new("Running", 1.0, 9.75, 9.75, 699.75).unwrap();
        let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        assert_eq!(v["training_type"], "Running");
        assert_eq!(v["calories_kcal"], 699.75);
    }
}
