use serde::{Deserialize, Serialize};

/// Én pakke fra sensorene: `["RUN", [15000, 1, 75]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package(pub String, pub Vec<f64>);

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Package(workout_type.into(), data)
    }

    pub fn workout_type(&self) -> &str { &self.0 }
    pub fn data(&self) -> &[f64] { &self.1 }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchCfg {
    pub fail_fast: Option<bool>,   // default true
    pub json_output: Option<bool>, // default false
}

impl BatchCfg {
    pub fn fail_fast(&self) -> bool { self.fail_fast.unwrap_or(true) }
    pub fn json_output(&self) -> bool { self.json_output.unwrap_or(false) }
}

/// Innhold i en batch-fil.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchInput {
    pub packages: Vec<Package>,
    #[serde(default)]
    pub cfg: BatchCfg,
}

/// Demo-pakkene (samme rekkefølge som i utskriften).
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_reads_as_two_element_array() {
        let p: Package = serde_json::from_str(r#"["WLK", [9000, 1, 75, 180]]"#).unwrap();
        assert_eq!(p.workout_type(), "WLK");
        assert_eq!(p.data(), &[9000.0, 1.0, 75.0, 180.0]);
    }

    #[test]
    fn cfg_defaults() {
        let input: BatchInput = serde_json::from_str(r#"{"packages": []}"#).unwrap();
        assert!(input.cfg.fail_fast());
        assert!(!input.cfg.json_output());
    }
}
