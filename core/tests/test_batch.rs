// core/tests/test_batch.rs
//
// Feilpolicy: `fail_fast` (standard) stopper ved første feil; med
// `fail_fast: false` behandles hele batchen og alle feil samles.
use workout_stats_core::{
    demo_packages, render_batch, run_batch, BatchCfg, Metrics, Package, WorkoutError,
};

fn mixed_batch() -> Vec<Package> {
    vec![
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("XYZ", vec![1.0, 2.0, 3.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        Package::new("SWM", vec![720.0, 0.0, 80.0, 25.0, 40.0]),
    ]
}

#[test]
fn demo_batch_prints_expected_lines() {
    let metrics = Metrics::new().unwrap();
    let cfg = BatchCfg::default();
    let out = run_batch(&demo_packages(), &cfg, &metrics);
    let lines = render_batch(&out, &cfg).unwrap();

    assert_eq!(
        lines,
        vec![
            "Workout type: Swimming; Duration: 1.000 h; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories: 336.000.",
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories: 699.750.",
            "Workout type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories: 157.500.",
        ]
    );
    assert_eq!(metrics.workouts_processed("SWM"), 1);
    assert_eq!(metrics.workouts_processed("RUN"), 1);
    assert_eq!(metrics.workouts_processed("WLK"), 1);
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let metrics = Metrics::new().unwrap();
    let out = run_batch(&mixed_batch(), &BatchCfg::default(), &metrics);

    assert_eq!(out.reports.len(), 1);
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].index, 1);
    assert_eq!(out.failures[0].error, WorkoutError::UnknownWorkoutType("XYZ".into()));
    assert!(!out.is_ok());
    assert_eq!(metrics.workouts_processed("WLK"), 0, "WLK skal aldri behandles");
}

#[test]
fn collect_mode_processes_everything_and_keeps_order() {
    let metrics = Metrics::new().unwrap();
    let cfg = BatchCfg { fail_fast: Some(false), ..Default::default() };
    let out = run_batch(&mixed_batch(), &cfg, &metrics);

    let labels: Vec<_> = out.reports.iter().map(|r| r.training_type()).collect();
    assert_eq!(labels, ["Running", "SportsWalking"]);

    let failed: Vec<_> = out.failures.iter().map(|f| (f.index, f.kind)).collect();
    assert_eq!(failed, [(1, "unknown_workout_type"), (3, "invalid_reading")]);

    assert_eq!(metrics.workout_errors("unknown_workout_type"), 1);
    assert_eq!(metrics.workout_errors("invalid_reading"), 1);
}

#[test]
fn json_output_renders_one_object_per_report() {
    let metrics = Metrics::new().unwrap();
    let cfg = BatchCfg { json_output: Some(true), ..Default::default() };
    let out = run_batch(&demo_packages(), &cfg, &metrics);
    let lines = render_batch(&out, &cfg).unwrap();

    assert_eq!(lines.len(), 3);
    let v: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(v["training_type"], "Running");
    assert!((v["distance_km"].as_f64().unwrap() - 9.75).abs() < 1e-9);
}

#[test]
fn empty_batch_is_ok() {
    let metrics = Metrics::new().unwrap();
    let out = run_batch(&[], &BatchCfg::default(), &metrics);
    assert!(out.is_ok());
    assert!(out.reports.is_empty());
}
