//! End-to-end runs of the calculator over in-memory sensor packages.

use workouts::{SensorPackage, WorkoutError, reference_packages, run};

fn run_to_lines(packages: &[SensorPackage]) -> (Result<usize, WorkoutError>, Vec<String>) {
    let mut buf = Vec::new();
    let result = run(packages, &mut buf);
    let lines = String::from_utf8(buf)
        .expect("output is utf-8")
        .lines()
        .map(str::to_string)
        .collect();
    (result, lines)
}

#[test]
fn reference_batch_output() {
    let (result, lines) = run_to_lines(&reference_packages());
    assert_eq!(result.unwrap(), 3);
    assert_eq!(
        lines,
        vec![
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000.",
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750.",
            "Training type: SportsWalking; Duration: 1.000 h; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500.",
        ]
    );
}

#[test]
fn unknown_code_produces_no_line() {
    let (result, lines) = run_to_lines(&[SensorPackage::new("XYZ", vec![1.0, 1.0, 1.0])]);
    assert!(matches!(result, Err(WorkoutError::UnknownActivityCode(code)) if code == "XYZ"));
    assert!(lines.is_empty());
}

#[test]
fn packages_from_json() {
    let packages: Vec<SensorPackage> = serde_json::from_str(
        r#"[
            {"code": "RUN", "data": [15000, 1, 75]},
            {"code": "SWM", "data": [720, 1, 80, 25, 40]}
        ]"#,
    )
    .expect("valid packages");

    let (result, lines) = run_to_lines(&packages);
    assert_eq!(result.unwrap(), 2);
    assert!(lines[0].contains("Calories burned: 699.750."));
    assert!(lines[1].contains("Avg speed: 1.000 km/h"));
}

#[test]
fn arity_error_after_valid_lines() {
    let packages = vec![
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0]),
    ];
    let (result, lines) = run_to_lines(&packages);
    assert!(matches!(
        result,
        Err(WorkoutError::ArityMismatch { expected: 4, actual: 3, .. })
    ));
    assert_eq!(lines.len(), 1);
}
