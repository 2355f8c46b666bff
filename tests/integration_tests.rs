// Integration tests for the fitness tracker inference path

use std::path::PathBuf;

use fitness_tracker::core::{InferenceEngine, RegressionModel, StandardScaler, FEATURE_COUNT};
use fitness_tracker::models::{Gender, PredictRequest};
use fitness_tracker::services::{load_model, load_scaler};

fn artifact_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("artifacts")
        .join(name)
}

fn sum_model() -> RegressionModel {
    RegressionModel {
        weights: vec![1.0; FEATURE_COUNT],
        intercept: 0.0,
    }
}

#[test]
fn test_identity_scaler_sum_model_returns_literal_sum() {
    let engine =
        InferenceEngine::new(StandardScaler::identity(FEATURE_COUNT), sum_model()).unwrap();

    let cases = [
        (Gender::Female, 25u8, 170u16, 70u16, 30u16, 90u16, 37.0),
        (Gender::Male, 10, 100, 30, 1, 60, 35.0),
        (Gender::Male, 100, 250, 150, 120, 200, 42.0),
    ];

    for (gender, age, height_cm, weight_kg, duration_min, heart_rate, body_temp) in cases {
        let request = PredictRequest {
            gender,
            age,
            height_cm,
            weight_kg,
            duration_min,
            heart_rate,
            body_temp,
        };

        let expected = gender.as_feature()
            + age as f64
            + height_cm as f64
            + weight_kg as f64
            + duration_min as f64
            + heart_rate as f64
            + body_temp;

        let estimate = engine.estimate(&request).unwrap();
        assert_eq!(estimate, expected, "estimate should be the literal sum");
    }
}

#[test]
fn test_shipped_artifacts_load_and_predict() {
    let scaler = load_scaler(artifact_path("scaler.json")).unwrap();
    let model = load_model(artifact_path("calorie_model.json")).unwrap();

    assert_eq!(scaler.width(), FEATURE_COUNT);
    assert_eq!(model.width(), FEATURE_COUNT);

    let engine = InferenceEngine::new(scaler, model).unwrap();
    let estimate = engine.estimate(&PredictRequest::default()).unwrap();

    assert!(estimate.is_finite(), "estimate should be a finite number");
}

#[test]
fn test_longer_workout_burns_more_with_shipped_artifacts() {
    let engine = InferenceEngine::new(
        load_scaler(artifact_path("scaler.json")).unwrap(),
        load_model(artifact_path("calorie_model.json")).unwrap(),
    )
    .unwrap();

    let short = PredictRequest {
        duration_min: 10,
        ..PredictRequest::default()
    };
    let long = PredictRequest {
        duration_min: 90,
        ..PredictRequest::default()
    };

    let short_estimate = engine.estimate(&short).unwrap();
    let long_estimate = engine.estimate(&long).unwrap();

    assert!(
        long_estimate > short_estimate,
        "expected {} > {}",
        long_estimate,
        short_estimate
    );
}

#[test]
fn test_undersized_artifacts_yield_an_error_not_a_panic() {
    let engine = InferenceEngine::new(
        StandardScaler::identity(5),
        RegressionModel {
            weights: vec![1.0; 5],
            intercept: 0.0,
        },
    )
    .unwrap();

    let result = engine.estimate(&PredictRequest::default());
    assert!(result.is_err());
}

#[test]
fn test_mismatched_artifact_pair_is_rejected() {
    let result = InferenceEngine::new(StandardScaler::identity(6), sum_model());
    assert!(result.is_err());
}
