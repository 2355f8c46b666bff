//! Personal Fitness Tracker - calorie expenditure prediction service
//!
//! This library provides the inference path behind the fitness tracker page:
//! a fixed-order feature vector assembled from the form inputs, normalized by
//! a pre-fitted scaler and mapped to a calorie estimate by a pre-fitted
//! regression model, both loaded from artifact files at startup.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{feature_vector, InferenceEngine, InferenceError, RegressionModel, StandardScaler, FEATURE_COUNT};
pub use crate::models::{ErrorResponse, Gender, HealthResponse, PredictRequest, PredictResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let features = feature_vector(&PredictRequest::default());
        assert_eq!(features.len(), FEATURE_COUNT);
    }
}
