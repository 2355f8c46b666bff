use thiserror::Error;

use crate::core::features::feature_vector;
use crate::core::model::RegressionModel;
use crate::core::scaler::StandardScaler;
use crate::models::PredictRequest;

/// Errors raised at the scaler/predictor boundary
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("feature vector has {actual} values but the artifact was fitted to {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Inference pipeline over the loaded artifacts
///
/// # Pipeline Stages
/// 1. Fixed-order feature vector assembly
/// 2. Scaler transform
/// 3. Regression predict
///
/// The engine owns the artifacts for the process lifetime and is cloned
/// into each worker; nothing in the pipeline mutates state.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    scaler: StandardScaler,
    model: RegressionModel,
}

impl InferenceEngine {
    /// Build an engine from loaded artifacts
    ///
    /// Fails if the scaler and model were fitted to different widths, which
    /// would make every request error at the predict stage.
    pub fn new(scaler: StandardScaler, model: RegressionModel) -> Result<Self, InferenceError> {
        if scaler.width() != model.width() {
            return Err(InferenceError::DimensionMismatch {
                expected: model.width(),
                actual: scaler.width(),
            });
        }

        Ok(Self { scaler, model })
    }

    /// Number of features the loaded artifacts expect
    pub fn width(&self) -> usize {
        self.model.width()
    }

    /// Estimate calories burned for one request
    ///
    /// # Returns
    /// The estimate in kcal, or the inference error when the request vector
    /// does not match the artifacts' fitted width.
    pub fn estimate(&self, request: &PredictRequest) -> Result<f64, InferenceError> {
        let features = feature_vector(request);
        let scaled = self.scaler.transform(&features)?;
        self.model.predict(&scaled)
    }
}
