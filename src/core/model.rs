use serde::{Deserialize, Serialize};

use crate::core::engine::InferenceError;

/// Fitted regression predictor loaded from an external artifact
///
/// Maps a normalized feature vector to a single calorie estimate:
/// `intercept + weights · x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl RegressionModel {
    /// Number of features this model was fitted to
    pub fn width(&self) -> usize {
        self.weights.len()
    }

    /// Run inference on a normalized feature vector
    pub fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.width() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.width(),
                actual: features.len(),
            });
        }

        let dot: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum();

        Ok(self.intercept + dot)
    }
}
