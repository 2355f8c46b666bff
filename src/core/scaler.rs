use serde::{Deserialize, Serialize};

use crate::core::engine::InferenceError;

/// Fitted feature standardization loaded from an external artifact
///
/// Applies `(x - mean) / scale` per feature, reproducing the normalization
/// the predictor was trained against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Identity transform of the given width (mean 0, scale 1)
    pub fn identity(width: usize) -> Self {
        Self {
            mean: vec![0.0; width],
            scale: vec![1.0; width],
        }
    }

    /// Number of features this scaler was fitted to
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Normalize a raw feature vector
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.width() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.width(),
                actual: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
