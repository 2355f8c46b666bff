use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::core::{RegressionModel, StandardScaler};

/// Errors that can occur when loading the fitted artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact file: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("artifact has inconsistent shape: {0}")]
    Shape(String),
}

/// Load the fitted scaler from a JSON artifact file
///
/// The artifact is checked for internal consistency: mean and scale must
/// have the same non-zero width, and no scale entry may be zero (a zero
/// scale would divide every request by zero).
pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<StandardScaler, ArtifactError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let scaler: StandardScaler = serde_json::from_reader(reader)?;

    if scaler.mean.is_empty() {
        return Err(ArtifactError::Shape("scaler has no fitted features".into()));
    }
    if scaler.mean.len() != scaler.scale.len() {
        return Err(ArtifactError::Shape(format!(
            "scaler mean has {} entries but scale has {}",
            scaler.mean.len(),
            scaler.scale.len()
        )));
    }
    if scaler.scale.iter().any(|s| *s == 0.0) {
        return Err(ArtifactError::Shape("scaler has a zero scale entry".into()));
    }

    tracing::debug!(
        "Loaded scaler artifact ({} features) from {}",
        scaler.width(),
        path.as_ref().display()
    );

    Ok(scaler)
}

/// Load the fitted regression model from a JSON artifact file
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<RegressionModel, ArtifactError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let model: RegressionModel = serde_json::from_reader(reader)?;

    if model.weights.is_empty() {
        return Err(ArtifactError::Shape("model has no fitted weights".into()));
    }

    tracing::debug!(
        "Loaded model artifact ({} features) from {}",
        model.width(),
        path.as_ref().display()
    );

    Ok(model)
}
