// Service exports
pub mod artifacts;

pub use artifacts::{load_model, load_scaler, ArtifactError};
