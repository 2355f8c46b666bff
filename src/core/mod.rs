// Core inference exports
pub mod engine;
pub mod features;
pub mod model;
pub mod scaler;

pub use engine::{InferenceEngine, InferenceError};
pub use features::{feature_vector, FEATURE_COUNT};
pub use model::RegressionModel;
pub use scaler::StandardScaler;
