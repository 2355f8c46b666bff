// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::Gender;
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, PredictResponse};
