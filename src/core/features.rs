use crate::models::PredictRequest;

/// Width of the feature vector the artifacts were fitted to
pub const FEATURE_COUNT: usize = 7;

/// Assemble the fixed-order feature vector from a request
///
/// The order is the one the scaler and model were trained on and must never
/// change: {gender, age, height, weight, duration, heart_rate, body_temp}.
///
/// # Arguments
/// * `request` - The validated prediction request
///
/// # Returns
/// A vector of exactly `FEATURE_COUNT` values
#[inline]
pub fn feature_vector(request: &PredictRequest) -> [f64; FEATURE_COUNT] {
    [
        request.gender.as_feature(),
        request.age as f64,
        request.height_cm as f64,
        request.weight_kg as f64,
        request.duration_min as f64,
        request.heart_rate as f64,
        request.body_temp,
    ]
}
