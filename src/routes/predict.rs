use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::InferenceEngine;
use crate::models::{ErrorResponse, HealthResponse, PredictRequest, PredictResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: InferenceEngine,
}

/// Configure all prediction-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Artifacts are loaded before the server binds, so a responding
    // process with the expected feature width is healthy
    let status = if state.engine.width() == crate::core::FEATURE_COUNT {
        "healthy"
    } else {
        "degraded"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Predict endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "gender": "female",
///   "age": 25,
///   "heightCm": 170,
///   "weightKg": 70,
///   "durationMin": 30,
///   "heartRate": 90,
///   "bodyTemp": 37.0
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    // Validate request against the widget bounds
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::debug!(
        "Estimating calories: gender={}, age={}, duration={}min, heart_rate={}bpm",
        req.gender,
        req.age,
        req.duration_min,
        req.heart_rate
    );

    match state.engine.estimate(&req) {
        Ok(calories) => {
            tracing::info!(
                "Estimated {:.2} kcal for a {}min workout",
                calories,
                req.duration_min
            );
            HttpResponse::Ok().json(PredictResponse { calories })
        }
        Err(e) => {
            tracing::error!("Error in prediction: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Prediction failed".to_string(),
                message: format!("Error in prediction: {}", e),
                status_code: 500,
            })
        }
    }
}
