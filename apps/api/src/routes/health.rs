use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health, GET /api/health
/// Returns a liveness object with the deployment environment.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "environment": state.config.environment,
    }))
}

/// GET /
/// Service name, version, and the endpoints it serves.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "name": "Skillmatch Resume Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /api/health",
            "analyze": "POST /api/analyze",
            "quality": "POST /api/analyze/quality"
        }
    }))
}
