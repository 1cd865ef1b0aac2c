use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner for quick by-hand checks.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Skill Gap Finder API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "skillgap-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
