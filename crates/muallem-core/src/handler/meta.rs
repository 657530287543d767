use axum::Json;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::handler::timestamp;

pub async fn home() -> Json<Value> {
    Json(json!({
        "service": "Muallem AI Backend",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/api/health",
            "chat": "/api/chat",
            "studio": "/api/studio/*",
            "process": "/api/process/*"
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "muallem",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": timestamp()
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
