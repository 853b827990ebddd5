use crate::GameAppData;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

async fn health_action() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn root_action() -> Json<Value> {
    Json(json!({ "message": "Gridiron GM backend is running" }))
}

pub fn common_routes() -> Router<GameAppData> {
    Router::new()
        .route("/", get(root_action))
        .route("/health", get(health_action))
}
