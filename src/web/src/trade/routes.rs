use crate::GameAppData;
use axum::routing::post;
use axum::Router;

pub fn trade_routes() -> Router<GameAppData> {
    Router::new()
        .route("/trade/validate", post(super::trade_validate_action))
        .route("/trade", post(super::trade_execute_action))
}
