use crate::GameAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/simulate-week", post(super::simulate_week_action))
}
