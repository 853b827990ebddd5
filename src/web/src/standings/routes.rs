use crate::GameAppData;
use axum::routing::get;
use axum::Router;

pub fn standings_routes() -> Router<GameAppData> {
    Router::new().route("/standings", get(super::standings_action))
}
