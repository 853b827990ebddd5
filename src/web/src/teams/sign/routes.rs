use crate::GameAppData;
use axum::routing::post;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/teams/{team_id}/sign", post(super::team_sign_action))
}
