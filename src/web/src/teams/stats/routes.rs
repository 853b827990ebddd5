use crate::GameAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new().route("/teams/{team_id}/stats", get(super::team_stats_action))
}
