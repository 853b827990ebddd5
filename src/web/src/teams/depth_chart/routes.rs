use crate::GameAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new().route(
        "/teams/{team_id}/depth-chart",
        get(super::depth_chart_get_action).post(super::depth_chart_update_action),
    )
}
