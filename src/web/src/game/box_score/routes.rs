use crate::GameAppData;
use axum::routing::get;
use axum::Router;

pub fn routes() -> Router<GameAppData> {
    Router::new()
        .route("/games/box-scores", get(super::box_score_list_action))
        .route("/games/week/{week}", get(super::week_box_score_action))
        .route("/games/{game_id}/box-score", get(super::box_score_get_action))
}
