pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gm_core::BoxScoreView;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct BoxScoreGetRequest {
    pub game_id: u32,
}

#[derive(Deserialize)]
pub struct WeekBoxScoreRequest {
    pub week: u32,
}

#[derive(Deserialize)]
pub struct BoxScoreListQuery {
    pub week: Option<u32>,
    pub team_id: Option<u32>,
}

pub async fn box_score_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<BoxScoreGetRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    Ok(Json(BoxScoreView::build(&guard, route_params.game_id)?))
}

pub async fn box_score_list_action(
    State(state): State<GameAppData>,
    query: Result<Query<BoxScoreListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;

    let guard = state.data.read().await;

    Ok(Json(BoxScoreView::for_week(&guard, query.week, query.team_id)?))
}

pub async fn week_box_score_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<WeekBoxScoreRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    Ok(Json(BoxScoreView::for_week(&guard, Some(route_params.week), None)?))
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_box_score_after_detailed_week() {
        let state = testing::state();
        testing::post(&state, "/simulate-week", json!({ "week": 1, "mode": "detailed" })).await;

        let (status, body) = testing::get(&state, "/games/1/box-score").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["game_id"], 1);
        assert!(!body["players"].as_array().unwrap().is_empty());
        assert!(body["key_players"].as_array().unwrap().len() <= 4);
        assert_eq!(
            body["plays"].as_array().unwrap().len(),
            body["play_by_play"].as_array().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_box_scores_default_to_latest_played_week() {
        let state = testing::state();

        let (_, empty) = testing::get(&state, "/games/box-scores").await;
        assert!(empty.as_array().unwrap().is_empty());

        testing::post(&state, "/simulate-week", json!({ "week": 1 })).await;

        let (status, body) = testing::get(&state, "/games/box-scores?team_id=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["week"], 1);
    }

    #[tokio::test]
    async fn test_week_box_scores() {
        let state = testing::state();
        let (status, body) = testing::get(&state, "/games/week/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }
}
