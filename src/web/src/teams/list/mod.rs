pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gm_core::Team;

pub async fn team_list_action(State(state): State<GameAppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    let teams: Vec<Team> = guard.teams_by_name().into_iter().cloned().collect();

    Ok(Json(teams))
}
