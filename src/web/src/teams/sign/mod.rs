pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TeamSignRequest {
    pub team_id: u32,
}

#[derive(Deserialize)]
pub struct SignPlayerPayload {
    #[serde(alias = "playerId")]
    pub player_id: u32,
}

pub async fn team_sign_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<TeamSignRequest>,
    payload: Result<Json<SignPlayerPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;

    let mut guard = state.data.write().await;

    let result = state
        .roster
        .sign_free_agent(&mut guard, route_params.team_id, payload.player_id)?;

    Ok(Json(result))
}
