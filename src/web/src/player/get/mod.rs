pub mod routes;

use crate::player::PlayerDto;
use crate::{ApiError, ApiResult, GameAppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerGetRequest {
    pub player_id: u32,
}

pub async fn player_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<PlayerGetRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    let player = guard
        .player(route_params.player_id)
        .ok_or_else(|| ApiError::NotFound(format!("Player with ID {} not found", route_params.player_id)))?;

    Ok(Json(PlayerDto::from(player)))
}
