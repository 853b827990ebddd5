pub mod routes;

use crate::player::PlayerDto;
use crate::{ApiResult, GameAppData};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gm_core::{Player, PlayerStatus};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerListQuery {
    pub team_id: Option<u32>,
    pub status: Option<PlayerStatus>,
}

pub async fn player_list_action(
    State(state): State<GameAppData>,
    query: Result<Query<PlayerListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;

    let guard = state.data.read().await;

    let mut players: Vec<&Player> = guard
        .players
        .values()
        .filter(|p| query.team_id.is_none_or(|team_id| p.team_id == Some(team_id)))
        .filter(|p| query.status.is_none_or(|status| p.status == status))
        .collect();

    players.sort_by(|a, b| b.overall_rating.cmp(&a.overall_rating).then_with(|| a.name.cmp(&b.name)));

    let players: Vec<PlayerDto> = players.into_iter().map(PlayerDto::from).collect();

    Ok(Json(players))
}
