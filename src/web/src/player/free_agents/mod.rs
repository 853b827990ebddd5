pub mod routes;

use crate::player::PlayerDto;
use crate::{ApiResult, GameAppData};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct FreeAgentQuery {
    pub year: Option<u32>,
}

#[derive(Serialize)]
pub struct FreeAgentListDto {
    pub year: u32,
    pub players: Vec<PlayerDto>,
}

pub async fn free_agent_list_action(
    State(state): State<GameAppData>,
    query: Result<Query<FreeAgentQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let year = query.year.unwrap_or(state.current_year);

    let guard = state.data.read().await;

    let players = state
        .roster
        .list_free_agents(&guard, Some(year))
        .into_iter()
        .map(PlayerDto::from)
        .collect();

    Ok(Json(FreeAgentListDto { year, players }))
}
