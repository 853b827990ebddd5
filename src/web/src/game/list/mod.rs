pub mod routes;

use crate::game::GameDto;
use crate::{ApiResult, GameAppData};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use gm_core::LeagueResult;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GameListQuery {
    pub week: Option<u32>,
    pub team_id: Option<u32>,
}

pub async fn game_list_action(
    State(state): State<GameAppData>,
    query: Result<Query<GameListQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;

    let guard = state.data.read().await;

    let games = guard
        .games_filtered(query.week, query.team_id)
        .into_iter()
        .map(|game| GameDto::new(&guard, game))
        .collect::<LeagueResult<Vec<_>>>()?;

    Ok(Json(games))
}
