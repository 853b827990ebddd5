pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gm_core::StarterStats;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TeamStatsRequest {
    pub team_id: u32,
}

pub async fn team_stats_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<TeamStatsRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    Ok(Json(StarterStats::compute(&guard, route_params.team_id)?))
}
