pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gm_core::DepthChartEntry;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct DepthChartRequest {
    pub team_id: u32,
}

#[derive(Deserialize)]
pub struct DepthChartUpdatePayload {
    pub entries: Vec<DepthChartEntry>,
}

pub async fn depth_chart_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<DepthChartRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    let entries = state.roster.depth_chart(&guard, route_params.team_id)?;

    Ok(Json(json!({
        "team_id": route_params.team_id,
        "entries": entries,
    })))
}

pub async fn depth_chart_update_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<DepthChartRequest>,
    payload: Result<Json<DepthChartUpdatePayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;

    let mut guard = state.data.write().await;

    let updated = state
        .roster
        .update_depth_chart(&mut guard, route_params.team_id, &payload.entries)?;

    Ok(Json(json!({
        "team_id": route_params.team_id,
        "updated": updated,
    })))
}
