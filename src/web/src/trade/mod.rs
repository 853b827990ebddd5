pub mod routes;

use crate::{ApiError, ApiResult, GameAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gm_core::{LeagueError, TradeRequest, TradeResult};
use serde::Serialize;

pub use routes::trade_routes;

#[derive(Serialize)]
pub struct TradeValidationDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TradeResult>,
}

#[derive(Serialize)]
pub struct TradeExecutionDto {
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub result: TradeResult,
}

/// Dry run: a rejection is a regular answer, not an error response.
pub async fn trade_validate_action(
    State(state): State<GameAppData>,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let guard = state.data.read().await;

    let dto = match state.trades.propose_trade(&guard, &request) {
        Ok(result) => TradeValidationDto {
            success: true,
            message: "Trade passes validation".to_string(),
            result: Some(result),
        },
        Err(err @ (LeagueError::Internal(_) | LeagueError::Config(_))) => return Err(ApiError::from(err)),
        Err(err) => TradeValidationDto {
            success: false,
            message: err.to_string(),
            result: None,
        },
    };

    Ok(Json(dto))
}

pub async fn trade_execute_action(
    State(state): State<GameAppData>,
    payload: Result<Json<TradeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let mut guard = state.data.write().await;

    let result = state.trades.execute_trade(&mut guard, &request)?;

    Ok(Json(TradeExecutionDto {
        success: true,
        message: "Trade executed successfully".to_string(),
        result,
    }))
}
