pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use gm_core::{BoxScoreView, GameBoxScore, SimulationMode};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

#[derive(Deserialize)]
pub struct SimulateWeekPayload {
    pub week: u32,
    #[serde(default)]
    pub mode: SimulationMode,
}

#[derive(Serialize)]
pub struct SimulateWeekDto {
    pub week: u32,
    pub mode: SimulationMode,
    pub summaries: Vec<BoxScoreView>,
    pub games: Vec<GameBoxScore>,
    pub play_by_play: Vec<String>,
}

pub async fn simulate_week_action(
    State(state): State<GameAppData>,
    payload: Result<Json<SimulateWeekPayload>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;

    let mut guard = Arc::clone(&state.data).write_owned().await;
    let simulator = Arc::clone(&state.simulator);

    let now = Instant::now();

    let (games, summaries) = tokio::task::spawn_blocking(move || {
        let games = simulator.simulate_week(&mut guard, payload.week, payload.mode, Utc::now())?;
        let summaries = BoxScoreView::for_week(&guard, Some(payload.week), None)?;

        Ok::<_, gm_core::LeagueError>((games, summaries))
    })
    .await??;

    debug!("week {} simulated in {} ms", payload.week, now.elapsed().as_millis());

    let play_by_play = games.iter().flat_map(GameBoxScore::play_by_play).collect();

    Ok(Json(SimulateWeekDto {
        week: payload.week,
        mode: payload.mode,
        summaries,
        games,
        play_by_play,
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_quick_week() {
        let state = testing::state();
        let (status, body) = testing::post(&state, "/simulate-week", json!({ "week": 1 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "quick");
        assert_eq!(body["games"].as_array().unwrap().len(), 4);
        assert_eq!(body["summaries"].as_array().unwrap().len(), 4);
        assert!(body["play_by_play"].as_array().unwrap().is_empty());

        let guard = state.data.read().await;
        assert!(guard.games_in_week(1).iter().all(|g| g.is_played()));
    }

    #[tokio::test]
    async fn test_detailed_week_carries_play_by_play() {
        let state = testing::state();
        let (status, body) = testing::post(&state, "/simulate-week", json!({ "week": 2, "mode": "detailed" })).await;

        assert_eq!(status, StatusCode::OK);

        for game in body["games"].as_array().unwrap() {
            let plays = game["plays"].as_array().unwrap();
            let points: i64 = plays.iter().map(|p| p["points"].as_i64().unwrap()).sum();
            let total = game["home_team"]["score"].as_i64().unwrap() + game["away_team"]["score"].as_i64().unwrap();

            assert_eq!(points, total);
        }

        let lines = body["play_by_play"].as_array().unwrap();
        assert!(!lines.is_empty());
        assert!(lines[0].as_str().unwrap().starts_with('Q'));
    }

    #[tokio::test]
    async fn test_response_keys_are_snake_case() {
        let state = testing::state();
        let (_, body) = testing::post(&state, "/simulate-week", json!({ "week": 3, "mode": "detailed" })).await;

        fn has_camel_case_key(value: &Value) -> bool {
            match value {
                Value::Object(map) => map
                    .iter()
                    .any(|(key, child)| key.chars().any(|c| c.is_ascii_uppercase()) || has_camel_case_key(child)),
                Value::Array(items) => items.iter().any(has_camel_case_key),
                _ => false,
            }
        }

        assert!(body["play_by_play"].is_array());
        assert!(body["games"][0]["team_stats"].is_array());
        assert!(body["summaries"][0]["key_players"].is_array());
        assert!(!has_camel_case_key(&body));
    }

    #[tokio::test]
    async fn test_replaying_a_week_is_rejected() {
        let state = testing::state();
        testing::post(&state, "/simulate-week", json!({ "week": 1 })).await;

        let (status, body) = testing::post(&state, "/simulate-week", json!({ "week": 1 })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().ends_with("already simulated"));
    }

    #[tokio::test]
    async fn test_unscheduled_week_is_not_found() {
        let state = testing::state();
        let (status, body) = testing::post(&state, "/simulate-week", json!({ "week": 40 })).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No games scheduled for week 40");
    }

    #[tokio::test]
    async fn test_unknown_mode_is_bad_request() {
        let state = testing::state();
        let (status, _) = testing::post(&state, "/simulate-week", json!({ "week": 1, "mode": "turbo" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
