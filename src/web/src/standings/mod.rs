pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gm_core::Standings;

pub use routes::standings_routes;

pub async fn standings_action(State(state): State<GameAppData>) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    Ok(Json(Standings::compute(&guard)))
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_standings_after_a_week() {
        let state = testing::state();
        testing::post(&state, "/simulate-week", json!({ "week": 1 })).await;

        let (status, body) = testing::get(&state, "/standings").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updated_through_week"], 1);
        assert_eq!(body["divisions"].as_array().unwrap().len(), 2);

        let teams = body["teams"].as_array().unwrap();
        let games: u64 = teams
            .iter()
            .map(|t| t["wins"].as_u64().unwrap() + t["losses"].as_u64().unwrap() + t["ties"].as_u64().unwrap())
            .sum();

        assert_eq!(teams.len(), 8);
        assert_eq!(games, 8);
    }
}
