pub mod routes;

use crate::game::GameDto;
use crate::{ApiResult, GameAppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GameGetRequest {
    pub game_id: u32,
}

pub async fn game_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<GameGetRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    let game = guard.require_game(route_params.game_id)?;

    Ok(Json(GameDto::new(&guard, game)?))
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_get_game() {
        let state = testing::state();
        let (status, body) = testing::get(&state, "/games/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["home_team_abbreviation"], "BUF");
        assert_eq!(body["away_team_abbreviation"], "NYJ");
    }

    #[tokio::test]
    async fn test_missing_game() {
        let state = testing::state();
        let (status, body) = testing::get(&state, "/games/999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Game 999 not found");
    }
}
