pub mod routes;

use crate::{ApiResult, GameAppData};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gm_core::{PlayerStatus, Position, Team};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TeamGetRequest {
    pub team_id: u32,
}

#[derive(Serialize)]
pub struct TeamGetDto {
    #[serde(flatten)]
    pub team: Team,
    pub payroll: i64,
    pub cap_space: i64,
    pub roster_size: u32,
    pub roster: Vec<TeamPlayerDto>,
}

#[derive(Serialize)]
pub struct TeamPlayerDto {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub overall_rating: u32,
    pub age: u32,
    pub depth_chart_position: Option<String>,
    pub status: PlayerStatus,
}

pub async fn team_get_action(
    State(state): State<GameAppData>,
    Path(route_params): Path<TeamGetRequest>,
) -> ApiResult<impl IntoResponse> {
    let guard = state.data.read().await;

    let team = guard.require_team(route_params.team_id)?.clone();

    let mut players = guard.team_players(team.id);
    players.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(b.overall_rating.cmp(&a.overall_rating))
    });

    let roster = players
        .into_iter()
        .map(|p| TeamPlayerDto {
            id: p.id,
            name: p.name.clone(),
            position: p.position,
            overall_rating: p.overall_rating,
            age: p.age,
            depth_chart_position: p.depth_chart_position.clone(),
            status: p.status,
        })
        .collect();

    let payroll = guard.payroll(team.id);

    Ok(Json(TeamGetDto {
        payroll,
        cap_space: state.roster.rules().salary_cap - payroll,
        roster_size: guard.roster_size(team.id),
        roster,
        team,
    }))
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_team_with_roster() {
        let state = testing::state();
        let (status, body) = testing::get(&state, "/teams/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["abbreviation"], "BUF");
        assert_eq!(body["roster"].as_array().unwrap().len(), 46);
        assert_eq!(body["roster_size"], 46);
        assert!(body["cap_space"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_unknown_team_is_not_found() {
        let state = testing::state();
        let (status, body) = testing::get(&state, "/teams/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().is_some());
    }
}
