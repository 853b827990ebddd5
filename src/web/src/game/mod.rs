pub mod box_score;
pub mod get;
pub mod list;
pub mod simulate;

use crate::GameAppData;
use axum::Router;
use chrono::{DateTime, Utc};
use gm_core::{Game, LeagueData, LeagueResult};
use serde::Serialize;

pub fn game_routes() -> Router<GameAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(get::routes::routes())
        .merge(box_score::routes::routes())
        .merge(simulate::routes::routes())
}

/// Scheduled or played game joined with both team names.
#[derive(Serialize)]
pub struct GameDto {
    pub id: u32,
    pub week: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
    pub home_team_name: String,
    pub home_team_abbreviation: String,
    pub away_team_name: String,
    pub away_team_abbreviation: String,
}

impl GameDto {
    pub fn new(data: &LeagueData, game: &Game) -> LeagueResult<Self> {
        let home = data.require_team(game.home_team_id)?;
        let away = data.require_team(game.away_team_id)?;
        let played = game.is_played();

        Ok(GameDto {
            id: game.id,
            week: game.week,
            home_team_id: home.id,
            away_team_id: away.id,
            home_score: played.then_some(game.home_score),
            away_score: played.then_some(game.away_score),
            played_at: game.played_at,
            home_team_name: home.name.clone(),
            home_team_abbreviation: home.abbreviation.clone(),
            away_team_name: away.name.clone(),
            away_team_abbreviation: away.abbreviation.clone(),
        })
    }
}
