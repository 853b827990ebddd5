pub mod free_agents;
pub mod get;
pub mod list;

use crate::GameAppData;
use axum::Router;
use gm_core::{Player, PlayerStatus, Position};
use serde::Serialize;

pub fn player_routes() -> Router<GameAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(get::routes::routes())
        .merge(free_agents::routes::routes())
}

#[derive(Serialize)]
pub struct PlayerDto {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub overall_rating: u32,
    pub age: u32,
    pub team_id: Option<u32>,
    pub salary: i64,
    pub contract_years: u32,
    pub free_agent_year: Option<u32>,
    pub depth_chart_position: Option<String>,
    pub status: PlayerStatus,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        PlayerDto {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            overall_rating: player.overall_rating,
            age: player.age,
            team_id: player.team_id,
            salary: player.salary,
            contract_years: player.contract_years,
            free_agent_year: player.free_agent_year,
            depth_chart_position: player.depth_chart_position.clone(),
            status: player.status,
        }
    }
}
