use crate::loaders::parse_json;
use gm_core::LeagueResult;
use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

/// A player row as seeded. Players without a team are free agents.
#[derive(Debug, Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub team_id: Option<u32>,
    pub overall_rating: u32,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub contract_years: Option<u32>,
    #[serde(default)]
    pub depth_chart_order: Option<u32>,
    #[serde(default)]
    pub free_agent_year: Option<u32>,
}

fn default_age() -> u32 {
    25
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> LeagueResult<Vec<PlayerEntity>> {
        parse_json("players.json", STATIC_PLAYERS_JSON)
    }
}
