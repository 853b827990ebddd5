use crate::loaders::parse_json;
use gm_core::LeagueResult;
use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> LeagueResult<Vec<TeamEntity>> {
        parse_json("teams.json", STATIC_TEAMS_JSON)
    }
}
