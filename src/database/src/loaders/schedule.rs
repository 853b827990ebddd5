use crate::loaders::parse_json;
use gm_core::LeagueResult;
use serde::Deserialize;

const STATIC_SCHEDULE_JSON: &str = include_str!("../data/schedule.json");

#[derive(Debug, Deserialize)]
pub struct GameEntity {
    pub id: u32,
    pub week: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
}

pub struct ScheduleLoader;

impl ScheduleLoader {
    pub fn load() -> LeagueResult<Vec<GameEntity>> {
        parse_json("schedule.json", STATIC_SCHEDULE_JSON)
    }
}
