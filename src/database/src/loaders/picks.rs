use crate::loaders::parse_json;
use gm_core::LeagueResult;
use serde::Deserialize;

const STATIC_PICKS_JSON: &str = include_str!("../data/picks.json");

#[derive(Debug, Deserialize)]
pub struct DraftPickEntity {
    pub id: u32,
    pub team_id: u32,
    pub year: u32,
    pub round: u32,
    #[serde(default)]
    pub original_team_id: Option<u32>,
}

pub struct DraftPickLoader;

impl DraftPickLoader {
    pub fn load() -> LeagueResult<Vec<DraftPickEntity>> {
        parse_json("picks.json", STATIC_PICKS_JSON)
    }
}
