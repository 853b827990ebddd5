use crate::club::{InjuryRecord, Team};
use crate::r#match::{ScoringPlay, TeamGameStats};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScore {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    pub score: i32,
}

impl TeamScore {
    pub fn new(team: &Team, score: i32) -> Self {
        TeamScore {
            id: team.id,
            name: team.name.clone(),
            abbreviation: team.abbreviation.clone(),
            score,
        }
    }
}

/// Everything one simulated game produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameBoxScore {
    pub game_id: u32,
    pub week: u32,
    pub seed: u64,
    pub played_at: DateTime<Utc>,
    pub home_team: TeamScore,
    pub away_team: TeamScore,
    pub team_stats: Vec<TeamGameStats>,
    pub injuries: Vec<InjuryRecord>,
    pub plays: Vec<ScoringPlay>,
}

impl GameBoxScore {
    /// Flattened `Q{q} {clock} - {description} (Score {h}-{a})` lines.
    pub fn play_by_play(&self) -> Vec<String> {
        self.plays.iter().map(ScoringPlay::line).collect()
    }
}
