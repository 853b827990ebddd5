use crate::{LeagueError, LeagueResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub week: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub home_score: i32,
    pub away_score: i32,
    pub played_at: Option<DateTime<Utc>>,
}

impl Game {
    pub fn new(id: u32, week: u32, home_team_id: u32, away_team_id: u32) -> Self {
        Game {
            id,
            week,
            home_team_id,
            away_team_id,
            home_score: 0,
            away_score: 0,
            played_at: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.played_at.is_some()
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Records the final score exactly once; a played game is immutable.
    pub fn mark_played(&mut self, home_score: i32, away_score: i32, played_at: DateTime<Utc>) -> LeagueResult<()> {
        if self.is_played() {
            return Err(LeagueError::precondition(format!("Game {} already simulated", self.id)));
        }

        self.home_score = home_score;
        self.away_score = away_score;
        self.played_at = Some(played_at);

        Ok(())
    }
}
