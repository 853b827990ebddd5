use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
}

impl Team {
    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id,
            name: self.name.clone(),
            abbreviation: self.abbreviation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
}

/// Team strength as fed into score generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamRating {
    pub team_id: u32,
    pub rating: f64,
}

impl TeamRating {
    pub const DEFAULT_RATING: f64 = 60.0;

    /// Average `overall_rating` of the given active players,
    /// or [`Self::DEFAULT_RATING`] for an empty roster.
    pub fn from_ratings(team_id: u32, ratings: impl IntoIterator<Item = u32>) -> Self {
        let (total, count) = ratings
            .into_iter()
            .fold((0u64, 0u64), |(total, count), rating| (total + rating as u64, count + 1));

        let rating = if count == 0 {
            Self::DEFAULT_RATING
        } else {
            total as f64 / count as f64
        };

        TeamRating { team_id, rating }
    }
}
