use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Which side of the matchup a play belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// Momentum label of a scoring play, seen from the scoring team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayImpact {
    TakesLead,
    ExtendsLead,
    CutsDeficit,
    TiesGame,
    KeepsPressure,
}

impl PlayImpact {
    /// Compares the scoring team's margin before and after the play.
    pub fn classify(home_before: i32, away_before: i32, home_after: i32, away_after: i32, side: Side) -> Self {
        if home_after == away_after {
            return PlayImpact::TiesGame;
        }

        let (before, after) = match side {
            Side::Home => (home_before - away_before, home_after - away_after),
            Side::Away => (away_before - home_before, away_after - home_after),
        };

        if before <= 0 && after > 0 {
            PlayImpact::TakesLead
        } else if before > 0 && after > before {
            PlayImpact::ExtendsLead
        } else if before < 0 && after < 0 {
            PlayImpact::CutsDeficit
        } else {
            PlayImpact::KeepsPressure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayImpact::TakesLead => "takes_lead",
            PlayImpact::ExtendsLead => "extends_lead",
            PlayImpact::CutsDeficit => "cuts_deficit",
            PlayImpact::TiesGame => "ties_game",
            PlayImpact::KeepsPressure => "keeps_pressure",
        }
    }
}

impl Display for PlayImpact {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}
