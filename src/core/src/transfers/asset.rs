use crate::club::{DraftPick, Player};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One unit of a trade as named in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TradeAsset {
    Player {
        #[serde(alias = "playerId")]
        player_id: u32,
    },
    Pick {
        year: u32,
        #[serde(alias = "draft_round")]
        round: u32,
    },
}

impl Display for TradeAsset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeAsset::Player { player_id } => write!(f, "player {}", player_id),
            TradeAsset::Pick { year, round } => write!(f, "{} round {} pick", year, round),
        }
    }
}

/// Resolved players and picks moving in one direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradePackage {
    pub players: Vec<Player>,
    pub picks: Vec<DraftPick>,
}

impl TradePackage {
    /// Players that count against the sending team's active roster.
    pub fn active_players(&self) -> u32 {
        self.players.iter().filter(|p| p.is_active()).count() as u32
    }

    pub fn active_salary(&self) -> i64 {
        self.players.iter().filter(|p| p.is_active()).map(|p| p.salary).sum()
    }

    pub fn salary(&self) -> i64 {
        self.players.iter().map(|p| p.salary).sum()
    }
}
