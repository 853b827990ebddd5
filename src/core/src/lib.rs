pub mod club;
pub mod error;
pub mod league;
pub mod r#match;
pub mod rules;
pub mod transfers;

pub use error::*;

pub use club::{
    DepthChartEntry, DepthChartRow, DepthSlot, DraftPick, InjuryEngine, InjuryRecord, InjuryReport, InjuryStatus,
    Player, PlayerStatus, PlayerSummary, Position, RosterService, SignResult, Team, TeamRating, TeamSummary,
};
pub use league::{Game, LeagueData, Standings, StarterStats};
pub use r#match::{BoxScoreView, GameBoxScore, ScoringPlay, SimulationMode, WeekSimulator};
pub use rules::{GameRules, KeyValues, SimulationRules};
pub use transfers::{TradeAsset, TradeRequest, TradeResult, TradeService, TradeSettings};
