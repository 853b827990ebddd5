use crate::r#match::GameRng;
use rand::SeedableRng;

/// Deterministic per-game seed.
///
/// Bit-combines the three identifiers as `week << 40 ^ home << 20 ^ away`:
/// identical (week, home, away) triples always produce the same seed, and
/// all three fields survive without overlap while team ids stay below 2^20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeed(pub u64);

impl GameSeed {
    pub fn derive(week: u32, home_team_id: u32, away_team_id: u32) -> Self {
        GameSeed(((week as u64) << 40) ^ ((home_team_id as u64) << 20) ^ away_team_id as u64)
    }

    pub fn rng(&self) -> GameRng {
        GameRng::seed_from_u64(self.0)
    }
}
