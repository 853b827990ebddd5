use crate::club::{DraftPick, Player};
use crate::rules::KeyValues;
use crate::{LeagueError, LeagueResult};

const PICK_DECAY_PER_YEAR: f64 = 0.85;
const LATE_PICK_VALUE: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct TradeSettings {
    pub current_year: u32,
    pub fairness_tolerance: f64,
}

impl Default for TradeSettings {
    fn default() -> Self {
        TradeSettings {
            current_year: 2025,
            fairness_tolerance: 8.0,
        }
    }
}

impl TradeSettings {
    pub fn from_key_values(values: &KeyValues) -> LeagueResult<Self> {
        let defaults = TradeSettings::default();

        let settings = TradeSettings {
            current_year: values.get_or("current_year", defaults.current_year)?,
            fairness_tolerance: values.get_or("fairness_tolerance", defaults.fairness_tolerance)?,
        };

        if !(settings.fairness_tolerance >= 0.0) {
            return Err(LeagueError::Config(format!(
                "fairness_tolerance must be non-negative, got {}",
                settings.fairness_tolerance
            )));
        }

        Ok(settings)
    }
}

/// Display-only worth of trade packages.
#[derive(Debug, Clone)]
pub struct TradeValuation {
    settings: TradeSettings,
}

impl TradeValuation {
    pub fn new(settings: TradeSettings) -> Self {
        TradeValuation { settings }
    }

    fn round_value(round: u32) -> f64 {
        match round {
            1 => 20.0,
            2 => 12.0,
            3 => 7.0,
            4 => 4.0,
            5 => 2.5,
            6 => 1.5,
            7 => 1.0,
            _ => LATE_PICK_VALUE,
        }
    }

    /// Round value discounted by 0.85 for every year past the current one.
    pub fn pick_value(&self, pick: &DraftPick) -> f64 {
        let years_out = pick.year.saturating_sub(self.settings.current_year);
        Self::round_value(pick.round) * PICK_DECAY_PER_YEAR.powi(years_out as i32)
    }

    pub fn player_value(&self, player: &Player) -> f64 {
        player.overall_rating as f64
    }

    pub fn package_value<'a>(
        &self,
        players: impl IntoIterator<Item = &'a Player>,
        picks: impl IntoIterator<Item = &'a DraftPick>,
    ) -> f64 {
        let players: f64 = players.into_iter().map(|p| self.player_value(p)).sum();
        let picks: f64 = picks.into_iter().map(|p| self.pick_value(p)).sum();

        players + picks
    }

    /// Optional strictness check; accepted trades never depend on it unless
    /// a caller asks for it.
    pub fn check_fairness(&self, offer_value: f64, request_value: f64) -> LeagueResult<()> {
        let gap = (request_value - offer_value).abs();

        if gap > self.settings.fairness_tolerance {
            let direction = if request_value > offer_value { "more" } else { "less" };

            return Err(LeagueError::rule(format!(
                "Trade rejected: value gap is too large. Team A would receive {:.1} {} value than it sends (tolerance {:.1}).",
                gap, direction, self.settings.fairness_tolerance
            )));
        }

        Ok(())
    }
}
