use crate::club::Position;
use crate::rules::KeyValues;
use crate::{LeagueError, LeagueResult};
use std::collections::BTreeMap;

/// Roster-management rules: roster bounds, salary cap and competitive balance.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRules {
    pub roster_min: u32,
    pub roster_max: u32,
    pub salary_cap: i64,
    pub salary_base: i64,
    pub salary_per_rating: i64,
    pub max_contract_years: u32,
    pub elite_qb_rating: u32,
    pub max_elite_qbs: u32,
    pub min_position_depth: BTreeMap<Position, u32>,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            roster_min: 46,
            roster_max: 53,
            salary_cap: 210_000_000,
            salary_base: 750_000,
            salary_per_rating: 120_000,
            max_contract_years: 4,
            elite_qb_rating: 92,
            max_elite_qbs: 1,
            min_position_depth: BTreeMap::new(),
        }
    }
}

impl GameRules {
    pub fn from_key_values(values: &KeyValues) -> LeagueResult<Self> {
        let defaults = GameRules::default();

        let min_position_depth = match values.raw("min_position_depth") {
            Some(raw) => Self::parse_depth(raw)?,
            None => defaults.min_position_depth,
        };

        let rules = GameRules {
            roster_min: values.get_or("roster_min", defaults.roster_min)?,
            roster_max: values.get_or("roster_max", defaults.roster_max)?,
            salary_cap: values.get_or("salary_cap", defaults.salary_cap)?,
            salary_base: values.get_or("salary_base", defaults.salary_base)?,
            salary_per_rating: values.get_or("salary_per_rating", defaults.salary_per_rating)?,
            max_contract_years: values.get_or("max_contract_years", defaults.max_contract_years)?,
            elite_qb_rating: values.get_or("elite_qb_rating", defaults.elite_qb_rating)?,
            max_elite_qbs: values.get_or("max_elite_qbs", defaults.max_elite_qbs)?,
            min_position_depth,
        };

        rules.validate()?;

        Ok(rules)
    }

    pub fn validate(&self) -> LeagueResult<()> {
        if self.roster_min > self.roster_max {
            return Err(LeagueError::Config(format!(
                "roster_min ({}) exceeds roster_max ({})",
                self.roster_min, self.roster_max
            )));
        }
        if self.salary_cap < 0 || self.salary_base < 0 || self.salary_per_rating < 0 {
            return Err(LeagueError::Config(
                "salary_cap, salary_base and salary_per_rating must be non-negative".to_string(),
            ));
        }
        if self.max_contract_years < 1 {
            return Err(LeagueError::Config("max_contract_years must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Salary a player would command at the given rating.
    pub fn salary_for_rating(&self, overall_rating: u32) -> i64 {
        self.salary_base + self.salary_per_rating * overall_rating as i64
    }

    /// Parses `QB:2,RB:3,...`; empty parts are skipped.
    fn parse_depth(raw: &str) -> LeagueResult<BTreeMap<Position, u32>> {
        let mut depth = BTreeMap::new();

        for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
            let (position, count) = part.split_once(':').ok_or_else(|| {
                LeagueError::Config(format!("invalid min_position_depth entry '{}'", part))
            })?;

            let position: Position = position.trim().parse().map_err(|_| {
                LeagueError::Config(format!("unknown position '{}' in min_position_depth", position.trim()))
            })?;

            let count: u32 = count.trim().parse().map_err(|_| {
                LeagueError::Config(format!("invalid depth '{}' for {}", count.trim(), position))
            })?;

            depth.insert(position, count);
        }

        Ok(depth)
    }
}
