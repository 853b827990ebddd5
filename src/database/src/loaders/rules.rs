use gm_core::{GameRules, KeyValues, LeagueError, LeagueResult, SimulationRules, TradeSettings};
use log::info;
use std::fs;
use std::path::Path;

const GAME_RULES_FILE: &str = "GameRules.txt";
const SIMULATION_RULES_FILE: &str = "simulationrules.txt";

const STATIC_GAME_RULES: &str = include_str!("../data/GameRules.txt");
const STATIC_SIMULATION_RULES: &str = include_str!("../data/simulationrules.txt");

/// Every rule set the services are built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueRules {
    pub game: GameRules,
    pub simulation: SimulationRules,
    pub trade: TradeSettings,
}

pub struct RulesLoader;

impl RulesLoader {
    /// Loads both rules files from `dir`, falling back to the bundled copy
    /// of any file the directory does not hold.
    pub fn load(dir: Option<&Path>) -> LeagueResult<LeagueRules> {
        let game_text = Self::read(dir, GAME_RULES_FILE, STATIC_GAME_RULES)?;
        let simulation_text = Self::read(dir, SIMULATION_RULES_FILE, STATIC_SIMULATION_RULES)?;

        Self::parse(&game_text, &simulation_text)
    }

    pub fn parse(game_text: &str, simulation_text: &str) -> LeagueResult<LeagueRules> {
        let game_values = KeyValues::parse(game_text);
        let simulation_values = KeyValues::parse(simulation_text);

        Ok(LeagueRules {
            game: GameRules::from_key_values(&game_values)?,
            simulation: SimulationRules::from_key_values(&simulation_values)?,
            trade: TradeSettings::from_key_values(&game_values)?,
        })
    }

    fn read(dir: Option<&Path>, file: &str, bundled: &str) -> LeagueResult<String> {
        let Some(path) = dir.map(|d| d.join(file)).filter(|p| p.exists()) else {
            return Ok(bundled.to_string());
        };

        info!("loading rules from {}", path.display());

        fs::read_to_string(&path)
            .map_err(|e| LeagueError::Config(format!("failed to read {}: {}", path.display(), e)))
    }
}
