mod picks;
mod players;
mod rules;
mod schedule;
mod teams;

pub use picks::*;
pub use players::*;
pub use rules::*;
pub use schedule::*;
pub use teams::*;

use gm_core::{LeagueError, LeagueResult};
use serde::de::DeserializeOwned;

pub(crate) fn parse_json<T: DeserializeOwned>(name: &str, json: &str) -> LeagueResult<Vec<T>> {
    serde_json::from_str(json).map_err(|e| LeagueError::Config(format!("failed to parse {}: {}", name, e)))
}
