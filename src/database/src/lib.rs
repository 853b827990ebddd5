mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use gm_core::LeagueResult;

pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
    pub players: Vec<PlayerEntity>,
    pub picks: Vec<DraftPickEntity>,
    pub schedule: Vec<GameEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> LeagueResult<DatabaseEntity> {
        Ok(DatabaseEntity {
            teams: TeamLoader::load()?,
            players: PlayerLoader::load()?,
            picks: DraftPickLoader::load()?,
            schedule: ScheduleLoader::load()?,
        })
    }
}
