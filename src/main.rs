use color_eyre::eyre::{self, WrapErr};
use database::{DatabaseGenerator, DatabaseLoader, RulesLoader};
use env_logger::Env;
use gm_core::{RosterService, TradeService, WeekSimulator};
use log::info;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use web::{GameAppData, LeagueServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_PORT: u16 = 18000;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let rules_dir = env::var_os("GM_RULES_DIR").map(PathBuf::from);
    let rules = RulesLoader::load(rules_dir.as_deref()).wrap_err("failed to load rules")?;

    let port = match env::var("GM_PORT") {
        Ok(raw) => raw.parse().wrap_err_with(|| format!("invalid GM_PORT '{}'", raw))?,
        Err(_) => DEFAULT_PORT,
    };

    let now = Instant::now();

    let database = DatabaseLoader::load().wrap_err("failed to load seed data")?;
    let league = DatabaseGenerator::generate(&database, &rules.game).wrap_err("failed to build league")?;

    info!(
        "database loaded: {} teams, {} players in {} ms",
        league.teams.len(),
        league.players.len(),
        now.elapsed().as_millis()
    );

    let data = GameAppData::new(
        league,
        RosterService::new(rules.game.clone()),
        TradeService::new(rules.game.clone(), rules.trade.clone()),
        WeekSimulator::new(rules.simulation.clone()),
        rules.trade.current_year,
    );

    LeagueServer::new(data, port).run().await.wrap_err("server stopped")?;

    Ok(())
}
