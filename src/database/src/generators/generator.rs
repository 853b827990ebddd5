use crate::loaders::{DraftPickEntity, GameEntity, PlayerEntity, TeamEntity};
use crate::DatabaseEntity;
use gm_core::{
    DraftPick, Game, GameRules, InjuryStatus, LeagueData, LeagueError, LeagueResult, Player, PlayerStatus, Position,
    Team,
};
use log::debug;
use std::collections::BTreeSet;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity, rules: &GameRules) -> LeagueResult<LeagueData> {
        let teams: Vec<Team> = data.teams.iter().map(Self::generate_team).collect();
        let team_ids: BTreeSet<u32> = teams.iter().map(|team| team.id).collect();

        let players = data
            .players
            .iter()
            .map(|player| Self::generate_player(player, &team_ids, rules))
            .collect::<LeagueResult<Vec<Player>>>()?;

        let picks = data
            .picks
            .iter()
            .map(|pick| Self::generate_pick(pick, &team_ids))
            .collect::<LeagueResult<Vec<DraftPick>>>()?;

        let games = data
            .schedule
            .iter()
            .map(|game| Self::generate_game(game, &team_ids))
            .collect::<LeagueResult<Vec<Game>>>()?;

        debug!(
            "generated league: {} teams, {} players, {} picks, {} games",
            teams.len(),
            players.len(),
            picks.len(),
            games.len()
        );

        Ok(LeagueData::new(teams, players, picks, games))
    }

    fn generate_team(team: &TeamEntity) -> Team {
        Team {
            id: team.id,
            name: team.name.clone(),
            abbreviation: team.abbreviation.clone(),
            conference: team.conference.clone(),
            division: team.division.clone(),
        }
    }

    fn generate_player(player: &PlayerEntity, team_ids: &BTreeSet<u32>, rules: &GameRules) -> LeagueResult<Player> {
        let position: Position = player.position.parse().map_err(|_| {
            LeagueError::Config(format!("player {} has unknown position '{}'", player.id, player.position))
        })?;

        if let Some(team_id) = player.team_id {
            Self::require_team(team_ids, team_id, || format!("player {}", player.id))?;
        }

        let (status, default_years) = match player.team_id {
            Some(_) => (PlayerStatus::Active, rules.max_contract_years),
            None => (PlayerStatus::FreeAgent, 1),
        };

        // Only rostered players hold a depth slot.
        let depth_chart_order = player.team_id.and(player.depth_chart_order).filter(|order| *order > 0);

        Ok(Player {
            id: player.id,
            name: player.name.clone(),
            position,
            team_id: player.team_id,
            overall_rating: player.overall_rating,
            age: player.age,
            status,
            salary: player
                .salary
                .unwrap_or_else(|| rules.salary_for_rating(player.overall_rating)),
            contract_years: player.contract_years.unwrap_or(default_years),
            free_agent_year: player.team_id.map_or(player.free_agent_year, |_| None),
            depth_chart_position: depth_chart_order.map(|order| format!("{}{}", position, order)),
            depth_chart_order,
            injury_status: InjuryStatus::Healthy,
        })
    }

    fn generate_pick(pick: &DraftPickEntity, team_ids: &BTreeSet<u32>) -> LeagueResult<DraftPick> {
        Self::require_team(team_ids, pick.team_id, || format!("pick {}", pick.id))?;

        let original_team_id = pick.original_team_id.unwrap_or(pick.team_id);
        Self::require_team(team_ids, original_team_id, || format!("pick {}", pick.id))?;

        Ok(DraftPick {
            id: pick.id,
            team_id: pick.team_id,
            year: pick.year,
            round: pick.round,
            original_team_id,
        })
    }

    fn generate_game(game: &GameEntity, team_ids: &BTreeSet<u32>) -> LeagueResult<Game> {
        if game.home_team_id == game.away_team_id {
            return Err(LeagueError::Config(format!(
                "game {} pairs team {} with itself",
                game.id, game.home_team_id
            )));
        }

        Self::require_team(team_ids, game.home_team_id, || format!("game {}", game.id))?;
        Self::require_team(team_ids, game.away_team_id, || format!("game {}", game.id))?;

        Ok(Game::new(game.id, game.week, game.home_team_id, game.away_team_id))
    }

    fn require_team(team_ids: &BTreeSet<u32>, team_id: u32, owner: impl FnOnce() -> String) -> LeagueResult<()> {
        if team_ids.contains(&team_id) {
            return Ok(());
        }

        Err(LeagueError::Config(format!("{} references unknown team {}", owner(), team_id)))
    }
}
