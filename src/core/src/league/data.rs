use crate::club::{DraftPick, Player, PlayerStatus, Position, Team, TeamRating};
use crate::league::Game;
use crate::r#match::{ScoringPlay, TeamGameStats};
use crate::{LeagueError, LeagueResult};
use std::collections::BTreeMap;

/// In-process league store: teams, players, picks, the schedule and the
/// per-game rows produced by simulation.
///
/// Mutating operations go through [`LeagueData::atomically`], which runs them
/// on a working copy and commits only on success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueData {
    pub teams: BTreeMap<u32, Team>,
    pub players: BTreeMap<u32, Player>,
    pub picks: BTreeMap<u32, DraftPick>,
    pub games: BTreeMap<u32, Game>,
    pub game_stats: BTreeMap<u32, Vec<TeamGameStats>>,
    pub play_logs: BTreeMap<u32, Vec<ScoringPlay>>,
}

impl LeagueData {
    pub fn new(teams: Vec<Team>, players: Vec<Player>, picks: Vec<DraftPick>, games: Vec<Game>) -> Self {
        LeagueData {
            teams: teams.into_iter().map(|t| (t.id, t)).collect(),
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            picks: picks.into_iter().map(|p| (p.id, p)).collect(),
            games: games.into_iter().map(|g| (g.id, g)).collect(),
            game_stats: BTreeMap::new(),
            play_logs: BTreeMap::new(),
        }
    }

    /// Runs `op` against a working copy and replaces `self` with it only when
    /// `op` succeeds. On error nothing performed by `op` is visible.
    pub fn atomically<T>(&mut self, op: impl FnOnce(&mut LeagueData) -> LeagueResult<T>) -> LeagueResult<T> {
        let mut working = self.clone();
        let result = op(&mut working)?;
        *self = working;
        Ok(result)
    }

    /// Runs `op` against a throwaway copy; the store is never touched.
    pub fn dry_run<T>(&self, op: impl FnOnce(&mut LeagueData) -> LeagueResult<T>) -> LeagueResult<T> {
        let mut working = self.clone();
        op(&mut working)
    }

    // Teams

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.get(&team_id)
    }

    pub fn require_team(&self, team_id: u32) -> LeagueResult<&Team> {
        self.team(team_id)
            .ok_or_else(|| LeagueError::not_found(format!("Team {} not found", team_id)))
    }

    pub fn teams_by_name(&self) -> Vec<&Team> {
        let mut teams: Vec<&Team> = self.teams.values().collect();
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        teams
    }

    // Players

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.get(&player_id)
    }

    pub fn player_mut(&mut self, player_id: u32) -> LeagueResult<&mut Player> {
        self.players
            .get_mut(&player_id)
            .ok_or_else(|| LeagueError::not_found(format!("Player {} not found", player_id)))
    }

    /// Every player rostered by the team regardless of status.
    pub fn team_players(&self, team_id: u32) -> Vec<&Player> {
        self.players
            .values()
            .filter(|p| p.team_id == Some(team_id))
            .collect()
    }

    /// Active players of a team ordered by depth chart (unslotted last), then id.
    pub fn active_roster(&self, team_id: u32) -> Vec<&Player> {
        let mut roster: Vec<&Player> = self
            .players
            .values()
            .filter(|p| p.is_active_on(team_id))
            .collect();

        roster.sort_by_key(|p| (p.depth_rank(), p.id));
        roster
    }

    pub fn roster_size(&self, team_id: u32) -> u32 {
        self.players.values().filter(|p| p.is_active_on(team_id)).count() as u32
    }

    /// Summed salary of the team's active players.
    pub fn payroll(&self, team_id: u32) -> i64 {
        self.players
            .values()
            .filter(|p| p.is_active_on(team_id))
            .map(|p| p.salary)
            .sum()
    }

    pub fn team_rating(&self, team_id: u32) -> TeamRating {
        TeamRating::from_ratings(
            team_id,
            self.players
                .values()
                .filter(|p| p.is_active_on(team_id))
                .map(|p| p.overall_rating),
        )
    }

    /// Top-ranked active player at a position.
    pub fn depth_leader(&self, team_id: u32, position: Position) -> Option<&Player> {
        self.players
            .values()
            .filter(|p| p.is_active_on(team_id) && p.position == position)
            .min_by_key(|p| (p.depth_rank(), p.id))
    }

    /// Active players at a position holding a depth chart slot.
    pub fn charted_depth(&self, team_id: u32, position: Position) -> u32 {
        self.players
            .values()
            .filter(|p| p.is_active_on(team_id) && p.position == position && p.is_charted())
            .count() as u32
    }

    /// Next free depth order at a position: one past the deepest slot held by
    /// any player of the team at that position, and never below 1.
    pub fn next_depth_order(&self, team_id: u32, position: Position) -> u32 {
        let deepest = self
            .players
            .values()
            .filter(|p| p.team_id == Some(team_id) && p.position == position)
            .filter_map(|p| p.depth_chart_order)
            .max()
            .unwrap_or(0);

        (deepest + 1).max(1)
    }

    pub fn free_agents(&self, year: Option<u32>) -> Vec<&Player> {
        let mut agents: Vec<&Player> = self
            .players
            .values()
            .filter(|p| p.status == PlayerStatus::FreeAgent)
            .filter(|p| match (year, p.free_agent_year) {
                (Some(year), Some(fa_year)) => fa_year == year,
                _ => true,
            })
            .collect();

        agents.sort_by(|a, b| b.overall_rating.cmp(&a.overall_rating).then_with(|| a.name.cmp(&b.name)));
        agents
    }

    /// Active quarterbacks rated at or above `threshold`.
    pub fn elite_quarterbacks(&self, team_id: u32, threshold: u32) -> u32 {
        self.players
            .values()
            .filter(|p| p.is_active_on(team_id) && p.position == Position::QB && p.overall_rating >= threshold)
            .count() as u32
    }

    // Draft picks

    pub fn owned_pick(&self, team_id: u32, year: u32, round: u32) -> Option<&DraftPick> {
        self.picks
            .values()
            .find(|p| p.team_id == team_id && p.year == year && p.round == round)
    }

    // Games

    pub fn game(&self, game_id: u32) -> Option<&Game> {
        self.games.get(&game_id)
    }

    pub fn require_game(&self, game_id: u32) -> LeagueResult<&Game> {
        self.game(game_id)
            .ok_or_else(|| LeagueError::not_found(format!("Game {} not found", game_id)))
    }

    pub fn game_mut(&mut self, game_id: u32) -> LeagueResult<&mut Game> {
        self.games
            .get_mut(&game_id)
            .ok_or_else(|| LeagueError::not_found(format!("Game {} not found", game_id)))
    }

    pub fn games_in_week(&self, week: u32) -> Vec<&Game> {
        self.games.values().filter(|g| g.week == week).collect()
    }

    pub fn games_filtered(&self, week: Option<u32>, team_id: Option<u32>) -> Vec<&Game> {
        let mut games: Vec<&Game> = self
            .games
            .values()
            .filter(|g| week.is_none_or(|week| g.week == week))
            .filter(|g| team_id.is_none_or(|team_id| g.involves(team_id)))
            .collect();

        games.sort_by_key(|g| (g.week, g.id));
        games
    }

    /// Latest week with at least one played game.
    pub fn latest_played_week(&self) -> Option<u32> {
        self.games.values().filter(|g| g.is_played()).map(|g| g.week).max()
    }

    /// Replaces per-game team/player stat rows.
    pub fn replace_game_stats(&mut self, game_id: u32, stats: Vec<TeamGameStats>) {
        self.game_stats.insert(game_id, stats);
    }

    /// Replaces the per-game play log; an empty log removes it.
    pub fn replace_play_log(&mut self, game_id: u32, plays: Vec<ScoringPlay>) {
        if plays.is_empty() {
            self.play_logs.remove(&game_id);
        } else {
            self.play_logs.insert(game_id, plays);
        }
    }
}
