use crate::league::LeagueData;
use crate::r#match::{PlayerStatLine, ScoringPlay, TeamGameStats};
use crate::club::{Position, Team};
use crate::LeagueResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

const KEY_PLAYERS_PER_TEAM: usize = 2;
const KEY_PLAYERS_TOTAL: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTotals {
    pub team_id: u32,
    pub name: String,
    pub abbreviation: String,
    pub points: i32,
    pub yards: u32,
    pub turnovers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerBoxLine {
    pub player_id: u32,
    pub team_id: u32,
    pub name: String,
    pub position: Position,
    pub stat_line: String,
    #[serde(skip)]
    pub weight: f64,
}

impl PlayerBoxLine {
    /// Compact summary such as `"285 PY, 2 PTD, 1 INT"` and a weight ranking
    /// how much the line mattered.
    pub fn from_stats(line: &PlayerStatLine) -> Self {
        let mut parts: Vec<String> = Vec::new();
        let mut weight = 0.0;

        let mut add = |value: f64, label: String, factor: f64| {
            if value != 0.0 {
                parts.push(label);
                weight += value * factor;
            }
        };

        add(line.passing_yards as f64, format!("{} PY", line.passing_yards), 1.0);
        add(line.passing_tds as f64, format!("{} PTD", line.passing_tds), 40.0);
        add(line.interceptions as f64, format!("{} INT", line.interceptions), -20.0);
        add(line.rushing_yards as f64, format!("{} RY", line.rushing_yards), 1.2);
        add(line.rushing_tds as f64, format!("{} RTD", line.rushing_tds), 40.0);
        add(line.receiving_yards as f64, format!("{} RecY", line.receiving_yards), 1.0);
        add(line.receiving_tds as f64, format!("{} RecTD", line.receiving_tds), 40.0);
        add(line.tackles as f64, format!("{} TKL", line.tackles), 5.0);
        add(line.sacks, format!("{:.1} SCK", line.sacks), 25.0);
        add(line.forced_turnovers as f64, format!("{} TO", line.forced_turnovers), 35.0);

        let stat_line = if parts.is_empty() {
            "No impact stats recorded".to_string()
        } else {
            parts.join(", ")
        };

        PlayerBoxLine {
            player_id: line.player_id,
            team_id: line.team_id,
            name: line.name.clone(),
            position: line.position,
            stat_line,
            weight,
        }
    }
}

/// Read-side box score of a played (or scheduled) game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxScoreView {
    pub game_id: u32,
    pub week: u32,
    pub played_at: Option<DateTime<Utc>>,
    pub home_team: TeamTotals,
    pub away_team: TeamTotals,
    pub players: Vec<PlayerBoxLine>,
    pub key_players: Vec<PlayerBoxLine>,
    pub plays: Vec<ScoringPlay>,
    pub play_by_play: Vec<String>,
}

impl BoxScoreView {
    pub fn build(data: &LeagueData, game_id: u32) -> LeagueResult<Self> {
        let game = data.require_game(game_id)?;
        let home = data.require_team(game.home_team_id)?;
        let away = data.require_team(game.away_team_id)?;

        let stats: &[TeamGameStats] = data.game_stats.get(&game_id).map(Vec::as_slice).unwrap_or_default();
        let plays = data.play_logs.get(&game_id).cloned().unwrap_or_default();

        let home_players = Self::ranked_lines(stats, home.id);
        let away_players = Self::ranked_lines(stats, away.id);

        let mut key_players: Vec<PlayerBoxLine> = home_players
            .iter()
            .take(KEY_PLAYERS_PER_TEAM)
            .chain(away_players.iter().take(KEY_PLAYERS_PER_TEAM))
            .cloned()
            .collect();
        key_players.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        key_players.truncate(KEY_PLAYERS_TOTAL);

        Ok(BoxScoreView {
            game_id: game.id,
            week: game.week,
            played_at: game.played_at,
            home_team: Self::totals(home, game.home_score, stats),
            away_team: Self::totals(away, game.away_score, stats),
            players: home_players.into_iter().chain(away_players).collect(),
            key_players,
            play_by_play: plays.iter().map(ScoringPlay::line).collect(),
            plays,
        })
    }

    /// Box scores of one week, defaulting to the latest week with a played
    /// game, optionally narrowed to one team.
    pub fn for_week(data: &LeagueData, week: Option<u32>, team_id: Option<u32>) -> LeagueResult<Vec<Self>> {
        let Some(week) = week.or_else(|| data.latest_played_week()) else {
            return Ok(Vec::new());
        };

        data.games_filtered(Some(week), team_id)
            .into_iter()
            .map(|game| Self::build(data, game.id))
            .collect()
    }

    fn totals(team: &Team, points: i32, stats: &[TeamGameStats]) -> TeamTotals {
        let team_stats = stats.iter().find(|s| s.team_id == team.id);

        TeamTotals {
            team_id: team.id,
            name: team.name.clone(),
            abbreviation: team.abbreviation.clone(),
            points,
            yards: team_stats.map(|s| s.total_yards).unwrap_or(0),
            turnovers: team_stats.map(|s| s.turnovers).unwrap_or(0),
        }
    }

    fn ranked_lines(stats: &[TeamGameStats], team_id: u32) -> Vec<PlayerBoxLine> {
        let mut lines: Vec<PlayerBoxLine> = stats
            .iter()
            .filter(|s| s.team_id == team_id)
            .flat_map(|s| s.players.iter())
            .map(PlayerBoxLine::from_stats)
            .collect();

        lines.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        lines
    }
}
