use crate::club::{Position, TeamSummary};
use crate::league::LeagueData;
use crate::r#match::PlayerStatLine;
use crate::LeagueResult;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SeasonTotals {
    pub passing_yards: u32,
    pub passing_tds: u32,
    pub interceptions: u32,
    pub rushing_yards: u32,
    pub rushing_tds: u32,
    pub receiving_yards: u32,
    pub receiving_tds: u32,
    pub tackles: u32,
    pub sacks: f64,
    pub forced_turnovers: u32,
}

impl SeasonTotals {
    fn add(&mut self, line: &PlayerStatLine) {
        self.passing_yards += line.passing_yards;
        self.passing_tds += line.passing_tds;
        self.interceptions += line.interceptions;
        self.rushing_yards += line.rushing_yards;
        self.rushing_tds += line.rushing_tds;
        self.receiving_yards += line.receiving_yards;
        self.receiving_tds += line.receiving_tds;
        self.tackles += line.tackles;
        self.sacks += line.sacks;
        self.forced_turnovers += line.forced_turnovers;
    }

    /// Averages rounded to two decimals; all zero before the first game.
    pub fn per_game(&self, games_played: u32) -> PerGameAverages {
        let average = |total: f64| {
            if games_played == 0 {
                0.0
            } else {
                (total / games_played as f64 * 100.0).round() / 100.0
            }
        };

        PerGameAverages {
            passing_yards: average(self.passing_yards as f64),
            passing_tds: average(self.passing_tds as f64),
            interceptions: average(self.interceptions as f64),
            rushing_yards: average(self.rushing_yards as f64),
            rushing_tds: average(self.rushing_tds as f64),
            receiving_yards: average(self.receiving_yards as f64),
            receiving_tds: average(self.receiving_tds as f64),
            tackles: average(self.tackles as f64),
            sacks: average(self.sacks),
            forced_turnovers: average(self.forced_turnovers as f64),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerGameAverages {
    pub passing_yards: f64,
    pub passing_tds: f64,
    pub interceptions: f64,
    pub rushing_yards: f64,
    pub rushing_tds: f64,
    pub receiving_yards: f64,
    pub receiving_tds: f64,
    pub tackles: f64,
    pub sacks: f64,
    pub forced_turnovers: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarterLine {
    pub player_id: u32,
    pub name: String,
    pub position: Position,
    pub depth_chart_position: Option<String>,
    pub games_played: u32,
    pub totals: SeasonTotals,
    pub per_game: PerGameAverages,
}

#[derive(Default)]
struct Aggregate {
    games: BTreeSet<u32>,
    totals: SeasonTotals,
}

/// Season-to-date production of a team's first-string players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarterStats {
    pub team: TeamSummary,
    pub starters: Vec<StarterLine>,
}

impl StarterStats {
    /// Only stat rows recorded for this team count; lines a player earned
    /// with a previous club stay there.
    pub fn compute(data: &LeagueData, team_id: u32) -> LeagueResult<Self> {
        let team = data.require_team(team_id)?.summary();

        let mut aggregates: BTreeMap<u32, Aggregate> = BTreeMap::new();

        for (game_id, stats) in &data.game_stats {
            for line in stats.iter().filter(|s| s.team_id == team_id).flat_map(|s| s.players.iter()) {
                let aggregate = aggregates.entry(line.player_id).or_default();
                aggregate.games.insert(*game_id);
                aggregate.totals.add(line);
            }
        }

        let mut starters: Vec<StarterLine> = data
            .active_roster(team_id)
            .into_iter()
            .filter(|p| p.depth_chart_order == Some(1))
            .map(|p| {
                let (games_played, totals) = aggregates
                    .get(&p.id)
                    .map(|a| (a.games.len() as u32, a.totals))
                    .unwrap_or_default();

                StarterLine {
                    player_id: p.id,
                    name: p.name.clone(),
                    position: p.position,
                    depth_chart_position: p.depth_chart_position.clone(),
                    games_played,
                    per_game: totals.per_game(games_played),
                    totals,
                }
            })
            .collect();

        starters.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.name.cmp(&b.name)));

        Ok(StarterStats { team, starters })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::data::fixtures::{league, player};
    use crate::r#match::TeamGameStats;
    use crate::LeagueError;

    fn team_stats(team_id: u32, players: Vec<PlayerStatLine>) -> TeamGameStats {
        TeamGameStats {
            team_id,
            points_for: 0,
            points_against: 0,
            total_yards: 0,
            turnovers: 0,
            players,
        }
    }

    fn passing(data: &LeagueData, player_id: u32, team_id: u32, yards: u32, tds: u32) -> PlayerStatLine {
        let mut line = PlayerStatLine::blank(data.player(player_id).unwrap(), team_id);
        line.passing_yards = yards;
        line.passing_tds = tds;
        line
    }

    #[test]
    fn test_starters_before_any_game() {
        let stats = StarterStats::compute(&league(), 1).unwrap();
        let ids: Vec<u32> = stats.starters.iter().map(|s| s.player_id).collect();

        assert_eq!(stats.team.abbreviation, "BUF");
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(stats.starters.iter().all(|s| s.games_played == 0));
        assert!(stats.starters.iter().all(|s| s.per_game == PerGameAverages::default()));
    }

    #[test]
    fn test_totals_and_rounded_averages() {
        let mut data = league();
        let first = passing(&data, 1, 1, 301, 2);
        let second = passing(&data, 1, 1, 200, 1);
        let third = passing(&data, 1, 1, 0, 0);
        data.replace_game_stats(1, vec![team_stats(1, vec![first]), team_stats(2, Vec::new())]);
        data.replace_game_stats(2, vec![team_stats(1, vec![second])]);
        data.replace_game_stats(7, vec![team_stats(1, vec![third])]);

        let stats = StarterStats::compute(&data, 1).unwrap();
        let qb = stats.starters.iter().find(|s| s.player_id == 1).unwrap();

        assert_eq!(qb.games_played, 3);
        assert_eq!(qb.totals.passing_yards, 501);
        assert_eq!(qb.totals.passing_tds, 3);
        assert_eq!(qb.per_game.passing_yards, 167.0);
        assert_eq!(qb.per_game.passing_tds, 1.0);
        assert_eq!(qb.depth_chart_position.as_deref(), Some("QB1"));

        // 1 sack over 3 games
        data.game_stats.get_mut(&1).unwrap()[0].players[0].sacks = 1.0;
        let stats = StarterStats::compute(&data, 1).unwrap();
        assert_eq!(stats.starters[0].per_game.sacks, 0.33);
    }

    #[test]
    fn test_rows_for_another_team_do_not_count() {
        let mut data = league();
        // player 1 recorded for team 2 before moving
        let old_club = passing(&data, 1, 2, 250, 3);
        data.replace_game_stats(1, vec![team_stats(2, vec![old_club])]);

        let stats = StarterStats::compute(&data, 1).unwrap();

        assert_eq!(stats.starters[0].games_played, 0);
        assert_eq!(stats.starters[0].totals, SeasonTotals::default());
    }

    #[test]
    fn test_backups_and_unslotted_players_are_not_starters() {
        let mut data = league();
        data.players.insert(12, player(12, "Unslotted", Position::TE, 75, Some(1), None, 0));

        let stats = StarterStats::compute(&data, 1).unwrap();

        assert!(stats.starters.iter().all(|s| s.player_id != 9 && s.player_id != 12));
    }

    #[test]
    fn test_unknown_team() {
        assert_eq!(
            StarterStats::compute(&league(), 9).unwrap_err(),
            LeagueError::not_found("Team 9 not found")
        );
    }
}
