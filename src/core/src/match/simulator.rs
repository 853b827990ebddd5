use crate::club::InjuryEngine;
use crate::league::LeagueData;
use crate::r#match::{
    GameBoxScore, GameSeed, PlayLogBuilder, PlaySide, ScoreGenerator, StatGenerator, StatLeaders, TeamScore,
};
use crate::rules::SimulationRules;
use crate::{LeagueError, LeagueResult};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationMode {
    #[default]
    Quick,
    Detailed,
}

impl SimulationMode {
    pub fn is_detailed(&self) -> bool {
        matches!(self, SimulationMode::Detailed)
    }
}

/// Simulates scheduled games against a [`LeagueData`] store.
#[derive(Debug, Clone)]
pub struct WeekSimulator {
    rules: SimulationRules,
}

impl WeekSimulator {
    pub fn new(rules: SimulationRules) -> Self {
        WeekSimulator { rules }
    }

    pub fn rules(&self) -> &SimulationRules {
        &self.rules
    }

    /// Simulates every game of `week` in id order as one unit: either all
    /// games are recorded or the store is left untouched.
    pub fn simulate_week(
        &self,
        data: &mut LeagueData,
        week: u32,
        mode: SimulationMode,
        played_at: DateTime<Utc>,
    ) -> LeagueResult<Vec<GameBoxScore>> {
        data.atomically(|working| {
            let game_ids: Vec<u32> = working.games_in_week(week).iter().map(|g| g.id).collect();

            if game_ids.is_empty() {
                return Err(LeagueError::not_found(format!("No games scheduled for week {}", week)));
            }

            let results = game_ids
                .into_iter()
                .map(|game_id| self.simulate_game(working, game_id, mode, played_at))
                .collect::<LeagueResult<Vec<_>>>()?;

            info!("simulated week {} ({} games, {:?})", week, results.len(), mode);

            Ok(results)
        })
    }

    /// Simulates one game in place. Callers wanting rollback wrap this in
    /// [`LeagueData::atomically`].
    pub fn simulate_game(
        &self,
        data: &mut LeagueData,
        game_id: u32,
        mode: SimulationMode,
        played_at: DateTime<Utc>,
    ) -> LeagueResult<GameBoxScore> {
        let game = data.require_game(game_id)?.clone();

        if game.is_played() {
            return Err(LeagueError::precondition(format!("Game {} already simulated", game.id)));
        }

        let home_team = data.require_team(game.home_team_id)?.clone();
        let away_team = data.require_team(game.away_team_id)?.clone();

        let seed = GameSeed::derive(game.week, home_team.id, away_team.id);
        let mut rng = seed.rng();

        let home_rating = data.team_rating(home_team.id).rating;
        let away_rating = data.team_rating(away_team.id).rating;

        let (home_score, away_score) = ScoreGenerator::generate(&mut rng, home_rating, away_rating, &self.rules);

        debug!(
            "game {} week {}: {} {} - {} {} (seed {:#x})",
            game.id, game.week, home_team.abbreviation, home_score, away_score, away_team.abbreviation, seed.0
        );

        let (home_stats, home_injuries, away_stats, away_injuries) = {
            let home_roster = data.active_roster(home_team.id);
            let away_roster = data.active_roster(away_team.id);
            let home_leaders = StatLeaders::select(&home_roster);
            let away_leaders = StatLeaders::select(&away_roster);

            let home_stats =
                StatGenerator::generate_team_stats(&mut rng, home_team.id, &home_leaders, home_score, away_score, &self.rules);
            let home_injuries = InjuryEngine::roll(&mut rng, home_team.id, &home_leaders.candidates(), &self.rules);

            let away_stats =
                StatGenerator::generate_team_stats(&mut rng, away_team.id, &away_leaders, away_score, home_score, &self.rules);
            let away_injuries = InjuryEngine::roll(&mut rng, away_team.id, &away_leaders.candidates(), &self.rules);

            (home_stats, home_injuries, away_stats, away_injuries)
        };

        data.game_mut(game.id)?.mark_played(home_score, away_score, played_at)?;

        home_injuries.apply(data)?;
        away_injuries.apply(data)?;

        let plays = if mode.is_detailed() {
            PlayLogBuilder::build(
                &mut rng,
                PlaySide { team: &home_team, stats: &home_stats, score: home_score },
                PlaySide { team: &away_team, stats: &away_stats, score: away_score },
            )?
        } else {
            Vec::new()
        };

        let team_stats = vec![home_stats, away_stats];

        data.replace_game_stats(game.id, team_stats.clone());
        data.replace_play_log(game.id, plays.clone());

        Ok(GameBoxScore {
            game_id: game.id,
            week: game.week,
            seed: seed.0,
            played_at,
            home_team: TeamScore::new(&home_team, home_score),
            away_team: TeamScore::new(&away_team, away_score),
            team_stats,
            injuries: home_injuries.injuries.into_iter().chain(away_injuries.injuries).collect(),
            plays,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{InjuryStatus, Position};
    use crate::league::Game;
    use crate::league::data::fixtures::{league, player};
    use crate::r#match::{PlayerStatLine, Side};
    use chrono::TimeZone;

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 7, 17, 0, 0).unwrap()
    }

    fn simulator() -> WeekSimulator {
        WeekSimulator::new(SimulationRules::default())
    }

    #[test]
    fn test_simulate_week_records_results() {
        let mut data = league();

        let results = simulator()
            .simulate_week(&mut data, 1, SimulationMode::Quick, kickoff())
            .unwrap();

        assert_eq!(results.len(), 1);
        let result = &results[0];
        let game = data.game(1).unwrap();

        assert!(game.is_played());
        assert_eq!((game.home_score, game.away_score), (result.home_team.score, result.away_team.score));
        assert_ne!(result.home_team.score, result.away_team.score);
        assert!(result.plays.is_empty());
        assert!(!data.play_logs.contains_key(&1));
        assert_eq!(data.game_stats.get(&1).map(Vec::len), Some(2));
    }

    #[test]
    fn test_simulation_is_deterministic() {
        let first = simulator()
            .simulate_week(&mut league(), 1, SimulationMode::Detailed, kickoff())
            .unwrap();
        let second = simulator()
            .simulate_week(&mut league(), 1, SimulationMode::Detailed, kickoff())
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_detailed_mode_conserves_score() {
        let mut data = league();

        let results = simulator()
            .simulate_week(&mut data, 1, SimulationMode::Detailed, kickoff())
            .unwrap();
        let result = &results[0];

        let home: i32 = result.plays.iter().filter(|p| p.side == Side::Home).map(|p| p.points).sum();
        let away: i32 = result.plays.iter().filter(|p| p.side == Side::Away).map(|p| p.points).sum();

        assert_eq!((home, away), (result.home_team.score, result.away_team.score));
        assert_eq!(result.play_by_play().len(), result.plays.len());
        assert_eq!(data.play_logs.get(&1).map(Vec::len), Some(result.plays.len()));
    }

    #[test]
    fn test_resimulation_is_rejected_and_store_untouched() {
        let mut data = league();
        let sim = simulator();

        sim.simulate_week(&mut data, 1, SimulationMode::Quick, kickoff()).unwrap();
        let snapshot = data.clone();

        let err = sim
            .simulate_week(&mut data, 1, SimulationMode::Quick, kickoff())
            .unwrap_err();

        assert_eq!(err, LeagueError::precondition("Game 1 already simulated"));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_week_without_games() {
        let mut data = league();

        let err = simulator()
            .simulate_week(&mut data, 17, SimulationMode::Quick, kickoff())
            .unwrap_err();

        assert_eq!(err, LeagueError::not_found("No games scheduled for week 17"));
    }

    #[test]
    fn test_partial_week_rolls_back() {
        let mut data = league();
        data.games.insert(3, Game::new(3, 2, 1, 2));
        data.games.get_mut(&3).unwrap().played_at = Some(kickoff());
        let snapshot = data.clone();

        // game 2 would succeed, game 3 is already played
        let err = simulator()
            .simulate_week(&mut data, 2, SimulationMode::Detailed, kickoff())
            .unwrap_err();

        assert!(matches!(err, LeagueError::Precondition(_)));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_stats_never_negative_across_weeks() {
        let mut data = league();
        for week in 3..40 {
            let id = week + 100;
            data.games.insert(id, Game::new(id, week, 1 + week % 2, 2 - week % 2));
        }

        let sim = simulator();
        for week in 3..40 {
            let results = sim.simulate_week(&mut data, week, SimulationMode::Detailed, kickoff()).unwrap();

            for result in results {
                let rules = sim.rules();
                assert!((rules.min_score..=rules.max_score).contains(&result.home_team.score));
                assert!((rules.min_score..=rules.max_score).contains(&result.away_team.score));

                let lines: Vec<&PlayerStatLine> = result.team_stats.iter().flat_map(|t| t.players.iter()).collect();
                assert!(lines.iter().all(|l| l.sacks >= 0.0));
                assert!(lines.iter().all(|l| l.interceptions <= 3));
            }
        }
    }

    #[test]
    fn test_injuries_update_player_status() {
        let mut data = league();
        let sim = WeekSimulator::new(SimulationRules {
            injury_probability: 1.0,
            ..SimulationRules::default()
        });

        let results = sim.simulate_week(&mut data, 1, SimulationMode::Quick, kickoff()).unwrap();

        // both teams field a QB, RB, WR and EDGE leader
        assert_eq!(results[0].injuries.len(), 8);
        assert_eq!(data.player(1).unwrap().injury_status, InjuryStatus::Questionable);
        assert_eq!(data.player(9).unwrap().injury_status, InjuryStatus::Healthy);
    }

    #[test]
    fn test_team_without_tracked_positions_has_empty_box() {
        let mut data = league();
        data.players.retain(|_, p| p.team_id != Some(2));
        data.players.insert(50, player(50, "Lone Kicker", Position::K, 70, Some(2), Some(1), 0));

        let results = simulator().simulate_week(&mut data, 1, SimulationMode::Detailed, kickoff()).unwrap();
        let away = &results[0].team_stats[1];

        assert!(away.players.is_empty());
        assert_eq!(away.total_yards, 0);
    }
}
