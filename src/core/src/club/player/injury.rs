use crate::club::{InjuryStatus, Player};
use crate::league::LeagueData;
use crate::r#match::{gauss, unit};
use crate::rules::SimulationRules;
use crate::LeagueResult;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An injury sustained in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryRecord {
    pub player_id: u32,
    pub team_id: u32,
    pub name: String,
    pub status: InjuryStatus,
    pub duration_weeks: u32,
    pub games_missed: u32,
}

/// Outcome of the injury trials of one team in one game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjuryReport {
    pub injuries: Vec<InjuryRecord>,
    pub healthy: Vec<u32>,
}

impl InjuryReport {
    /// Overwrites the injury status of every trialled player.
    pub fn apply(&self, data: &mut LeagueData) -> LeagueResult<()> {
        for record in &self.injuries {
            data.player_mut(record.player_id)?.injury_status = record.status;
        }

        for player_id in &self.healthy {
            data.player_mut(*player_id)?.injury_status = InjuryStatus::Healthy;
        }

        Ok(())
    }
}

pub struct InjuryEngine;

impl InjuryEngine {
    /// One Bernoulli trial per distinct candidate, in order. An injured player
    /// also draws a duration of `round(N(min + 1, 1))` weeks clamped to the
    /// configured window, and misses every week of it but the current one.
    pub fn roll<R: Rng + ?Sized>(
        rng: &mut R,
        team_id: u32,
        candidates: &[&Player],
        rules: &SimulationRules,
    ) -> InjuryReport {
        let mut report = InjuryReport::default();

        for player in candidates {
            if report.healthy.contains(&player.id) || report.injuries.iter().any(|r| r.player_id == player.id) {
                continue;
            }

            if unit(rng) < rules.injury_probability {
                let duration_weeks = Self::duration(rng, rules);

                debug!(
                    "player {} ({}) injured for {} weeks",
                    player.id, player.name, duration_weeks
                );

                report.injuries.push(InjuryRecord {
                    player_id: player.id,
                    team_id,
                    name: player.name.clone(),
                    status: InjuryStatus::Questionable,
                    duration_weeks,
                    games_missed: duration_weeks.saturating_sub(1),
                });
            } else {
                report.healthy.push(player.id);
            }
        }

        report
    }

    fn duration<R: Rng + ?Sized>(rng: &mut R, rules: &SimulationRules) -> u32 {
        let min = rules.injury_min_duration_weeks.max(1);
        let max = rules.injury_max_duration_weeks.max(min);

        let sampled = gauss(rng, min as f64 + 1.0, 1.0).round();

        sampled.clamp(min as f64, max as f64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::data::fixtures::league;
    use crate::r#match::GameRng;
    use rand::SeedableRng;

    fn rules(probability: f64) -> SimulationRules {
        SimulationRules {
            injury_probability: probability,
            ..SimulationRules::default()
        }
    }

    #[test]
    fn test_certain_injury_carries_duration() {
        let data = league();
        let roster = data.active_roster(1);
        let mut rng = GameRng::seed_from_u64(21);

        let report = InjuryEngine::roll(&mut rng, 1, &roster[..2], &rules(1.0));

        assert_eq!(report.injuries.len(), 2);
        assert!(report.healthy.is_empty());
        for record in &report.injuries {
            assert_eq!(record.status, InjuryStatus::Questionable);
            assert!((1..=6).contains(&record.duration_weeks));
            assert_eq!(record.games_missed, record.duration_weeks - 1);
        }
    }

    #[test]
    fn test_zero_probability_marks_everyone_healthy() {
        let data = league();
        let roster = data.active_roster(1);
        let mut rng = GameRng::seed_from_u64(21);

        let report = InjuryEngine::roll(&mut rng, 1, &roster, &rules(0.0));

        assert!(report.injuries.is_empty());
        assert_eq!(report.healthy, vec![1, 2, 3, 4, 9]);
    }

    #[test]
    fn test_repeated_candidate_gets_one_trial() {
        let data = league();
        let qb = data.player(1).unwrap();
        let mut rng = GameRng::seed_from_u64(3);

        let report = InjuryEngine::roll(&mut rng, 1, &[qb, qb], &rules(1.0));

        assert_eq!(report.injuries.len(), 1);
    }

    #[test]
    fn test_apply_overwrites_previous_status() {
        let mut data = league();
        data.players.get_mut(&2).unwrap().injury_status = InjuryStatus::Questionable;

        let report = InjuryReport {
            injuries: vec![InjuryRecord {
                player_id: 1,
                team_id: 1,
                name: "Josh Allen".to_string(),
                status: InjuryStatus::Questionable,
                duration_weeks: 2,
                games_missed: 1,
            }],
            healthy: vec![2],
        };
        report.apply(&mut data).unwrap();

        assert_eq!(data.player(1).unwrap().injury_status, InjuryStatus::Questionable);
        assert_eq!(data.player(2).unwrap().injury_status, InjuryStatus::Healthy);
    }

    #[test]
    fn test_duration_respects_window() {
        let narrow = SimulationRules {
            injury_min_duration_weeks: 3,
            injury_max_duration_weeks: 3,
            ..SimulationRules::default()
        };

        for seed in 0..100u64 {
            let mut rng = GameRng::seed_from_u64(seed);
            assert_eq!(InjuryEngine::duration(&mut rng, &narrow), 3);
        }
    }
}
