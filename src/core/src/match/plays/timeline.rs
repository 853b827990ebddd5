use crate::club::{PlayerSummary, Team, TeamSummary};
use crate::r#match::{
    GameClock, MARKER_MAX_MINUTES, PlayDescriber, PlayImpact, PlayType, ScoreBreakdown, Side, TeamGameStats, uniform,
};
use crate::{LeagueError, LeagueResult};
use log::error;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningScore {
    pub home: i32,
    pub away: i32,
}

impl RunningScore {
    fn add(&mut self, side: Side, points: i32) {
        match side {
            Side::Home => self.home += points,
            Side::Away => self.away += points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPlay {
    pub sequence: u32,
    pub quarter: u32,
    pub clock: String,
    pub side: Side,
    pub team: TeamSummary,
    pub player: Option<PlayerSummary>,
    pub description: String,
    pub play_type: PlayType,
    pub impact: PlayImpact,
    pub points: i32,
    pub score: RunningScore,
}

impl ScoringPlay {
    /// One-line rendering used by the text play-by-play.
    pub fn line(&self) -> String {
        format!(
            "Q{} {} - {} (Score {}-{})",
            self.quarter, self.clock, self.description, self.score.home, self.score.away
        )
    }
}

/// One team's input to the play log.
#[derive(Debug, Clone, Copy)]
pub struct PlaySide<'a> {
    pub team: &'a Team,
    pub stats: &'a TeamGameStats,
    pub score: i32,
}

struct ScoringChunk {
    side: Side,
    points: i32,
    marker: f64,
}

pub struct PlayLogBuilder;

impl PlayLogBuilder {
    /// Rebuilds a chronological scoring log from both final scores.
    ///
    /// Draw order: home shuffle and markers, away shuffle and markers, then the
    /// description draws of each play in timeline order.
    pub fn build<R: Rng + ?Sized>(rng: &mut R, home: PlaySide<'_>, away: PlaySide<'_>) -> LeagueResult<Vec<ScoringPlay>> {
        let mut timeline = Self::chunks(rng, Side::Home, home.score);
        timeline.extend(Self::chunks(rng, Side::Away, away.score));

        // stable: equal markers keep home before away
        timeline.sort_by(|a, b| a.marker.total_cmp(&b.marker));

        let mut plays = Vec::with_capacity(timeline.len());
        let mut running = RunningScore::default();

        for (index, chunk) in timeline.iter().enumerate() {
            let before = running;
            running.add(chunk.side, chunk.points);

            let side = match chunk.side {
                Side::Home => &home,
                Side::Away => &away,
            };

            let clock = GameClock::from_marker(chunk.marker);
            let narration = PlayDescriber::describe(rng, side.team, side.stats, chunk.points);

            plays.push(ScoringPlay {
                sequence: index as u32 + 1,
                quarter: clock.quarter,
                clock: clock.clock,
                side: chunk.side,
                team: side.team.summary(),
                player: narration.player,
                description: narration.description,
                play_type: narration.play_type,
                impact: PlayImpact::classify(before.home, before.away, running.home, running.away, chunk.side),
                points: chunk.points,
                score: running,
            });
        }

        Self::verify(&plays, home.score, away.score)?;

        Ok(plays)
    }

    fn chunks<R: Rng + ?Sized>(rng: &mut R, side: Side, score: i32) -> Vec<ScoringChunk> {
        ScoreBreakdown::shuffled(rng, score)
            .into_iter()
            .map(|points| ScoringChunk {
                side,
                points,
                marker: uniform(rng, 0.0, MARKER_MAX_MINUTES),
            })
            .collect()
    }

    fn verify(plays: &[ScoringPlay], home_score: i32, away_score: i32) -> LeagueResult<()> {
        let side_total = |side: Side| plays.iter().filter(|p| p.side == side).map(|p| p.points).sum::<i32>();

        let home_total = side_total(Side::Home);
        let away_total = side_total(Side::Away);
        let last = plays.last().map(|p| p.score).unwrap_or_default();

        if home_total != home_score.max(0)
            || away_total != away_score.max(0)
            || last != (RunningScore { home: home_total, away: away_total })
        {
            error!(
                "play log does not conserve the final score: plays {}-{}, final {}-{}",
                home_total, away_total, home_score, away_score
            );
            return Err(LeagueError::internal(format!(
                "play log sums to {}-{} but the final score is {}-{}",
                home_total, away_total, home_score, away_score
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::data::fixtures::team;
    use crate::r#match::GameRng;
    use rand::SeedableRng;

    fn empty_stats(team_id: u32, points: i32) -> TeamGameStats {
        TeamGameStats {
            team_id,
            points_for: points,
            points_against: 0,
            total_yards: 0,
            turnovers: 0,
            players: Vec::new(),
        }
    }

    #[test]
    fn test_log_conserves_every_score_pair() {
        let home_team = team(1, "Buffalo Bills", "BUF");
        let away_team = team(2, "Cincinnati Bengals", "CIN");

        for home_score in 0..=48 {
            let away_score = 48 - home_score;
            let home_stats = empty_stats(1, home_score);
            let away_stats = empty_stats(2, away_score);
            let mut rng = GameRng::seed_from_u64(home_score as u64);

            let plays = PlayLogBuilder::build(
                &mut rng,
                PlaySide { team: &home_team, stats: &home_stats, score: home_score },
                PlaySide { team: &away_team, stats: &away_stats, score: away_score },
            )
            .unwrap();

            let home_points: i32 = plays.iter().filter(|p| p.side == Side::Home).map(|p| p.points).sum();
            let away_points: i32 = plays.iter().filter(|p| p.side == Side::Away).map(|p| p.points).sum();
            assert_eq!((home_points, away_points), (home_score, away_score));

            if let Some(last) = plays.last() {
                assert_eq!(last.score, RunningScore { home: home_score, away: away_score });
            }

            let sequences: Vec<u32> = plays.iter().map(|p| p.sequence).collect();
            assert_eq!(sequences, (1..=plays.len() as u32).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_log_is_chronological() {
        let home_team = team(1, "Buffalo Bills", "BUF");
        let away_team = team(2, "Cincinnati Bengals", "CIN");
        let home_stats = empty_stats(1, 31);
        let away_stats = empty_stats(2, 27);
        let mut rng = GameRng::seed_from_u64(5);

        let plays = PlayLogBuilder::build(
            &mut rng,
            PlaySide { team: &home_team, stats: &home_stats, score: 31 },
            PlaySide { team: &away_team, stats: &away_stats, score: 27 },
        )
        .unwrap();

        for pair in plays.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.quarter <= b.quarter);
            if a.quarter == b.quarter {
                // countdown clock, so later plays show less time
                assert!(a.clock >= b.clock);
            }
            assert!(a.score.home <= b.score.home && a.score.away <= b.score.away);
        }
    }

    #[test]
    fn test_scoreless_game_has_empty_log() {
        let home_team = team(1, "Buffalo Bills", "BUF");
        let away_team = team(2, "Cincinnati Bengals", "CIN");
        let stats = empty_stats(1, 0);
        let mut rng = GameRng::seed_from_u64(5);

        let plays = PlayLogBuilder::build(
            &mut rng,
            PlaySide { team: &home_team, stats: &stats, score: 0 },
            PlaySide { team: &away_team, stats: &stats, score: 0 },
        )
        .unwrap();

        assert!(plays.is_empty());
    }

    #[test]
    fn test_first_play_takes_lead() {
        let home_team = team(1, "Buffalo Bills", "BUF");
        let away_team = team(2, "Cincinnati Bengals", "CIN");
        let home_stats = empty_stats(1, 17);
        let away_stats = empty_stats(2, 0);
        let mut rng = GameRng::seed_from_u64(8);

        let plays = PlayLogBuilder::build(
            &mut rng,
            PlaySide { team: &home_team, stats: &home_stats, score: 17 },
            PlaySide { team: &away_team, stats: &away_stats, score: 0 },
        )
        .unwrap();

        assert_eq!(plays[0].impact, PlayImpact::TakesLead);
        assert!(plays[1..].iter().all(|p| p.impact == PlayImpact::ExtendsLead));
        assert_eq!(plays[0].line().split(" - ").count(), 2);
    }
}
