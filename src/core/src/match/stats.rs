use crate::club::{Player, PlayerSummary, Position};
use crate::r#match::{floor_count, gauss, round_count, unit};
use crate::rules::SimulationRules;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

const PASSING_YARDS_SIGMA: f64 = 35.0;
const RUSHING_YARDS_SIGMA: f64 = 20.0;
const RECEIVING_YARDS_SIGMA: f64 = 25.0;
const MAX_INTERCEPTIONS: u32 = 3;
const MIN_TACKLES: i64 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatLine {
    pub player_id: u32,
    pub team_id: u32,
    pub name: String,
    pub position: Position,
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

impl PlayerStatLine {
    pub fn blank(player: &Player, team_id: u32) -> Self {
        PlayerStatLine {
            player_id: player.id,
            team_id,
            name: player.name.clone(),
            position: player.position,
            passing_yards: 0,
            passing_tds: 0,
            interceptions: 0,
            rushing_yards: 0,
            rushing_tds: 0,
            receiving_yards: 0,
            receiving_tds: 0,
            tackles: 0,
            sacks: 0.0,
            forced_turnovers: 0,
        }
    }

    fn absorb(&mut self, other: &PlayerStatLine) {
        self.passing_yards += other.passing_yards;
        self.passing_tds += other.passing_tds;
        self.interceptions += other.interceptions;
        self.rushing_yards += other.rushing_yards;
        self.rushing_tds += other.rushing_tds;
        self.receiving_yards += other.receiving_yards;
        self.receiving_tds += other.receiving_tds;
        self.tackles += other.tackles;
        self.sacks += other.sacks;
        self.forced_turnovers += other.forced_turnovers;
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            id: self.player_id,
            name: self.name.clone(),
            position: self.position,
        }
    }

    pub fn yards(&self) -> u32 {
        self.passing_yards + self.rushing_yards + self.receiving_yards
    }
}

/// Per-team box score for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameStats {
    pub team_id: u32,
    pub points_for: i32,
    pub points_against: i32,
    pub total_yards: u32,
    pub turnovers: u32,
    pub players: Vec<PlayerStatLine>,
}

/// Depth-chart leaders that receive generated stat lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatLeaders<'p> {
    pub qb: Option<&'p Player>,
    pub rb: Option<&'p Player>,
    pub wr: Option<&'p Player>,
    pub defender: Option<&'p Player>,
}

impl<'p> StatLeaders<'p> {
    /// Picks leaders from an active roster already sorted by depth order.
    ///
    /// The RB slot falls back to the top WR, the WR slot to the top TE, and
    /// the defender is the first available EDGE, then LB, then CB.
    pub fn select(roster: &[&'p Player]) -> Self {
        let first = |position: Position| roster.iter().copied().find(|p| p.position == position);

        StatLeaders {
            qb: first(Position::QB),
            rb: first(Position::RB).or_else(|| first(Position::WR)),
            wr: first(Position::WR).or_else(|| first(Position::TE)),
            defender: first(Position::EDGE)
                .or_else(|| first(Position::LB))
                .or_else(|| first(Position::CB)),
        }
    }

    /// Distinct leaders in QB, RB, WR, defender order.
    pub fn candidates(&self) -> Vec<&'p Player> {
        let mut candidates: Vec<&'p Player> = Vec::with_capacity(4);

        for player in [self.qb, self.rb, self.wr, self.defender].into_iter().flatten() {
            if !candidates.iter().any(|c| c.id == player.id) {
                candidates.push(player);
            }
        }

        candidates
    }
}

pub struct StatGenerator;

impl StatGenerator {
    /// Builds a team's box score.
    ///
    /// Draw order: turnovers, then QB (yards, touchdowns, interceptions),
    /// RB (yards, touchdowns), WR (yards, touchdowns) and defender
    /// (tackles, sacks, forced turnover), skipping absent leaders.
    pub fn generate_team_stats<R: Rng + ?Sized>(
        rng: &mut R,
        team_id: u32,
        leaders: &StatLeaders<'_>,
        team_points: i32,
        opponent_points: i32,
        rules: &SimulationRules,
    ) -> TeamGameStats {
        let points = team_points as f64;
        let mut lines: Vec<PlayerStatLine> = Vec::with_capacity(4);

        let turnovers = round_count(gauss(rng, 0.0, 1.0).abs());

        if let Some(qb) = leaders.qb {
            let rating = qb.overall_rating as f64;
            let mut line = PlayerStatLine::blank(qb, team_id);

            line.passing_yards = floor_count(rating * rules.passing_yards_per_rating + gauss(rng, 0.0, PASSING_YARDS_SIGMA));
            line.passing_tds = round_count(points / 14.0 + unit(rng));
            line.interceptions = floor_count(gauss(rng, 0.5, 0.8)).min(MAX_INTERCEPTIONS);

            Self::push_line(&mut lines, line);
        }

        if let Some(rb) = leaders.rb {
            let rating = rb.overall_rating as f64;
            let mut line = PlayerStatLine::blank(rb, team_id);

            line.rushing_yards = floor_count(rating * rules.rushing_yards_per_rating + gauss(rng, 0.0, RUSHING_YARDS_SIGMA));
            line.rushing_tds = round_count(points / 21.0 + unit(rng) - 0.3);

            Self::push_line(&mut lines, line);
        }

        if let Some(wr) = leaders.wr {
            let rating = wr.overall_rating as f64;
            let mut line = PlayerStatLine::blank(wr, team_id);

            line.receiving_yards = floor_count(rating * rules.receiving_yards_per_rating + gauss(rng, 0.0, RECEIVING_YARDS_SIGMA));
            line.receiving_tds = round_count(points / 21.0 + unit(rng) - 0.4);

            Self::push_line(&mut lines, line);
        }

        if let Some(defender) = leaders.defender {
            let mut line = PlayerStatLine::blank(defender, team_id);

            line.tackles = (gauss(rng, 6.0, 2.0).trunc() as i64).max(MIN_TACKLES) as u32;
            line.sacks = ((unit(rng) * rules.defense_big_play_factor * 10.0 * 10.0).round() / 10.0).max(0.0);
            line.forced_turnovers = u32::from(unit(rng) < rules.defense_big_play_factor);

            Self::push_line(&mut lines, line);
        }

        let total_yards: u32 = lines.iter().map(PlayerStatLine::yards).sum();

        debug!(
            "team {} stats: {} yards, {} turnovers, {} stat lines",
            team_id,
            total_yards,
            turnovers,
            lines.len()
        );

        TeamGameStats {
            team_id,
            points_for: team_points,
            points_against: opponent_points,
            total_yards,
            turnovers,
            players: lines,
        }
    }

    /// A player leading two buckets (an RB slot filled by the top WR) keeps a
    /// single merged line.
    fn push_line(lines: &mut Vec<PlayerStatLine>, line: PlayerStatLine) {
        match lines.iter_mut().find(|l| l.player_id == line.player_id) {
            Some(existing) => existing.absorb(&line),
            None => lines.push(line),
        }
    }
}
