use crate::club::{PlayerSummary, Team};
use crate::r#match::{PlayerStatLine, TeamGameStats, gauss, unit};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

const PASS_TOUCHDOWN_SHARE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    Touchdown,
    FieldGoal,
    Safety,
    Score,
}

impl PlayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayType::Touchdown => "touchdown",
            PlayType::FieldGoal => "field_goal",
            PlayType::Safety => "safety",
            PlayType::Score => "score",
        }
    }
}

impl Display for PlayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayNarration {
    pub description: String,
    pub player: Option<PlayerSummary>,
    pub play_type: PlayType,
}

/// Top contributors of one team's box score, each chosen by the metric that
/// matters for its role. A line only qualifies when that metric is non-zero.
struct Contributors<'s> {
    passer: Option<&'s PlayerStatLine>,
    rusher: Option<&'s PlayerStatLine>,
    receiver: Option<&'s PlayerStatLine>,
    defender: Option<&'s PlayerStatLine>,
}

impl<'s> Contributors<'s> {
    fn from_lines(lines: &'s [PlayerStatLine]) -> Self {
        Contributors {
            passer: top(lines.iter().filter(|l| l.passing_yards > 0), |l| l.passing_yards),
            rusher: top(lines.iter().filter(|l| l.rushing_yards > 0), |l| l.rushing_yards),
            receiver: top(
                lines.iter().filter(|l| l.receiving_yards > 0 || l.receiving_tds > 0),
                |l| l.receiving_yards,
            ),
            defender: top(
                lines
                    .iter()
                    .filter(|l| l.tackles > 0 || l.sacks > 0.0 || l.forced_turnovers > 0),
                |l| l.tackles,
            ),
        }
    }
}

/// Highest value wins; the earliest line keeps ties.
fn top<'s>(
    lines: impl Iterator<Item = &'s PlayerStatLine>,
    metric: impl Fn(&PlayerStatLine) -> u32,
) -> Option<&'s PlayerStatLine> {
    lines.fold(None, |best, line| match best {
        Some(current) if metric(current) >= metric(line) => Some(current),
        _ => Some(line),
    })
}

pub struct PlayDescriber;

impl PlayDescriber {
    /// Narrates one scoring play and attributes it to a contributor.
    ///
    /// Touchdowns draw the pass-or-rush choice only when both a passer and a
    /// receiver exist, then the play distance. Field goals draw a distance.
    /// Safeties and odd scores draw nothing.
    pub fn describe<R: Rng + ?Sized>(rng: &mut R, team: &Team, stats: &TeamGameStats, points: i32) -> PlayNarration {
        let contributors = Contributors::from_lines(&stats.players);
        let abbr = &team.abbreviation;

        if points >= 7 {
            let (mut description, player) = match (contributors.passer, contributors.receiver) {
                (Some(passer), Some(receiver)) if unit(rng) < PASS_TOUCHDOWN_SHARE => {
                    let yards = (gauss(rng, 24.0, 12.0).trunc() as i64).max(8);
                    (
                        format!(
                            "{} QB {} finds {} for a {}-yard touchdown.",
                            abbr, passer.name, receiver.name, yards
                        ),
                        Some(receiver.summary()),
                    )
                }
                _ => Self::ground_or_defensive_touchdown(rng, team, &contributors),
            };

            if points == 8 {
                description.push_str(" They convert the two-point try.");
            }

            return PlayNarration {
                description,
                player,
                play_type: PlayType::Touchdown,
            };
        }

        match points {
            3 => {
                let distance = (gauss(rng, 42.0, 6.0).trunc() as i64).clamp(28, 54);

                PlayNarration {
                    description: format!("{} drills a {}-yard field goal.", team.name, distance),
                    player: None,
                    play_type: PlayType::FieldGoal,
                }
            }
            2 => match contributors.defender {
                Some(defender) => PlayNarration {
                    description: format!("{} defense swarms as {} records a safety.", abbr, defender.name),
                    player: Some(defender.summary()),
                    play_type: PlayType::Safety,
                },
                None => PlayNarration {
                    description: format!("{} records a safety.", team.name),
                    player: None,
                    play_type: PlayType::Safety,
                },
            },
            _ => PlayNarration {
                description: format!("{} adds {} points.", team.name, points),
                player: None,
                play_type: PlayType::Score,
            },
        }
    }

    fn ground_or_defensive_touchdown<R: Rng + ?Sized>(
        rng: &mut R,
        team: &Team,
        contributors: &Contributors<'_>,
    ) -> (String, Option<PlayerSummary>) {
        if let Some(rusher) = contributors.rusher {
            let yards = (gauss(rng, 8.0, 4.0).trunc() as i64).max(1);
            return (
                format!("{} RB {} powers in from {} yards out.", team.abbreviation, rusher.name, yards),
                Some(rusher.summary()),
            );
        }

        if let Some(defender) = contributors.defender {
            return (
                format!(
                    "{} defense cashes in as {} scores on a takeaway.",
                    team.abbreviation, defender.name
                ),
                Some(defender.summary()),
            );
        }

        (format!("{} finds the end zone.", team.name), None)
    }
}
