use crate::league::LeagueData;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub team_id: u32,
    pub name: String,
    pub abbreviation: String,
    pub conference: String,
    pub division: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub win_pct: f64,
    pub points_for: i64,
    pub points_against: i64,
    pub point_diff: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionStandings {
    pub conference: String,
    pub division: String,
    pub teams: Vec<StandingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    pub updated_through_week: u32,
    pub divisions: Vec<DivisionStandings>,
    pub teams: Vec<StandingRow>,
}

#[derive(Default)]
struct Record {
    wins: u32,
    losses: u32,
    ties: u32,
    points_for: i64,
    points_against: i64,
}

impl Standings {
    pub fn compute(data: &LeagueData) -> Standings {
        let mut records: BTreeMap<u32, Record> = data.teams.keys().map(|id| (*id, Record::default())).collect();

        for game in data.games.values().filter(|g| g.is_played()) {
            let (home, away) = (game.home_score as i64, game.away_score as i64);

            if let Some(record) = records.get_mut(&game.home_team_id) {
                record.points_for += home;
                record.points_against += away;
                match home.cmp(&away) {
                    Ordering::Greater => record.wins += 1,
                    Ordering::Less => record.losses += 1,
                    Ordering::Equal => record.ties += 1,
                }
            }

            if let Some(record) = records.get_mut(&game.away_team_id) {
                record.points_for += away;
                record.points_against += home;
                match away.cmp(&home) {
                    Ordering::Greater => record.wins += 1,
                    Ordering::Less => record.losses += 1,
                    Ordering::Equal => record.ties += 1,
                }
            }
        }

        let teams: Vec<StandingRow> = data
            .teams
            .values()
            .sorted_by(|a, b| (&a.conference, &a.division, &a.name).cmp(&(&b.conference, &b.division, &b.name)))
            .map(|team| {
                let record = records.remove(&team.id).unwrap_or_default();
                let games_played = record.wins + record.losses + record.ties;
                let win_pct = if games_played == 0 {
                    0.0
                } else {
                    let raw = (record.wins as f64 + 0.5 * record.ties as f64) / games_played as f64;
                    (raw * 1000.0).round() / 1000.0
                };

                StandingRow {
                    team_id: team.id,
                    name: team.name.clone(),
                    abbreviation: team.abbreviation.clone(),
                    conference: team.conference.clone(),
                    division: team.division.clone(),
                    wins: record.wins,
                    losses: record.losses,
                    ties: record.ties,
                    win_pct,
                    points_for: record.points_for,
                    points_against: record.points_against,
                    point_diff: record.points_for - record.points_against,
                }
            })
            .collect();

        let divisions = teams
            .iter()
            .cloned()
            .into_group_map_by(|row| (row.conference.clone(), row.division.clone()))
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .map(|((conference, division), rows)| DivisionStandings {
                conference,
                division,
                teams: rows.into_iter().sorted_by(Self::rank).collect(),
            })
            .collect();

        Standings {
            updated_through_week: data.latest_played_week().unwrap_or(0),
            divisions,
            teams,
        }
    }

    /// Best record first: win percentage, then point differential, then points scored.
    fn rank(a: &StandingRow, b: &StandingRow) -> Ordering {
        b.win_pct
            .total_cmp(&a.win_pct)
            .then(b.point_diff.cmp(&a.point_diff))
            .then(b.points_for.cmp(&a.points_for))
    }
}
