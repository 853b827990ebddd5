use crate::club::{DraftPick, Player, RosterService, TeamSummary};
use crate::league::LeagueData;
use crate::rules::GameRules;
use crate::transfers::{TradeAsset, TradePackage, TradeSettings, TradeValuation};
use crate::{LeagueError, LeagueResult};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    #[serde(alias = "teamA")]
    pub team_a: u32,
    #[serde(alias = "teamB")]
    pub team_b: u32,
    #[serde(default)]
    pub offer: Vec<TradeAsset>,
    #[serde(default)]
    pub request: Vec<TradeAsset>,
    #[serde(default)]
    pub strict_fairness: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeResult {
    pub team_a: TeamSummary,
    pub team_b: TeamSummary,
    pub team_a_sent: TradePackage,
    pub team_a_received: TradePackage,
    pub team_b_sent: TradePackage,
    pub team_b_received: TradePackage,
    pub offer_value: f64,
    pub request_value: f64,
    pub value_delta: f64,
}

/// Validates and applies two-sided player and pick trades.
///
/// `team_a` sends `offer` and receives `request`. Every check runs against
/// a working copy of the league, so a rejection at any step leaves the store
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct TradeService {
    rules: GameRules,
    roster: RosterService,
    valuation: TradeValuation,
}

impl TradeService {
    pub fn new(rules: GameRules, settings: TradeSettings) -> Self {
        TradeService {
            roster: RosterService::new(rules.clone()),
            rules,
            valuation: TradeValuation::new(settings),
        }
    }

    pub fn execute_trade(&self, data: &mut LeagueData, request: &TradeRequest) -> LeagueResult<TradeResult> {
        let outcome = data.atomically(|working| self.run(working, request));

        match &outcome {
            Ok(result) => info!(
                "trade executed: {} <-> {} (offer {:.1}, request {:.1})",
                result.team_a.abbreviation, result.team_b.abbreviation, result.offer_value, result.request_value
            ),
            Err(err) => warn!("trade {} <-> {} rejected: {}", request.team_a, request.team_b, err),
        }

        outcome
    }

    /// Runs the full pipeline and always discards the outcome.
    pub fn propose_trade(&self, data: &LeagueData, request: &TradeRequest) -> LeagueResult<TradeResult> {
        data.dry_run(|working| self.run(working, request))
    }

    fn run(&self, working: &mut LeagueData, request: &TradeRequest) -> LeagueResult<TradeResult> {
        if request.team_a == request.team_b {
            return Err(LeagueError::precondition("Teams must be different for a trade"));
        }

        let team_a = working.require_team(request.team_a)?.summary();
        let team_b = working.require_team(request.team_b)?.summary();

        let offer = Self::gather_assets(working, request.team_a, &request.offer)?;
        let asked = Self::gather_assets(working, request.team_b, &request.request)?;

        self.validate_roster_sizes(working, &team_a, &team_b, &offer, &asked)?;
        self.validate_salary_caps(working, &team_a, &team_b, &offer, &asked)?;

        self.apply_package(working, &offer, team_b.id)?;
        self.apply_package(working, &asked, team_a.id)?;

        for team_id in [team_a.id, team_b.id] {
            self.roster.validate_depth_requirements(working, team_id)?;
        }

        for team in [&team_a, &team_b] {
            let elite = working.elite_quarterbacks(team.id, self.rules.elite_qb_rating);

            if elite > self.rules.max_elite_qbs {
                return Err(LeagueError::rule(format!(
                    "{} would exceed the elite QB limit ({} > {})",
                    team.name, elite, self.rules.max_elite_qbs
                )));
            }
        }

        let offer_value = self.valuation.package_value(&offer.players, &offer.picks);
        let request_value = self.valuation.package_value(&asked.players, &asked.picks);

        if request.strict_fairness {
            self.valuation.check_fairness(offer_value, request_value)?;
        }

        let team_a_received = Self::current(working, &asked);
        let team_b_received = Self::current(working, &offer);

        Ok(TradeResult {
            team_a,
            team_b,
            team_a_sent: offer,
            team_a_received,
            team_b_sent: asked,
            team_b_received,
            offer_value,
            request_value,
            value_delta: request_value - offer_value,
        })
    }

    /// Resolves assets the team must own, as they stand before the trade.
    fn gather_assets(data: &LeagueData, team_id: u32, assets: &[TradeAsset]) -> LeagueResult<TradePackage> {
        let mut seen = HashSet::new();
        let mut package = TradePackage::default();

        for asset in assets {
            if !seen.insert(*asset) {
                return Err(LeagueError::invalid(format!("Asset {} listed more than once", asset)));
            }

            match *asset {
                TradeAsset::Player { player_id } => {
                    let player = data
                        .player(player_id)
                        .filter(|p| p.team_id == Some(team_id))
                        .ok_or_else(|| {
                            LeagueError::not_found(format!("Player {} not on team {}", player_id, team_id))
                        })?;

                    package.players.push(player.clone());
                }
                TradeAsset::Pick { year, round } => {
                    let pick = data.owned_pick(team_id, year, round).ok_or_else(|| {
                        LeagueError::not_found(format!(
                            "Team {} does not own {} round {} pick",
                            team_id, year, round
                        ))
                    })?;

                    package.picks.push(pick.clone());
                }
            }
        }

        Ok(package)
    }

    /// A bound may only be crossed by a trade that makes things worse: a team
    /// already over the maximum may stay there but not grow.
    fn validate_roster_sizes(
        &self,
        data: &LeagueData,
        team_a: &TeamSummary,
        team_b: &TeamSummary,
        offer: &TradePackage,
        asked: &TradePackage,
    ) -> LeagueResult<()> {
        let projections = [
            (team_a, data.roster_size(team_a.id), offer, asked),
            (team_b, data.roster_size(team_b.id), asked, offer),
        ];

        for (team, before, sent, received) in &projections {
            let after = *before + received.players.len() as u32 - sent.active_players();

            if after > self.rules.roster_max && after > *before {
                return Err(LeagueError::rule(format!(
                    "{} would exceed the roster limit ({} > {})",
                    team.name, after, self.rules.roster_max
                )));
            }
        }

        for (team, before, sent, received) in &projections {
            let after = *before + received.players.len() as u32 - sent.active_players();

            if after < self.rules.roster_min && after < *before {
                return Err(LeagueError::rule(format!(
                    "{} would fall below the roster minimum ({} < {})",
                    team.name, after, self.rules.roster_min
                )));
            }
        }

        Ok(())
    }

    fn validate_salary_caps(
        &self,
        data: &LeagueData,
        team_a: &TeamSummary,
        team_b: &TeamSummary,
        offer: &TradePackage,
        asked: &TradePackage,
    ) -> LeagueResult<()> {
        for (team, sent, received) in [(team_a, offer, asked), (team_b, asked, offer)] {
            let projected = data.payroll(team.id) - sent.active_salary() + received.salary();

            if projected > self.rules.salary_cap {
                return Err(LeagueError::rule(format!(
                    "{} would exceed the salary cap ({} > {})",
                    team.name, projected, self.rules.salary_cap
                )));
            }
        }

        Ok(())
    }

    fn apply_package(&self, data: &mut LeagueData, package: &TradePackage, destination: u32) -> LeagueResult<()> {
        for player in &package.players {
            self.roster.place_on_roster(data, player.id, destination)?;
        }

        for pick in &package.picks {
            let owned = data.picks.get_mut(&pick.id).ok_or_else(|| {
                LeagueError::internal(format!("pick {} vanished while applying a trade", pick.id))
            })?;
            owned.team_id = destination;
        }

        Ok(())
    }

    fn current(data: &LeagueData, package: &TradePackage) -> TradePackage {
        TradePackage {
            players: package
                .players
                .iter()
                .filter_map(|p| data.player(p.id))
                .cloned()
                .collect::<Vec<Player>>(),
            picks: package
                .picks
                .iter()
                .filter_map(|p| data.picks.get(&p.id))
                .cloned()
                .collect::<Vec<DraftPick>>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::Position;
    use crate::league::data::fixtures::{league, player};
    use std::collections::BTreeMap;

    fn service() -> TradeService {
        TradeService::new(GameRules::default(), TradeSettings::default())
    }

    fn trade(offer: Vec<TradeAsset>, request: Vec<TradeAsset>) -> TradeRequest {
        TradeRequest {
            team_a: 1,
            team_b: 2,
            offer,
            request,
            strict_fairness: false,
        }
    }

    fn player_asset(player_id: u32) -> TradeAsset {
        TradeAsset::Player { player_id }
    }

    #[test]
    fn test_player_for_player_trade() {
        let mut data = league();
        let before = data.roster_size(1) + data.roster_size(2);

        let result = service()
            .execute_trade(&mut data, &trade(vec![player_asset(2)], vec![player_asset(6)]))
            .unwrap();

        assert_eq!(data.player(2).unwrap().team_id, Some(2));
        assert_eq!(data.player(6).unwrap().team_id, Some(1));
        assert_eq!(data.roster_size(1) + data.roster_size(2), before);
        assert!(data.payroll(1) <= GameRules::default().salary_cap);
        assert!(data.payroll(2) <= GameRules::default().salary_cap);
        assert_eq!(result.team_a_sent.players.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(result.team_a_received.players[0].depth_chart_position.as_deref(), Some("RB1"));
        assert_eq!(result.team_b_received.players[0].depth_chart_position.as_deref(), Some("RB2"));
        assert_eq!(result.offer_value, 85.0);
        assert_eq!(result.request_value, 88.0);
        assert_eq!(result.value_delta, 3.0);
    }

    #[test]
    fn test_accepted_swaps_conserve_rosters_under_the_cap() {
        let rules = GameRules {
            salary_cap: 100_000_000,
            ..GameRules::default()
        };
        let trades = TradeService::new(rules.clone(), TradeSettings::default());
        let (mut accepted, mut rejected) = (0, 0);

        for sent in [1, 2, 3, 4, 9] {
            for received in [5, 6, 7, 8, 10] {
                let mut data = league();
                let snapshot = data.clone();
                let roster_total = data.roster_size(1) + data.roster_size(2);

                let swap = trade(vec![player_asset(sent)], vec![player_asset(received)]);

                match trades.execute_trade(&mut data, &swap) {
                    Ok(_) => {
                        accepted += 1;
                        assert_eq!(data.roster_size(1) + data.roster_size(2), roster_total);
                        assert!(data.payroll(1) <= rules.salary_cap, "{} for {}", sent, received);
                        assert!(data.payroll(2) <= rules.salary_cap, "{} for {}", sent, received);
                    }
                    Err(_) => {
                        rejected += 1;
                        assert_eq!(data, snapshot);
                    }
                }
            }
        }

        assert!(accepted > 0 && rejected > 0);
    }

    #[test]
    fn test_pick_changes_owner() {
        let mut data = league();

        let result = service()
            .execute_trade(
                &mut data,
                &trade(
                    vec![TradeAsset::Pick { year: 2025, round: 1 }],
                    vec![TradeAsset::Pick { year: 2025, round: 2 }],
                ),
            )
            .unwrap();

        assert_eq!(data.picks.get(&1).unwrap().team_id, 2);
        assert_eq!(data.picks.get(&2).unwrap().team_id, 1);
        assert_eq!(result.team_b_received.picks[0].team_id, 2);
        assert_eq!(result.team_a_sent.picks[0].team_id, 1);
        assert_eq!(result.offer_value, 20.0);
        assert_eq!(result.request_value, 12.0);
    }

    #[test]
    fn test_same_team_rejected() {
        let mut data = league();
        let request = TradeRequest {
            team_b: 1,
            ..trade(vec![], vec![])
        };

        assert!(matches!(service().execute_trade(&mut data, &request), Err(LeagueError::Precondition(_))));
    }

    #[test]
    fn test_unowned_assets_not_found() {
        let mut data = league();
        let snapshot = data.clone();
        let trades = service();

        let err = trades
            .execute_trade(&mut data, &trade(vec![player_asset(5)], vec![]))
            .unwrap_err();
        assert_eq!(err, LeagueError::not_found("Player 5 not on team 1"));

        let err = trades
            .execute_trade(&mut data, &trade(vec![], vec![TradeAsset::Pick { year: 2025, round: 1 }]))
            .unwrap_err();
        assert_eq!(err, LeagueError::not_found("Team 2 does not own 2025 round 1 pick"));

        let unknown = TradeRequest {
            team_b: 77,
            ..trade(vec![], vec![])
        };
        assert!(matches!(trades.execute_trade(&mut data, &unknown), Err(LeagueError::NotFound(_))));

        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_duplicate_asset_rejected() {
        let mut data = league();

        let err = service()
            .execute_trade(&mut data, &trade(vec![player_asset(2), player_asset(2)], vec![]))
            .unwrap_err();

        assert!(matches!(err, LeagueError::Invalid(_)));
    }

    #[test]
    fn test_roster_limits_only_block_worsening() {
        let mut data = league();
        let tight = TradeService::new(
            GameRules {
                roster_min: 5,
                roster_max: 5,
                ..GameRules::default()
            },
            TradeSettings::default(),
        );

        let err = tight
            .execute_trade(&mut data, &trade(vec![], vec![player_asset(6)]))
            .unwrap_err();
        assert_eq!(err, LeagueError::rule("Buffalo Bills would exceed the roster limit (6 > 5)"));

        // one-for-one keeps both teams at the bound
        assert!(tight
            .execute_trade(&mut data, &trade(vec![player_asset(2)], vec![player_asset(6)]))
            .is_ok());
    }

    #[test]
    fn test_roster_minimum() {
        let mut data = league();
        let tight = TradeService::new(
            GameRules {
                roster_min: 5,
                ..GameRules::default()
            },
            TradeSettings::default(),
        );

        let err = tight
            .execute_trade(&mut data, &trade(vec![player_asset(2)], vec![]))
            .unwrap_err();

        assert_eq!(err, LeagueError::rule("Buffalo Bills would fall below the roster minimum (4 < 5)"));
    }

    #[test]
    fn test_salary_cap_rejection_is_atomic() {
        let mut data = league();
        data.players.get_mut(&6).unwrap().salary = 150_000_000;
        let snapshot = data.clone();

        let err = service()
            .execute_trade(&mut data, &trade(vec![player_asset(2)], vec![player_asset(6)]))
            .unwrap_err();

        assert!(matches!(err, LeagueError::RuleViolation(ref msg) if msg.contains("salary cap")));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_depth_rejection_after_provisional_moves_rolls_back() {
        let mut data = league();
        let snapshot = data.clone();
        let trades = TradeService::new(
            GameRules {
                roster_min: 0,
                min_position_depth: BTreeMap::from([(Position::RB, 1)]),
                ..GameRules::default()
            },
            TradeSettings::default(),
        );

        let err = trades
            .execute_trade(&mut data, &trade(vec![player_asset(2)], vec![]))
            .unwrap_err();

        assert!(matches!(err, LeagueError::RuleViolation(ref msg) if msg.contains("depth at RB")));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_elite_qb_limit() {
        let mut data = league();
        let snapshot = data.clone();

        let err = service()
            .execute_trade(&mut data, &trade(vec![player_asset(9)], vec![player_asset(5)]))
            .unwrap_err();

        assert_eq!(err, LeagueError::rule("Buffalo Bills would exceed the elite QB limit (2 > 1)"));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_propose_never_commits() {
        let data = league();
        let snapshot = data.clone();

        let result = service()
            .propose_trade(&data, &trade(vec![player_asset(2)], vec![player_asset(6)]))
            .unwrap();

        assert_eq!(result.team_b_received.players[0].team_id, Some(2));
        assert_eq!(data, snapshot);
    }

    #[test]
    fn test_strict_fairness_is_opt_in() {
        let mut data = league();
        data.players.insert(12, player(12, "Depth Back", Position::RB, 60, Some(2), Some(2), 1_000_000));
        let lopsided = trade(vec![player_asset(3)], vec![player_asset(12)]);

        assert!(service().propose_trade(&data, &lopsided).is_ok());

        let strict = TradeRequest {
            strict_fairness: true,
            ..lopsided
        };
        assert!(matches!(
            service().propose_trade(&data, &strict),
            Err(LeagueError::RuleViolation(ref msg)) if msg.contains("value gap")
        ));
    }
}
