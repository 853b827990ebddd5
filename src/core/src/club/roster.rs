use crate::club::{InjuryStatus, Player, PlayerStatus, Position, TeamSummary};
use crate::league::LeagueData;
use crate::rules::GameRules;
use crate::{LeagueError, LeagueResult};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A depth chart slot label such as `QB1` or `EDGE2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepthSlot {
    pub position: Position,
    pub order: u32,
}

impl DepthSlot {
    pub fn new(position: Position, order: u32) -> Self {
        DepthSlot { position, order }
    }
}

impl Display for DepthSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.position, self.order)
    }
}

impl FromStr for DepthSlot {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slot = s.trim();
        let split = slot
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| LeagueError::invalid(format!("Invalid depth chart slot '{}'", s)))?;
        let (letters, digits) = slot.split_at(split);

        let position: Position = letters
            .parse()
            .map_err(|_| LeagueError::invalid(format!("Invalid depth chart slot '{}'", s)))?;
        let order: u32 = digits
            .parse()
            .map_err(|_| LeagueError::invalid(format!("Invalid depth chart slot '{}'", s)))?;

        if order == 0 {
            return Err(LeagueError::invalid(format!("Invalid depth chart slot '{}'", s)));
        }

        Ok(DepthSlot { position, order })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthChartEntry {
    pub slot: String,
    #[serde(default, alias = "playerId")]
    pub player_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthChartRow {
    pub slot: String,
    pub position: Position,
    pub order: u32,
    pub player_id: u32,
    pub name: String,
    pub overall_rating: u32,
    pub injury_status: InjuryStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignResult {
    pub team: TeamSummary,
    pub player: Player,
}

/// Free agency and depth chart maintenance under [`GameRules`].
#[derive(Debug, Clone)]
pub struct RosterService {
    rules: GameRules,
}

impl RosterService {
    pub fn new(rules: GameRules) -> Self {
        RosterService { rules }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn list_free_agents<'d>(&self, data: &'d LeagueData, year: Option<u32>) -> Vec<&'d Player> {
        data.free_agents(year)
    }

    /// Next open slot at `position`: one past the deepest order already used
    /// by the team there.
    pub fn next_depth_slot(&self, data: &LeagueData, team_id: u32, position: Position) -> DepthSlot {
        DepthSlot::new(position, data.next_depth_order(team_id, position))
    }

    /// Moves a player onto a team's roster at the next open depth slot.
    pub fn place_on_roster(&self, data: &mut LeagueData, player_id: u32, team_id: u32) -> LeagueResult<()> {
        let position = data.player(player_id).map(|p| p.position).ok_or_else(|| {
            LeagueError::not_found(format!("Player {} not found", player_id))
        })?;
        let slot = self.next_depth_slot(data, team_id, position);

        let player = data.player_mut(player_id)?;
        player.team_id = Some(team_id);
        player.status = PlayerStatus::Active;
        player.free_agent_year = None;
        player.assign_depth(slot.order);

        Ok(())
    }

    /// Every `min_position_depth` requirement holds for the team's active,
    /// charted players.
    pub fn validate_depth_requirements(&self, data: &LeagueData, team_id: u32) -> LeagueResult<()> {
        for (position, minimum) in &self.rules.min_position_depth {
            let depth = data.charted_depth(team_id, *position);

            if depth < *minimum {
                let team = data
                    .team(team_id)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| format!("Team {}", team_id));

                return Err(LeagueError::rule(format!(
                    "{} would fall below required depth at {} ({} of {})",
                    team, position, depth, minimum
                )));
            }
        }

        Ok(())
    }

    pub fn sign_free_agent(&self, data: &mut LeagueData, team_id: u32, player_id: u32) -> LeagueResult<SignResult> {
        data.atomically(|working| {
            let team = working.require_team(team_id)?.summary();

            let player = working
                .player(player_id)
                .ok_or_else(|| LeagueError::not_found(format!("Free agent {} not found", player_id)))?;

            if !player.is_free_agent() {
                return Err(LeagueError::precondition(format!(
                    "Player {} is not a free agent",
                    player_id
                )));
            }

            let salary = player.salary;
            let roster_size = working.roster_size(team_id);

            if roster_size >= self.rules.roster_max {
                return Err(LeagueError::rule(format!(
                    "{} roster limit reached ({} of {})",
                    team.name, roster_size, self.rules.roster_max
                )));
            }

            let payroll = working.payroll(team_id);
            if payroll + salary > self.rules.salary_cap {
                return Err(LeagueError::rule(format!(
                    "Signing would exceed salary cap: {} + {} > {}",
                    payroll, salary, self.rules.salary_cap
                )));
            }

            self.place_on_roster(working, player_id, team_id)?;
            working.player_mut(player_id)?.contract_years = self.rules.max_contract_years;

            self.validate_depth_requirements(working, team_id)?;

            let player = working.player_mut(player_id)?.clone();
            info!("{} signed {} ({})", team.abbreviation, player.name, player.id);

            Ok(SignResult { team, player })
        })
    }

    pub fn depth_chart(&self, data: &LeagueData, team_id: u32) -> LeagueResult<Vec<DepthChartRow>> {
        data.require_team(team_id)?;

        let mut rows: Vec<DepthChartRow> = data
            .active_roster(team_id)
            .into_iter()
            .filter_map(|p| {
                p.depth_chart_order.map(|order| DepthChartRow {
                    slot: DepthSlot::new(p.position, order).to_string(),
                    position: p.position,
                    order,
                    player_id: p.id,
                    name: p.name.clone(),
                    overall_rating: p.overall_rating,
                    injury_status: p.injury_status,
                })
            })
            .collect();

        rows.sort_by_key(|r| (r.position, r.order, r.player_id));

        Ok(rows)
    }

    /// Applies slot assignments in order and returns how many were applied.
    ///
    /// A slot is vacated before its new holder moves in; an entry without a
    /// player only vacates the slot.
    pub fn update_depth_chart(&self, data: &mut LeagueData, team_id: u32, entries: &[DepthChartEntry]) -> LeagueResult<usize> {
        data.atomically(|working| {
            working.require_team(team_id)?;

            let slots = entries
                .iter()
                .map(|e| e.slot.parse::<DepthSlot>())
                .collect::<LeagueResult<Vec<_>>>()?;

            let mut seen_slots = HashSet::new();
            for (slot, entry) in slots.iter().zip(entries) {
                if !seen_slots.insert(*slot) {
                    return Err(LeagueError::invalid(format!("Duplicate depth chart slot {}", entry.slot)));
                }
            }

            let mut seen_players = HashSet::new();
            for player_id in entries.iter().filter_map(|e| e.player_id) {
                if !seen_players.insert(player_id) {
                    return Err(LeagueError::invalid(format!(
                        "Player {} listed more than once",
                        player_id
                    )));
                }
            }

            for (slot, entry) in slots.iter().zip(entries) {
                let Some(player_id) = entry.player_id else {
                    continue;
                };

                let player = working
                    .player(player_id)
                    .filter(|p| p.is_active_on(team_id))
                    .ok_or_else(|| LeagueError::not_found(format!("Player {} not on team {}", player_id, team_id)))?;

                if player.position != slot.position {
                    return Err(LeagueError::invalid(format!(
                        "Player {} plays {} and cannot fill {}",
                        player_id, player.position, slot
                    )));
                }
            }

            for (slot, entry) in slots.iter().zip(entries) {
                let holders: Vec<u32> = working
                    .team_players(team_id)
                    .iter()
                    .filter(|p| p.position == slot.position && p.depth_chart_order == Some(slot.order))
                    .map(|p| p.id)
                    .collect();

                for holder in holders {
                    working.player_mut(holder)?.clear_depth();
                }

                if let Some(player_id) = entry.player_id {
                    working.player_mut(player_id)?.assign_depth(slot.order);
                }
            }

            self.validate_depth_requirements(working, team_id)?;

            Ok(entries.len())
        })
    }
}
