use crate::club::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    Active,
    FreeAgent,
    Inactive,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "active",
            PlayerStatus::FreeAgent => "free_agent",
            PlayerStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryStatus {
    Healthy,
    Questionable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub team_id: Option<u32>,
    pub overall_rating: u32,
    pub age: u32,
    pub status: PlayerStatus,
    pub salary: i64,
    pub contract_years: u32,
    pub free_agent_year: Option<u32>,
    pub depth_chart_position: Option<String>,
    pub depth_chart_order: Option<u32>,
    pub injury_status: InjuryStatus,
}

impl Player {
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn is_free_agent(&self) -> bool {
        self.status == PlayerStatus::FreeAgent
    }

    pub fn is_active_on(&self, team_id: u32) -> bool {
        self.is_active() && self.team_id == Some(team_id)
    }

    /// Depth order used for sorting; unslotted players sort last.
    pub fn depth_rank(&self) -> u32 {
        self.depth_chart_order.unwrap_or(999)
    }

    pub fn is_charted(&self) -> bool {
        self.depth_chart_order.is_some()
    }

    pub fn assign_depth(&mut self, order: u32) {
        self.depth_chart_order = Some(order);
        self.depth_chart_position = Some(format!("{}{}", self.position, order));
    }

    pub fn clear_depth(&mut self) {
        self.depth_chart_order = None;
        self.depth_chart_position = None;
    }

    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary {
            id: self.id,
            name: self.name.clone(),
            position: self.position,
        }
    }
}

/// Identity of a player as attached to plays and injuries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: u32,
    pub name: String,
    pub position: Position,
}
