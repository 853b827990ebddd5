use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    pub id: u32,
    pub team_id: u32,
    pub year: u32,
    pub round: u32,
    pub original_team_id: u32,
}
