// src/models/standings.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::team::Team;

/// One team's derived ranking record for a group. Never stored; recomputed
/// from the completed-match set on every request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub team_id: Uuid,
    pub team: String,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

impl StandingRow {
    /// A fresh row with all counters at zero.
    pub fn zeroed(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team: team.name.clone(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}
