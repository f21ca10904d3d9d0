// src/models/draw.rs
use serde::{Deserialize, Serialize};

/// One team as submitted by the draw client: which pot it came from and which
/// group the draw placed it in.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DrawTeamEntry {
    pub name: String,
    pub pot: i32,
    pub group_index: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DrawGroupEntry {
    pub name: String,
}

/// Payload of `POST /tournaments/{id}/complete-draw`: the finished assignment
/// produced by a draw, ready to be committed to storage.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CompleteDrawRequest {
    pub teams: Vec<DrawTeamEntry>,
    pub groups: Vec<DrawGroupEntry>,
}

/// Payload of `POST /tournaments/{id}/draw`: pots of team names to be drawn
/// server-side into the given groups.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RunDrawRequest {
    pub pots: Vec<Vec<String>>,
    pub groups: Vec<String>,
}

/// One reveal step of a draw: `team` (drawn from 1-based `pot`) lands in the
/// group at `group_index`. A display layer consumes these at its own pace.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DrawEvent {
    pub pot: usize,
    pub team: String,
    pub group_index: usize,
}

/// Outcome of a committed draw.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawOutcome {
    pub groups_created: usize,
    pub teams_created: usize,
    pub fixtures_created: usize,
}

/// Outcome of a server-side draw: the reveal sequence plus the final
/// name-per-group partition, alongside what was written.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDrawResponse {
    pub events: Vec<DrawEvent>,
    pub groups: Vec<Vec<String>>,
    pub outcome: DrawOutcome,
}
