// src/models/group.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::standings::StandingRow;
use crate::models::team::Team;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupWithTeams {
    pub group: Group,
    pub teams: Vec<Team>,
}

/// Response for the standings endpoint: the group plus its freshly computed
/// table, ordered by rank.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStandingsResponse {
    pub group: Group,
    pub teams: Vec<Team>,
    pub standings: Vec<StandingRow>,
}
