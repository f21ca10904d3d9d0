// src/models/tournament.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::group::GroupWithTeams;
use crate::models::matches::MatchWithTeams;
use crate::models::team::Team;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    Registration,
    GroupPhase,
    Knockout,
    Completed,
}

impl From<String> for TournamentStatus {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "GROUP_PHASE" => TournamentStatus::GroupPhase,
            "KNOCKOUT" => TournamentStatus::Knockout,
            "COMPLETED" => TournamentStatus::Completed,
            _ => TournamentStatus::Registration,
        }
    }
}

impl TournamentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Registration => "REGISTRATION",
            TournamentStatus::GroupPhase => "GROUP_PHASE",
            TournamentStatus::Knockout => "KNOCKOUT",
            TournamentStatus::Completed => "COMPLETED",
        }
    }
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournamentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<TournamentStatus>,
}

/// A tournament with its teams, groups and matches resolved, the shape the
/// client renders from a single request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDetail {
    pub tournament: Tournament,
    pub teams: Vec<Team>,
    pub groups: Vec<GroupWithTeams>,
    pub matches: Vec<MatchWithTeams>,
}
