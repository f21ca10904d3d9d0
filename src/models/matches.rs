// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use std::fmt;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub group_id: Option<Uuid>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub matchday: Option<i32>,
    pub played_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Completed,
    Postponed,
    Cancelled,
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "LIVE" => MatchStatus::Live,
            "COMPLETED" => MatchStatus::Completed,
            "POSTPONED" => MatchStatus::Postponed,
            "CANCELLED" => MatchStatus::Cancelled,
            _ => MatchStatus::Scheduled,
        }
    }
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "SCHEDULED",
            MatchStatus::Live => "LIVE",
            MatchStatus::Completed => "COMPLETED",
            MatchStatus::Postponed => "POSTPONED",
            MatchStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A match joined with the display names the client needs.
#[derive(Debug, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithTeams {
    #[sqlx(flatten)]
    pub fixture: Match,
    pub home_team_name: String,
    pub away_team_name: String,
    pub group_name: Option<String>,
}

/// A fixture to be inserted at draw-completion time. All generated fixtures
/// start SCHEDULED with no scores.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewFixture {
    pub tournament_id: Uuid,
    pub group_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub matchday: i32,
    pub status: MatchStatus,
}

// Request DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub tournament_id: Uuid,
    pub group_id: Option<Uuid>,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub matchday: Option<i32>,
}

/// Partial update applied to one match. When the status moves to COMPLETED the
/// completion timestamp is stamped and the group standings are recomputed.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdateRequest {
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: Option<MatchStatus>,
}
