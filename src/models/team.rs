// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A team entered into a tournament. Created once at draw time; the pot and
/// group assignment never change afterward.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub pot: Option<i32>,
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
