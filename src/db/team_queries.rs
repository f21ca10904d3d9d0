use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::team::Team;

#[derive(Debug)]
pub struct TeamQueries {
    pool: PgPool,
}

impl TeamQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: Uuid,
        name: &str,
        pot: Option<i32>,
        group_id: Option<Uuid>,
    ) -> Result<Team, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (tournament_id, name, pot, group_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(tournament_id)
        .bind(name)
        .bind(pot)
        .bind(group_id)
        .fetch_one(&mut **tx)
        .await
    }

    /// Teams of one group in a stable order. Draw-time inserts share a
    /// transaction timestamp, so the name disambiguates.
    pub async fn list_for_group(&self, group_id: Uuid) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE group_id = $1 ORDER BY created_at ASC, name ASC",
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_for_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, sqlx::Error> {
        sqlx::query_as::<_, Team>(
            "SELECT * FROM teams WHERE tournament_id = $1 ORDER BY created_at ASC, name ASC",
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }
}
