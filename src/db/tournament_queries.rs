use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::tournament::{Tournament, TournamentStatus, UpdateTournamentRequest};

#[derive(Debug)]
pub struct TournamentQueries {
    pool: PgPool,
}

impl TournamentQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Tournament, sqlx::Error> {
        sqlx::query_as::<_, Tournament>(
            r#"
            INSERT INTO tournaments (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find(&self, tournament_id: Uuid) -> Result<Option<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments WHERE id = $1")
            .bind(tournament_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list(&self) -> Result<Vec<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
    }

    /// Partial update; absent fields keep their value.
    pub async fn update(
        &self,
        tournament_id: Uuid,
        request: &UpdateTournamentRequest,
    ) -> Result<Option<Tournament>, sqlx::Error> {
        sqlx::query_as::<_, Tournament>(
            r#"
            UPDATE tournaments
            SET name = COALESCE($1::varchar, name),
                description = COALESCE($2::text, description),
                status = COALESCE($3::varchar, status),
                updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.description.as_deref())
        .bind(request.status.map(|status| status.as_str()))
        .bind(tournament_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn set_status_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: Uuid,
        status: TournamentStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE tournaments
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(status.as_str())
        .bind(tournament_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
