use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::group::Group;

#[derive(Debug)]
pub struct GroupQueries {
    pool: PgPool,
}

impl GroupQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tournament_id: Uuid,
        name: &str,
    ) -> Result<Group, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (tournament_id, name)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(tournament_id)
        .bind(name)
        .fetch_one(&mut **tx)
        .await
    }

    pub async fn find(&self, group_id: Uuid) -> Result<Option<Group>, sqlx::Error> {
        sqlx::query_as::<_, Group>("SELECT * FROM groups WHERE id = $1")
            .bind(group_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn list_for_tournament(&self, tournament_id: Uuid) -> Result<Vec<Group>, sqlx::Error> {
        sqlx::query_as::<_, Group>(
            "SELECT * FROM groups WHERE tournament_id = $1 ORDER BY name ASC",
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }
}
