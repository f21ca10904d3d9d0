use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

use crate::models::matches::{CreateMatchRequest, Match, MatchUpdateRequest, NewFixture};
use crate::models::matches::MatchWithTeams;

#[derive(Debug)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert_fixture_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        fixture: &NewFixture,
    ) -> Result<Match, sqlx::Error> {
        debug!(
            "Creating fixture: group {} - {} (home) vs {} (away)",
            fixture.group_id, fixture.home_team_id, fixture.away_team_id
        );

        sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                tournament_id, group_id, home_team_id, away_team_id, matchday, status
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(fixture.tournament_id)
        .bind(fixture.group_id)
        .bind(fixture.home_team_id)
        .bind(fixture.away_team_id)
        .bind(fixture.matchday)
        .bind(fixture.status.as_str())
        .fetch_one(&mut **tx)
        .await
    }

    /// Manual fixture creation outside the draw flow. Starts SCHEDULED with
    /// no scores.
    pub async fn create(&self, request: &CreateMatchRequest) -> Result<Match, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                tournament_id, group_id, home_team_id, away_team_id, matchday, status
            ) VALUES ($1, $2, $3, $4, $5, 'SCHEDULED')
            RETURNING *
            "#,
        )
        .bind(request.tournament_id)
        .bind(request.group_id)
        .bind(request.home_team_id)
        .bind(request.away_team_id)
        .bind(request.matchday)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find(&self, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All matches with team and group names, matchday first the way the
    /// schedule screen lists them.
    pub async fn list_with_teams(&self) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        sqlx::query_as::<_, MatchWithTeams>(
            r#"
            SELECT
                m.*,
                h.name AS home_team_name,
                a.name AS away_team_name,
                g.name AS group_name
            FROM matches m
            JOIN teams h ON m.home_team_id = h.id
            JOIN teams a ON m.away_team_id = a.id
            LEFT JOIN groups g ON m.group_id = g.id
            ORDER BY m.matchday ASC, m.created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn list_for_tournament(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<MatchWithTeams>, sqlx::Error> {
        sqlx::query_as::<_, MatchWithTeams>(
            r#"
            SELECT
                m.*,
                h.name AS home_team_name,
                a.name AS away_team_name,
                g.name AS group_name
            FROM matches m
            JOIN teams h ON m.home_team_id = h.id
            JOIN teams a ON m.away_team_id = a.id
            LEFT JOIN groups g ON m.group_id = g.id
            WHERE m.tournament_id = $1
            ORDER BY m.matchday ASC, m.created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
    }

    /// The completed-match set the standings are computed from.
    pub async fn completed_for_group(&self, group_id: Uuid) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT * FROM matches
            WHERE group_id = $1 AND status = 'COMPLETED'
            ORDER BY created_at ASC
            "#,
        )
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Apply a partial update. The completion timestamp follows the status:
    /// stamped when it becomes COMPLETED, cleared when it becomes anything
    /// else, untouched when the status is not part of the update.
    pub async fn apply_update(
        &self,
        match_id: Uuid,
        request: &MatchUpdateRequest,
    ) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET home_score = COALESCE($1::int, home_score),
                away_score = COALESCE($2::int, away_score),
                status = COALESCE($3::varchar, status),
                played_at = CASE
                    WHEN $3::varchar IS NULL THEN played_at
                    WHEN $3::varchar = 'COMPLETED' THEN NOW()
                    ELSE NULL
                END,
                updated_at = NOW()
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(request.home_score)
        .bind(request.away_score)
        .bind(request.status.map(|status| status.as_str()))
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
    }
}
