use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::matches::{CreateMatchRequest, MatchUpdateRequest};
use crate::tournament::service::{TournamentService, TournamentServiceError};

/// List all matches with team and group names
pub async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.list_matches().await {
        Ok(matches) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": matches,
            "total_count": matches.len()
        }))),
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve matches"
            })))
        }
    }
}

/// Create a match outside the draw flow
#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(
        home_team_id = %request.home_team_id,
        away_team_id = %request.away_team_id
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.create_match(request.into_inner()).await {
        Ok(created) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": created
        }))),
        Err(e) => {
            tracing::error!("Failed to create match: {}", e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to create match: {}", e)
            })))
        }
    }
}

/// Update a match's scores and status. Completing a match stamps the
/// completion time and triggers a standings recompute for its group
#[tracing::instrument(
    name = "Update match",
    skip(request, pool),
    fields(match_id = %match_id)
)]
pub async fn update_match(
    match_id: Uuid,
    request: web::Json<MatchUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tracing::info!(
        "Updating match {}: {:?} - {:?} ({:?})",
        match_id,
        request.home_score,
        request.away_score,
        request.status
    );

    let service = TournamentService::new(pool.get_ref().clone());

    match service.update_match(match_id, request.into_inner()).await {
        Ok(updated) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": updated
        }))),
        Err(TournamentServiceError::Database(sqlx::Error::RowNotFound)) => {
            Ok(HttpResponse::NotFound().json(json!({
                "success": false,
                "message": "Match not found"
            })))
        }
        Err(e) => {
            tracing::error!("Failed to update match {}: {}", match_id, e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to update match: {}", e)
            })))
        }
    }
}
