use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tournament::{CreateTournamentRequest, UpdateTournamentRequest};
use crate::tournament::service::TournamentService;

/// Create a new tournament
#[tracing::instrument(
    name = "Create tournament",
    skip(request, pool),
    fields(tournament_name = %request.name)
)]
pub async fn create_tournament(
    request: web::Json<CreateTournamentRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.create_tournament(request.into_inner()).await {
        Ok(tournament) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": tournament
        }))),
        Err(e) => {
            tracing::error!("Failed to create tournament: {}", e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to create tournament: {}", e)
            })))
        }
    }
}

/// List all tournaments with their teams, groups and matches
pub async fn list_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.list_tournament_details().await {
        Ok(tournaments) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tournaments
        }))),
        Err(e) => {
            tracing::error!("Failed to list tournaments: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve tournaments"
            })))
        }
    }
}

/// Get one tournament with its teams, groups and matches
pub async fn get_tournament(
    tournament_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.get_tournament_detail(tournament_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": detail
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Tournament not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to get tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve tournament"
            })))
        }
    }
}

/// Update a tournament's name, description or status
#[tracing::instrument(
    name = "Update tournament",
    skip(request, pool),
    fields(tournament_id = %tournament_id)
)]
pub async fn update_tournament(
    tournament_id: Uuid,
    request: web::Json<UpdateTournamentRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.update_tournament(tournament_id, request.into_inner()).await {
        Ok(Some(tournament)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tournament
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Tournament not found"
        }))),
        Err(e) => {
            tracing::error!("Failed to update tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to update tournament: {}", e)
            })))
        }
    }
}
