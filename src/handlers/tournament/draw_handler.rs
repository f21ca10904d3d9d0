use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::draw::{CompleteDrawRequest, RunDrawRequest};
use crate::tournament::service::TournamentService;

/// Commit a finished draw: groups, team assignments and the generated
/// group-stage fixtures, then move the tournament into its group phase
#[tracing::instrument(
    name = "Complete draw",
    skip(request, pool),
    fields(
        tournament_id = %tournament_id,
        team_count = %request.teams.len(),
        group_count = %request.groups.len()
    )
)]
pub async fn complete_draw(
    tournament_id: Uuid,
    request: web::Json<CompleteDrawRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tracing::info!(
        "Completing draw for tournament {} with {} teams in {} groups",
        tournament_id,
        request.teams.len(),
        request.groups.len()
    );

    let service = TournamentService::new(pool.get_ref().clone());

    match service.complete_draw(tournament_id, request.into_inner()).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": outcome
        }))),
        Err(sqlx::Error::RowNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Tournament not found"
        }))),
        Err(e) => {
            tracing::error!("Draw completion failed for tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to complete draw: {}", e)
            })))
        }
    }
}

/// Run the seeded draw on the server and commit the result in one request
#[tracing::instrument(
    name = "Run draw",
    skip(request, pool),
    fields(
        tournament_id = %tournament_id,
        pot_count = %request.pots.len(),
        group_count = %request.groups.len()
    )
)]
pub async fn run_draw(
    tournament_id: Uuid,
    request: web::Json<RunDrawRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.run_draw(tournament_id, request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(sqlx::Error::RowNotFound) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Tournament not found"
        }))),
        Err(e) => {
            tracing::error!("Draw failed for tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": format!("Failed to run draw: {}", e)
            })))
        }
    }
}
