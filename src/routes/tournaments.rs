// src/routes/tournaments.rs
use actix_web::{get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::tournament::{draw_handler, tournament_handler};
use crate::models::draw::{CompleteDrawRequest, RunDrawRequest};
use crate::models::tournament::{CreateTournamentRequest, UpdateTournamentRequest};

/// Create a new tournament
#[post("")]
async fn create_tournament(
    request: web::Json<CreateTournamentRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    tournament_handler::create_tournament(request, pool).await
}

/// List all tournaments with nested teams, groups and matches
#[get("")]
async fn list_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    tournament_handler::list_tournaments(pool).await
}

/// Get a specific tournament by ID
#[get("/{tournament_id}")]
async fn get_tournament(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    tournament_handler::get_tournament(tournament_id, pool).await
}

/// Update a tournament
#[put("/{tournament_id}")]
async fn update_tournament(
    path: web::Path<Uuid>,
    request: web::Json<UpdateTournamentRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    tournament_handler::update_tournament(tournament_id, request, pool).await
}

/// Commit a client-side draw result
#[post("/{tournament_id}/complete-draw")]
async fn complete_draw(
    path: web::Path<Uuid>,
    request: web::Json<CompleteDrawRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    draw_handler::complete_draw(tournament_id, request, pool).await
}

/// Run the seeded draw server-side and commit it
#[post("/{tournament_id}/draw")]
async fn run_draw(
    path: web::Path<Uuid>,
    request: web::Json<RunDrawRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();
    draw_handler::run_draw(tournament_id, request, pool).await
}
