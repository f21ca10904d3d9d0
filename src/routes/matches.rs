// src/routes/matches.rs
use actix_web::{get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::tournament::match_handler;
use crate::models::matches::{CreateMatchRequest, MatchUpdateRequest};

/// List all matches
#[get("")]
async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::list_matches(pool).await
}

/// Create a match
#[post("")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, pool).await
}

/// Update a match's scores and status
#[put("/{match_id}")]
async fn update_match(
    path: web::Path<Uuid>,
    request: web::Json<MatchUpdateRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::update_match(match_id, request, pool).await
}
