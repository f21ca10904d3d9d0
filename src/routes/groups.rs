// src/routes/groups.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::tournament::group_handler;

/// Get group standings, recomputed on every request
#[get("/{group_id}/standings")]
async fn get_group_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let group_id = path.into_inner();
    group_handler::get_group_standings(group_id, pool).await
}
