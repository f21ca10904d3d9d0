use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::tournament::service::{TournamentService, TournamentServiceError};

/// Get a group's standings, recomputed from its completed matches
#[tracing::instrument(
    name = "Get group standings",
    skip(pool),
    fields(group_id = %group_id)
)]
pub async fn get_group_standings(
    group_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let service = TournamentService::new(pool.get_ref().clone());

    match service.get_group_standings(group_id).await {
        Ok(Some(response)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "Group not found"
        }))),
        Err(TournamentServiceError::Standings(e)) => {
            tracing::error!("Standings computation failed for group {}: {}", group_id, e);
            Ok(HttpResponse::UnprocessableEntity().json(json!({
                "success": false,
                "message": format!("Standings could not be computed: {}", e)
            })))
        }
        Err(e) => {
            tracing::error!("Failed to get standings for group {}: {}", group_id, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to retrieve standings"
            })))
        }
    }
}
