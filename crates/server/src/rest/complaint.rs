use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::auth::extractors::AuthRequired;
use shared_types::{AppError, ComplaintResponse};

// ── Complaint handlers ─────────────────────────────────────────────

/// GET /api/complaints
#[utoipa::path(
    get,
    path = "/api/complaints",
    responses(
        (status = 200, description = "All complaints", body = Vec<ComplaintResponse>),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
) -> Result<Json<Vec<ComplaintResponse>>, AppError> {
    let complaints = crate::repo::complaint::list_all(&pool).await?;
    Ok(Json(
        complaints.into_iter().map(ComplaintResponse::from).collect(),
    ))
}

/// GET /api/complaints/{id}
#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(
        ("id" = String, Path, description = "Complaint UUID")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ComplaintResponse),
        (status = 404, description = "Not found", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "complaints"
)]
pub async fn get_complaint(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<ComplaintResponse>, AppError> {
    let uuid =
        Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let complaint = crate::repo::complaint::find_by_id(&pool, uuid)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Complaint {} not found", id)))?;

    Ok(Json(ComplaintResponse::from(complaint)))
}
