use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::auth::extractors::{AuthRequired, RoleRequired};
use crate::error_convert::ValidateRequest;
use shared_types::{
    AppError, CourtReferralResponse, PushToCourtRequest, PushToCourtResponse,
};

/// Role constant for `RoleRequired` — investigator.
const INVESTIGATOR: u8 = 2;

// ── Court referral handler ─────────────────────────────────────────

/// POST /api/push-to-court
///
/// Creates a court referral for a complaint and moves the complaint to
/// "In Court". The response always carries the `{success, error?}`
/// shape; malformed input comes back as `success: false` rather than a
/// 4xx so clients only need to check one field.
#[utoipa::path(
    post,
    path = "/api/push-to-court",
    request_body = PushToCourtRequest,
    responses(
        (status = 200, description = "Referral outcome", body = PushToCourtResponse),
        (status = 401, description = "Not authenticated", body = AppError),
        (status = 403, description = "Investigator role required", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "court"
)]
pub async fn push_to_court(
    State(pool): State<Pool<Postgres>>,
    RoleRequired(claims): RoleRequired<INVESTIGATOR>,
    Json(body): Json<PushToCourtRequest>,
) -> Result<Json<PushToCourtResponse>, AppError> {
    if body.validate_request().is_err() {
        return Ok(Json(PushToCourtResponse::failed(
            "Please fill in all required fields",
        )));
    }

    let hearing = match NaiveDate::parse_from_str(&body.hearing_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return Ok(Json(PushToCourtResponse::failed(
                "Hearing date must be a valid date (YYYY-MM-DD)",
            )))
        }
    };

    let existing = match crate::repo::complaint::find_by_id(&pool, body.complaint_id).await? {
        Some(c) => c,
        None => return Ok(Json(PushToCourtResponse::failed("Complaint not found"))),
    };

    if existing.status.as_deref() == Some("In Court") {
        return Ok(Json(PushToCourtResponse::failed(
            "This complaint has already been pushed to court",
        )));
    }

    crate::repo::court_referral::create(
        &pool,
        body.complaint_id,
        body.court_details.trim(),
        hearing,
        body.remarks.as_deref().filter(|r| !r.trim().is_empty()),
        &body.investigator_email,
    )
    .await?;

    crate::repo::complaint::set_status(&pool, body.complaint_id, "In Court").await?;

    tracing::info!(
        complaint_id = %body.complaint_id,
        investigator = claims.sub,
        hearing_date = %hearing,
        "complaint referred to court"
    );

    Ok(Json(PushToCourtResponse::ok()))
}

/// GET /api/complaints/{id}/referrals
#[utoipa::path(
    get,
    path = "/api/complaints/{id}/referrals",
    params(
        ("id" = String, Path, description = "Complaint UUID")
    ),
    responses(
        (status = 200, description = "Referral history, oldest first", body = Vec<CourtReferralResponse>),
        (status = 401, description = "Not authenticated", body = AppError)
    ),
    security(("bearer_auth" = [])),
    tag = "court"
)]
pub async fn list_referrals(
    State(pool): State<Pool<Postgres>>,
    AuthRequired(_claims): AuthRequired,
    Path(id): Path<String>,
) -> Result<Json<Vec<CourtReferralResponse>>, AppError> {
    let uuid = Uuid::parse_str(&id).map_err(|_| AppError::bad_request("Invalid UUID format"))?;

    let referrals = crate::repo::court_referral::list_by_complaint(&pool, uuid).await?;
    Ok(Json(
        referrals.into_iter().map(CourtReferralResponse::from).collect(),
    ))
}
