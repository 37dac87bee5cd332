use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ComplaintResponse, CourtReferralResponse, PushToCourtRequest,
    PushToCourtResponse,
};
use sqlx::{Pool, Postgres};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::db::AppState;
use crate::health;
use crate::rest;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::complaint::list_complaints,
        rest::complaint::get_complaint,
        rest::court::push_to_court,
        rest::court::list_referrals,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        ComplaintResponse,
        CourtReferralResponse,
        PushToCourtRequest,
        PushToCourtResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "complaints", description = "Complaint listing endpoints"),
        (name = "court", description = "Court referral endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "HashProof API",
        description = "Complaint investigation and court referral API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(pool: Pool<Postgres>) -> Router {
    let state = AppState { pool };

    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
