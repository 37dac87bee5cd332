pub mod complaint;
pub mod court;

use axum::{
    routing::{get, post},
    Router,
};

use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/complaints", get(complaint::list_complaints))
        .route("/api/complaints/{id}", get(complaint::get_complaint))
        .route("/api/complaints/{id}/referrals", get(court::list_referrals))
        .route("/api/push-to-court", post(court::push_to_court))
}
