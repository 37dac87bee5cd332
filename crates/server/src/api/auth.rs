// Server-only auth helpers for server functions.
// These are shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::AuthUser;

use crate::db::get_db;
use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
/// Returns the validated Claims or an "Authentication required" error.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse access token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Require the caller to be authenticated with the investigator role
/// (or admin, which satisfies it).
pub(crate) fn require_investigator() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::{AppError, UserRole};

    let claims = require_auth()?;
    let role = UserRole::from_str_or_default(&claims.role);
    if !role.satisfies(&UserRole::Investigator) {
        return Err(AppError::forbidden("Investigator role required").into_server_fn_error());
    }
    Ok(claims)
}

/// Fetch a full AuthUser by user ID. Returns None if the user no longer exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await;
    let user = crate::repo::user::find_by_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(user.map(AuthUser::from))
}
