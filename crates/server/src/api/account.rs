use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Login with email and password. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{cookies, jwt, password as pw};
    use shared_types::{AppError, LoginRequest};

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let user = crate::repo::user::find_by_email(db, &email)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let password_hash = user
        .password_hash
        .clone()
        .ok_or_else(|| AppError::unauthorized("Invalid email or password").into_server_fn_error())?;

    let valid = pw::verify_password(&password, &password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    if !valid {
        tracing::info!(email, "login rejected: bad credentials");
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    let role = crate::auth::maybe_promote_admin(db, user.id, &user.email, user.role.clone()).await;

    let access_token = jwt::create_access_token(user.id, &user.email, &role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let (refresh_token, expires_at) = jwt::create_refresh_token(user.id, &user.email, &role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    crate::repo::user::store_refresh_token(db, user.id, &refresh_hash, expires_at)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    // Schedule cookies to be set by the middleware
    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    tracing::info!(user_id = user.id, role, "login succeeded");

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        email: user.email,
        role,
    })
}

/// Create a new account. Only honored when the `registration` feature
/// flag is on. New accounts start as citizens; `ADMIN_EMAIL` promotes a
/// matching address to admin immediately so a fresh deployment can
/// bootstrap its first investigator-capable login.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    username: String,
    display_name: String,
    email: String,
    password: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use shared_types::{AppError, RegisterRequest};

    if !crate::config::feature_flags().registration {
        return Err(AppError::forbidden("Registration is disabled").into_server_fn_error());
    }

    let req = RegisterRequest {
        username: username.clone(),
        display_name: display_name.clone(),
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    let user = crate::repo::user::create(
        db,
        &username,
        &display_name,
        &email,
        &password_hash,
        "citizen",
    )
    .await
    .map_err(|e| e.into_server_fn_error())?;

    let role = crate::auth::maybe_promote_admin(db, user.id, &user.email, user.role.clone()).await;

    tracing::info!(user_id = user.id, role, "account registered");

    Ok(AuthUser {
        id: user.id,
        username: user.username,
        display_name: user.display_name,
        email: user.email,
        role,
    })
}

/// Get the currently authenticated user, or None if the session is invalid.
/// Tries the middleware-validated claims first, then falls back to parsing
/// cookies directly (covers server-side rendering before middleware runs).
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::{cookies, jwt};

    let ctx = match dioxus::fullstack::FullstackContext::current() {
        Some(c) => c,
        None => return Ok(None),
    };

    let parts = ctx.parts_mut();

    // Primary: read Claims from extensions (auth_middleware already validated)
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return super::auth::fetch_auth_user(claims.sub).await;
    }

    // Fallback: parse cookies directly
    let headers = parts.headers.clone();
    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = jwt::validate_access_token(&token) {
            return super::auth::fetch_auth_user(claims.sub).await;
        }
    }

    Ok(None)
}

/// Logout: revoke all refresh tokens for the user and clear auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(token) = cookies::extract_access_token(&headers) {
            if let Ok(claims) = jwt::validate_access_token(&token) {
                let db = get_db().await;
                let _ = crate::repo::user::revoke_refresh_tokens(db, claims.sub).await;
                tracing::info!(user_id = claims.sub, "logout");
            }
        }
    }

    // Schedule cookie clearing via middleware
    cookies::schedule_clear_cookies();

    Ok(())
}
