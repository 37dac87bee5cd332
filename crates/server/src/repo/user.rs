use shared_types::{AppError, AuthUser};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

/// A user row as stored in the database. Never leaves the server —
/// `AuthUser` is the client-facing shape.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
}

impl From<UserRecord> for AuthUser {
    fn from(u: UserRecord) -> Self {
        AuthUser {
            id: u.id,
            username: u.username,
            display_name: u.display_name,
            email: u.email,
            role: u.role,
        }
    }
}

const USER_COLUMNS: &str = "id, username, display_name, email, password_hash, role";

/// Find a user by email.
pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<UserRecord>, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Insert a new user. Unique violations on email or username surface as
/// a Conflict via the sqlx error mapping.
pub async fn create(
    pool: &Pool<Postgres>,
    username: &str,
    display_name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
) -> Result<UserRecord, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(&format!(
        "INSERT INTO users (username, display_name, email, password_hash, role) \
         VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
    ))
    .bind(username)
    .bind(display_name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find a user by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<UserRecord>, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Store a hashed refresh token for a user.
pub async fn store_refresh_token(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
    expires_at: chrono::DateTime<chrono::Utc>,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(())
}

/// Revoke every active refresh token for a user (logout everywhere).
pub async fn revoke_refresh_tokens(pool: &Pool<Postgres>, user_id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE")
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(())
}
