use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, UserRole};

use super::jwt::Claims;

/// Extractor that requires authentication. Returns 401 if no valid token.
pub struct AuthRequired(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthRequired {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthRequired)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor that requires authentication AND a specific role.
/// Returns 401 if unauthenticated, 403 if the user's role does not satisfy the required role.
///
/// Role constants (match `UserRole` variants):
/// - 0 = Citizen
/// - 1 = Examiner
/// - 2 = Investigator
/// - 3 = Admin (satisfies all roles)
pub struct RoleRequired<const ROLE: u8>(pub Claims);

impl<const ROLE: u8, S: Send + Sync> FromRequestParts<S> for RoleRequired<ROLE> {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let user_role = UserRole::from_str_or_default(&claims.role);
        let required_role = match ROLE {
            1 => UserRole::Examiner,
            2 => UserRole::Investigator,
            3 => UserRole::Admin,
            _ => UserRole::Citizen,
        };

        if !user_role.satisfies(&required_role) {
            return Err(AppError::forbidden(format!(
                "{} role or higher required",
                required_role.as_str()
            )));
        }

        Ok(RoleRequired(claims))
    }
}
