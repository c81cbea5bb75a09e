use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;

/// Header carrying the authenticated user id, set by the session layer in front of this service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller. Extracting it fails with 401 when the identity is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| AuthUser { id: id.to_string() })
            .ok_or(AppError::Unauthorized)
    }
}
