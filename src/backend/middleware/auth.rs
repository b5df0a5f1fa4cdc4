/**
 * Authentication Extractor
 *
 * Protects routes that need a caller identity. The bearer token from the
 * `Authorization` header is verified and the user id handed to the
 * handler; the auth service itself never verifies tokens.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::backend::error::AuthError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from a session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Axum extractor for the authenticated caller
///
/// Rejects with `401 Unauthorized` if the token is missing or invalid.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        Ok(AuthUser(AuthenticatedUser { user_id }))
    }
}

/// Extract the token from `Authorization: Bearer <token>`
pub fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::unauthorized("Missing authorization header.")
        })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            AuthError::unauthorized("Authorization header must be a bearer token.")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("http://example.com/auth/me");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token() {
        let parts = parts_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_missing_header() {
        let parts = parts_with(None);
        assert_matches!(bearer_token(&parts), Err(AuthError::Unauthorized { .. }));
    }

    #[test]
    fn test_wrong_scheme() {
        let parts = parts_with(Some("Basic dXNlcjpwYXNz"));
        assert_matches!(bearer_token(&parts), Err(AuthError::Unauthorized { .. }));

        let parts = parts_with(Some("Bearer "));
        assert_matches!(bearer_token(&parts), Err(AuthError::Unauthorized { .. }));
    }
}
