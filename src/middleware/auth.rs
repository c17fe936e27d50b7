use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use academia_auth::{Claims, Identity};
use academia_core::AppError;

use crate::metrics::track_auth_rejection;
use crate::state::AppState;

/// Claims of the token that authorized the current request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn identity(&self) -> &Identity {
        &self.0.user
    }

    /// Name, else email, else `anonymous`; for logs.
    pub fn display_name(&self) -> &str {
        self.0
            .user
            .name
            .as_deref()
            .or(self.0.user.email.as_deref())
            .unwrap_or("anonymous")
    }
}

/// Rejects the request unless it carries a valid, unexpired bearer token.
///
/// Applied with `route_layer` so unmatched paths still answer `404`.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = state.tokens.verify_authorization(header).map_err(|err| {
        warn!(
            reason = err.reason(),
            method = %req.method(),
            path = %req.uri().path(),
            "Rejected unauthenticated request"
        );
        track_auth_rejection(err.reason());
        err
    })?;

    req.extensions_mut().insert(AuthUser(claims));

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Missing or malformed bearer token"))
    }
}
