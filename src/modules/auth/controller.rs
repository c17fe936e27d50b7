use axum::Json;
use axum::extract::State;
use tracing::{error, info, instrument};

use academia_auth::Identity;
use academia_core::{AppError, ErrorResponse};
use academia_models::TokenResponse;

use crate::metrics::track_token_issued;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Issue a bearer token for a claimed identity
///
/// The identity is not checked against any user store: the token only proves
/// that this server issued it and when it expires.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = Identity,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed body or unknown field", body = ErrorResponse),
        (status = 422, description = "Invalid email", body = ErrorResponse),
        (status = 500, description = "Token service misconfigured", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, identity))]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(identity): ValidatedJson<Identity>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state.tokens.issue(identity).map_err(|err| {
        error!(error = %err, "Failed to issue token");
        err
    })?;

    track_token_issued();
    info!(expires_in = state.tokens.ttl_seconds(), "Token issued");

    Ok(Json(TokenResponse::bearer(token, state.tokens.ttl_seconds())))
}
