use academia_core::AppError;
use thiserror::Error;

/// Why a token could not be issued or a request was not authorized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header, or one not shaped `Bearer <token>`.
    #[error("Missing or malformed bearer token")]
    MissingCredential,

    /// Bad signature, malformed token, or expired.
    #[error("Invalid or expired token")]
    InvalidOrExpiredCredential,

    #[error("Token service misconfigured: {0}")]
    Configuration(String),
}

impl AuthError {
    /// Short label used for logs and the `auth_rejections_total` metric.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::InvalidOrExpiredCredential => "invalid_credential",
            Self::Configuration(_) => "configuration",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential => AppError::unauthorized(err.to_string()),
            AuthError::InvalidOrExpiredCredential => AppError::forbidden(err.to_string()),
            AuthError::Configuration(_) => {
                AppError::internal(anyhow::anyhow!("Token service unavailable"))
            }
        }
    }
}
