//! HS256 token issuing and verification.
//!
//! A single [`TokenSigner`] is built at startup from [`TokenConfig`] and shared
//! by the login handler and the auth middleware. Both operations are plain
//! synchronous functions with no I/O.
//!
//! Expiry is checked here rather than by `jsonwebtoken`, against a `now` that
//! callers may inject: a token is valid while `now < exp`, with no leeway.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use academia_config::{MAX_TTL_SECONDS, TokenConfig};

use crate::{AuthError, Claims, Identity, bearer_token};

#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenSigner {
    pub fn new(config: &TokenConfig) -> Result<Self, AuthError> {
        if config.secret.is_empty() {
            return Err(AuthError::Configuration(
                "signing secret is empty".to_string(),
            ));
        }
        if !(1..=MAX_TTL_SECONDS).contains(&config.ttl_seconds) {
            return Err(AuthError::Configuration(format!(
                "token lifetime must be between 1 and {} seconds, got {}",
                MAX_TTL_SECONDS, config.ttl_seconds
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl_seconds: config.ttl_seconds,
        })
    }

    /// Lifetime of issued tokens, in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Issues a token for `identity`, valid for the configured lifetime.
    pub fn issue(&self, identity: Identity) -> Result<String, AuthError> {
        self.issue_at(identity, Utc::now())
    }

    pub fn issue_at(&self, identity: Identity, now: DateTime<Utc>) -> Result<String, AuthError> {
        let iat = now.timestamp();
        let exp = iat.checked_add(self.ttl_seconds).ok_or_else(|| {
            AuthError::Configuration(format!(
                "token lifetime of {} seconds overflows the expiry",
                self.ttl_seconds
            ))
        })?;
        let claims = Claims {
            user: identity,
            iat,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Configuration(format!("failed to sign token: {}", e)))
    }

    /// Verifies signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidOrExpiredCredential)?;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::InvalidOrExpiredCredential);
        }

        Ok(claims)
    }

    /// Parses an `Authorization` header value and verifies its bearer token.
    pub fn verify_authorization(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let token = bearer_token(header)?;
        self.verify(token)
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
