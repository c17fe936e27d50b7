//! Token signing configuration.
//!
//! The issuer and the verifier are both built from one [`TokenConfig`], so a
//! token issued by this process is always verifiable by it.
//!
//! # Environment Variables
//!
//! - `TOKEN_SIGNING_SECRET`: HMAC secret (required, non-empty)
//! - `TOKEN_TTL_SECONDS`: token lifetime in seconds (default: 120, at most one year)

use crate::{ConfigError, parse_or};

pub const SECRET_VAR: &str = "TOKEN_SIGNING_SECRET";
pub const TTL_VAR: &str = "TOKEN_TTL_SECONDS";

/// Default token lifetime.
pub const DEFAULT_TTL_SECONDS: i64 = 120;

/// Longest accepted token lifetime (365 days).
pub const MAX_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(SECRET_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(SECRET_VAR))?;

        let ttl_seconds = parse_or(&lookup, TTL_VAR, DEFAULT_TTL_SECONDS)?;
        if !(1..=MAX_TTL_SECONDS).contains(&ttl_seconds) {
            return Err(ConfigError::Invalid {
                key: TTL_VAR,
                value: ttl_seconds.to_string(),
            });
        }

        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
