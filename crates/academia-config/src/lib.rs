//! # Academia Config
//!
//! Configuration types for the Academia API, loaded once at startup from
//! environment variables (a `.env` file is read by the binaries with `dotenvy`).
//!
//! - [`token`]: token signing secret and lifetime
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: listen address
//! - [`cors`]: allowed CORS origins
//!
//! Every `from_env` delegates to a `from_lookup` that takes the variable
//! lookup as a closure, so parsing can be tested without touching the
//! process environment.
//!
//! # Example
//!
//! ```ignore
//! use academia_config::{TokenConfig, DatabaseConfig};
//!
//! let token_config = TokenConfig::from_env()?;
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod server;
pub mod token;

pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use token::{MAX_TTL_SECONDS, TokenConfig};

/// Reads a variable through `lookup` and parses it, falling back to `default`
/// when unset or empty.
pub(crate) fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key,
                value: raw.clone(),
            })
        }
        _ => Ok(default),
    }
}
