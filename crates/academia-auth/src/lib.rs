//! # Academia Auth
//!
//! Bearer token issuing and verification for the Academia API.
//!
//! - [`claims`]: the self-asserted [`Identity`] and the signed [`Claims`]
//! - [`token`]: [`TokenSigner`], which issues and verifies HS256 tokens
//! - [`bearer`]: parsing of the `Authorization: Bearer <token>` header
//! - [`error`]: [`AuthError`] and its HTTP mapping
//!
//! Identities are not checked against any user store: whoever calls the login
//! endpoint gets a token for the identity they claim. Tokens only prove that
//! this server issued them and that they have not expired.
//!
//! # Example
//!
//! ```ignore
//! use academia_auth::{Identity, TokenSigner};
//! use academia_config::TokenConfig;
//!
//! let signer = TokenSigner::new(&TokenConfig::from_env()?)?;
//! let token = signer.issue(Identity::new("Ana", "ana@example.com"))?;
//! let claims = signer.verify(&token)?;
//! assert_eq!(claims.user.name.as_deref(), Some("Ana"));
//! ```

pub mod bearer;
pub mod claims;
pub mod error;
pub mod token;

pub use bearer::bearer_token;
pub use claims::{Claims, Identity};
pub use error::AuthError;
pub use token::TokenSigner;
