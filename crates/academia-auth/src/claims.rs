//! Token payload types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Identity claimed by the caller of the login endpoint.
///
/// Both fields are optional and unknown keys are rejected, so nothing the
/// client sends ends up in a token without being named here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct Identity {
    /// Display name of the caller
    #[serde(
        rename = "nombre",
        alias = "name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Ana")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// Signed token payload: `{ user, iat, exp }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user: Identity,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp); the token is valid strictly before it
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_uses_nombre_on_the_wire() {
        let serialized = serde_json::to_string(&Identity::new("Ana", "ana@x.com")).unwrap();
        assert_eq!(serialized, r#"{"nombre":"Ana","email":"ana@x.com"}"#);
    }

    #[test]
    fn test_identity_accepts_name_alias() {
        let identity: Identity = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(identity.name.as_deref(), Some("Ana"));
        assert_eq!(identity.email, None);
    }

    #[test]
    fn test_identity_rejects_unknown_fields() {
        let result = serde_json::from_str::<Identity>(r#"{"nombre":"Ana","admin":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_identity_is_allowed() {
        let identity: Identity = serde_json::from_str("{}").unwrap();
        assert_eq!(identity, Identity::default());
        assert!(identity.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let identity = Identity {
            name: None,
            email: Some("not-an-email".to_string()),
        };
        assert!(identity.validate().is_err());
    }
}
