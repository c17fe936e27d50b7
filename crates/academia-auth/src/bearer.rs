//! `Authorization` header parsing.

use crate::AuthError;

/// Extracts the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively and must be followed by exactly
/// one non-empty token. Anything else, including an absent header, is a
/// [`AuthError::MissingCredential`].
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::MissingCredential)?;
    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MissingCredential)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingCredential);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}
