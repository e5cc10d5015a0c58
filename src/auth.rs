use std::fmt;

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::store::LocalStore;

/// Prefix every usable access token starts with.
pub const TOKEN_PREFIX: &str = "vk1.";

const MASK_VISIBLE: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No credential stored when a flow required one.
    Missing,
    /// Login was given an empty token.
    Empty,
    /// Login was given a token without the expected prefix.
    BadPrefix,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Missing => {
                f.write_str("no access token stored (run `vkm login --token ...`)")
            }
            AuthError::Empty => f.write_str("access token must not be empty"),
            AuthError::BadPrefix => {
                write!(f, "access token must start with {}", TOKEN_PREFIX)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Login-time format check. The panel never verifies a token against the
/// social network; the execution service does that on first use.
pub fn validate_token(token: &str) -> Result<(), AuthError> {
    if token.trim().is_empty() {
        return Err(AuthError::Empty);
    }
    if !token.starts_with(TOKEN_PREFIX) {
        return Err(AuthError::BadPrefix);
    }
    Ok(())
}

/// Validates and persists the token with a login timestamp.
pub fn login(store: &LocalStore, token: &str) -> Result<()> {
    validate_token(token)?;
    let saved_at = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format login timestamp")?;
    store.set_access_token(token, &saved_at)
}

/// Clears the stored token. Logging out while logged out is fine.
pub fn logout(store: &LocalStore) -> Result<()> {
    store.clear_access_token()
}

/// Fetches the stored credential; absence aborts a flow before any network
/// interaction happens.
pub fn require_token(store: &LocalStore) -> Result<String> {
    Ok(store.get_access_token()?.ok_or(AuthError::Missing)?)
}

/// Display form of a token: first eight characters, rest replaced.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(MASK_VISIBLE).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_format_rules() {
        assert_eq!(validate_token(""), Err(AuthError::Empty));
        assert_eq!(validate_token("   "), Err(AuthError::Empty));
        assert_eq!(validate_token("abc123"), Err(AuthError::BadPrefix));
        assert_eq!(validate_token("vk1.abc123"), Ok(()));
    }

    #[test]
    fn masking_keeps_only_the_prefix_visible() {
        assert_eq!(mask_token("vk1.secret-token"), "vk1.secr***");
        assert_eq!(mask_token("vk1."), "vk1.***");
    }
}
