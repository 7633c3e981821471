//! Session types.
//!
//! - [`Credentials`] - Username/password pair, never persisted
//! - [`Token`] - Opaque capability returned by the token endpoint
//! - [`UserId`] - Identifier of the authenticated user
//! - [`SiteInfo`] - Site info payload for the token's owner

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Credentials
// ============================================================================

/// Login credentials for the Moodle token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Moodle username.
    pub username: String,
    /// Moodle password.
    pub password: String,
}

impl Credentials {
    /// Creates a new credential pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Token
// ============================================================================

/// Opaque access token issued by the Moodle service.
///
/// The token is passed explicitly to every authenticated call. Its lifetime
/// is governed by the service; nothing here refreshes or expires it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wraps a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token string for use as a request parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

// ============================================================================
// User Identity
// ============================================================================

/// Identifier of the authenticated user, scoped to one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Site info returned for the owner of a token.
///
/// Only the fields used here are modelled; the service sends many more.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Id of the user owning the token.
    #[serde(default)]
    pub userid: Option<u64>,

    /// Login name.
    #[serde(default)]
    pub username: Option<String>,

    /// Display name.
    #[serde(default)]
    pub fullname: Option<String>,

    /// Name of the Moodle site.
    #[serde(default)]
    pub sitename: Option<String>,

    /// Base URL of the Moodle site.
    #[serde(default)]
    pub siteurl: Option<String>,
}

impl SiteInfo {
    /// Returns the user id, if the payload carried one.
    pub fn user_id(&self) -> Option<UserId> {
        self.userid.map(UserId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = Token::new("abc123secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("abc123secret"));
        assert_eq!(token.as_str(), "abc123secret");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("student", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("student"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_site_info_user_id() {
        let info = SiteInfo {
            userid: Some(42),
            ..Default::default()
        };
        assert_eq!(info.user_id(), Some(UserId(42)));
        assert_eq!(SiteInfo::default().user_id(), None);
    }
}
