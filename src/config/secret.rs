//! Secure handling of the API token using the secrecy crate
//!
//! The token is wrapped in a `Secret` so that memory is zeroed when it is
//! dropped and it never shows up in Debug output or logs.
//!
//! # Example
//!
//! ```rust
//! use baserow_dump::config::AuthToken;
//!
//! let token = AuthToken::new("abc123");
//! assert_eq!(token.header_value(), "Token abc123");
//! assert_eq!(format!("{token:?}"), "AuthToken([REDACTED])");
//! ```

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Database token sent as `Authorization: Token <value>` on every request
#[derive(Clone)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Wrap a raw token value
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Token {}", self.0.expose_secret())
    }

    /// Check if the token is empty
    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    /// Masked form for display, keeping only the last four characters
    pub fn masked(&self) -> String {
        let secret = self.0.expose_secret();
        let visible: String = secret
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if secret.chars().count() <= 4 {
            "****".to_string()
        } else {
            format!("****{visible}")
        }
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}
