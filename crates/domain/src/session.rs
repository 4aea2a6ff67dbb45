//! Session identity as persisted between page loads.

use serde::{Deserialize, Serialize};

/// Greeting used when no username is stored.
pub const FALLBACK_DISPLAY_NAME: &str = "Admin User";

/// The persisted session: who is logged in and their token.
///
/// The console never validates the token; it only reads it and clears it on
/// logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    /// The name shown in the page header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.token.is_none()
    }
}
