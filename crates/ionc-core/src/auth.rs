//! Per-call authentication context.

use secrecy::SecretString;

/// Identity and credential used to authorize one API call.
///
/// Derived from the config (user id) and session (token) every time it is
/// needed; nothing holds on to it between calls.
#[derive(Debug, Clone)]
pub struct AuthContext {
    user_id: String,
    token: SecretString,
}

impl AuthContext {
    /// Create a context. Both values are expected to be non-empty.
    pub fn new(user_id: impl Into<String>, token: SecretString) -> Self {
        Self {
            user_id: user_id.into(),
            token,
        }
    }

    /// The authenticated user's id.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The bearer token.
    pub fn token(&self) -> &SecretString {
        &self.token
    }
}
