//! In-memory configuration for testing.
//!
//! Provides a [`MemoryConfig`] that implements [`Config`] and [`Session`]
//! without touching the filesystem, the keyring, or the environment.

use std::collections::HashMap;

use super::{Config, Session, User};

/// In-memory configuration for testing.
///
/// # Examples
///
/// ```
/// use ionc_core::config::{Config, MemoryConfig};
///
/// let config = MemoryConfig::new()
///     .with_user("42", "me@example.com")
///     .with_token("test_token");
///
/// assert_eq!(config.user().unwrap().id, "42");
/// let (token, source) = config.session().user_token().unwrap();
/// assert_eq!(token, "test_token");
/// assert_eq!(source, "config");
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfig {
    settings: HashMap<String, String>,
    user: Option<User>,
    token: Option<String>,
}

impl MemoryConfig {
    /// Create a new empty in-memory configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the logged-in user.
    #[must_use]
    pub fn with_user(mut self, id: &str, email: &str) -> Self {
        self.user = Some(User {
            id: id.to_string(),
            email: Some(email.to_string()).filter(|e| !e.is_empty()),
        });
        self
    }

    /// Set the session token.
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.settings.insert("api_url".to_string(), url.to_string());
        self
    }
}

impl Config for MemoryConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    fn user(&self) -> Option<User> {
        self.user.clone().filter(|u| !u.id.is_empty())
    }

    fn session(&self) -> &dyn Session {
        self
    }
}

impl Session for MemoryConfig {
    fn user_token(&self) -> Option<(String, String)> {
        let token = self.token.as_ref().filter(|t| !t.is_empty())?;
        Some((token.clone(), "config".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_URL;

    #[test]
    fn test_should_create_empty_config() {
        let cfg = MemoryConfig::new();
        assert!(cfg.user().is_none());
        assert!(cfg.session().user_token().is_none());
        assert_eq!(cfg.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_should_return_configured_api_url() {
        let cfg = MemoryConfig::new().with_api_url("http://127.0.0.1:8080");
        assert_eq!(cfg.api_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_should_drop_empty_email() {
        let cfg = MemoryConfig::new().with_user("42", "");
        assert_eq!(
            cfg.user(),
            Some(User {
                id: "42".to_string(),
                email: None,
            }),
        );
    }

    #[test]
    fn test_should_treat_empty_id_and_token_as_missing() {
        let cfg = MemoryConfig::new().with_user("", "me@example.com").with_token("");
        assert!(cfg.user().is_none());
        assert!(cfg.session().user_token().is_none());
    }
}
