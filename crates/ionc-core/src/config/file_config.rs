//! File-based configuration implementation.
//!
//! Reads config.yml from the ionc config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{Config, Session, TOKEN_ENV, User, config_dir};
use crate::errors::ConfigError;

/// File-based configuration backed by a YAML file.
#[derive(Debug)]
pub struct FileConfig {
    config_path: PathBuf,
    data: ConfigData,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigData {
    #[serde(default)]
    user: Option<UserEntry>,
    #[serde(default)]
    tokens: TokensEntry,
    #[serde(default)]
    urls: UrlsEntry,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    id: UserId,
    #[serde(default)]
    email: Option<String>,
}

/// Ids are strings in the API, but hand-edited files often leave them unquoted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserId {
    Text(String),
    Number(u64),
}

#[derive(Debug, Default, Deserialize)]
struct TokensEntry {
    #[serde(default)]
    user: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UrlsEntry {
    #[serde(default)]
    api: Option<String>,
}

impl FileConfig {
    /// Load configuration from the default config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_dir())
    }

    /// Load configuration from `dir/config.yml`. A missing file yields an
    /// empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join("config.yml");

        let data = if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadFile {
                path: config_path.display().to_string(),
                source: e,
            })?;
            if content.trim().is_empty() {
                ConfigData::default()
            } else {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: config_path.display().to_string(),
                    message: e.to_string(),
                })?
            }
        } else {
            ConfigData::default()
        };

        debug!(path = %config_path.display(), "Loaded config");

        Ok(Self { config_path, data })
    }

    /// Path of the backing config file.
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Config for FileConfig {
    fn get(&self, key: &str) -> Option<String> {
        // Check environment variables first
        let env_key = format!("IONC_{}", key.to_uppercase());
        if let Ok(val) = std::env::var(&env_key)
            && !val.is_empty()
        {
            return Some(val);
        }

        match key {
            "api_url" => self.data.urls.api.clone(),
            _ => None,
        }
    }

    fn user(&self) -> Option<User> {
        let entry = self.data.user.as_ref()?;
        let id = match entry.id {
            UserId::Text(ref s) => s.trim().to_string(),
            UserId::Number(n) => n.to_string(),
        };
        if id.is_empty() {
            return None;
        }
        Some(User {
            id,
            email: entry.email.clone(),
        })
    }

    fn session(&self) -> &dyn Session {
        self
    }
}

impl Session for FileConfig {
    fn user_token(&self) -> Option<(String, String)> {
        // Check environment first
        if let Ok(token) = std::env::var(TOKEN_ENV)
            && !token.is_empty()
        {
            return Some((token, TOKEN_ENV.to_string()));
        }

        // Check keyring before config file
        if let Ok(Some(token)) = crate::keyring_store::get_user_token()
            && !token.is_empty()
        {
            return Some((token, "keyring".to_string()));
        }

        let token = self.data.tokens.user.as_ref().filter(|t| !t.is_empty())?;
        Some((token.clone(), "config".to_string()))
    }
}
