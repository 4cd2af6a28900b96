//! Configuration system for ionc.
//!
//! Manages `config.yml` in the ionc config directory: the logged-in user,
//! the stored session token, and the API endpoint.

mod file_config;
mod memory_config;

pub use file_config::FileConfig;
pub use memory_config::MemoryConfig;

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.ionicjs.com";

/// Environment variable holding a session token that overrides stored credentials.
pub const TOKEN_ENV: &str = "IONC_TOKEN";

/// Configuration directory path (usually ~/.config/ionc).
pub fn config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("IONC_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }
    dirs::config_dir().map_or_else(
        || {
            dirs::home_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join(".config")
                .join("ionc")
        },
        |d| d.join("ionc"),
    )
}

/// The user the CLI is logged in as.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct User {
    /// Account id, used in API paths.
    pub id: String,
    /// Account email, informational only.
    #[serde(default)]
    pub email: Option<String>,
}

/// Configuration trait for accessing settings.
pub trait Config: Send + Sync + std::fmt::Debug {
    /// Get a config value.
    fn get(&self, key: &str) -> Option<String>;

    /// Get a config value with its default.
    fn get_or_default(&self, key: &str) -> String {
        self.get(key)
            .unwrap_or_else(|| default_for_key(key).to_string())
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        self.get_or_default("api_url")
    }

    /// Get the logged-in user, if any. Users with an empty id are treated
    /// as not logged in.
    fn user(&self) -> Option<User>;

    /// Get the session credential store.
    fn session(&self) -> &dyn Session;
}

/// Session credential trait.
pub trait Session: Send + Sync + std::fmt::Debug {
    /// Get the user's bearer token. Returns (token, source).
    fn user_token(&self) -> Option<(String, String)>;
}

/// Default configuration values.
pub fn default_for_key(key: &str) -> &str {
    match key {
        "api_url" => DEFAULT_API_URL,
        _ => "",
    }
}
