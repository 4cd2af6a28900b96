//! Factory for shared command dependencies.
//!
//! Holds one accessor per collaborator (I/O streams, configuration, session,
//! API client, prompter) so commands never reach for global state. Supports
//! test mode with dependency injection for isolated testing.

use std::sync::{Arc, Mutex, OnceLock};

use anyhow::Context;
use ionc_api::client::Client;
use ionc_core::AuthContext;
use ionc_core::cmdutil::AuthError;
use ionc_core::config::{Config, FileConfig, TOKEN_ENV};
use ionc_core::errors::ConfigError;
use ionc_core::iostreams::{IOStreams, TestOutput};
use ionc_core::prompter::{DialoguerPrompter, Prompter, StubPrompter};
use secrecy::SecretString;
use tracing::debug;

/// Shared factory providing lazily-initialized dependencies to all commands.
///
/// In production mode, dependencies are created from the real system.
/// In test mode, dependencies can be injected for isolated testing.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,
    /// Configuration (lazily loaded).
    config: OnceLock<Mutex<Box<dyn Config>>>,

    // Test overrides
    prompter_stub: Option<Arc<StubPrompter>>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Create a new factory with the given version.
    pub fn new(app_version: String) -> Self {
        let mut io = IOStreams::system();

        if std::env::var("IONC_PROMPT_DISABLED").is_ok() {
            io.set_never_prompt(true);
        }

        Self {
            app_version,
            io,
            config: OnceLock::new(),
            prompter_stub: None,
        }
    }

    /// Create a test factory with captured I/O.
    ///
    /// Returns the factory and a `TestOutput` for reading captured
    /// stdout/stderr.
    pub fn test() -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_output();

        let factory = Self {
            app_version: "test".to_string(),
            io,
            config: OnceLock::new(),
            prompter_stub: None,
        };

        (factory, output)
    }

    /// Set a config override for testing.
    #[must_use]
    pub fn with_config(self, config: Box<dyn Config>) -> Self {
        let _ = self.config.set(Mutex::new(config));
        self
    }

    /// Set a stub prompter and return the shared reference for configuration.
    pub fn with_stub_prompter(mut self) -> (Self, Arc<StubPrompter>) {
        let stub = Arc::new(StubPrompter::default());
        self.prompter_stub = Some(stub.clone());
        (self, stub)
    }

    /// Get the configuration, loading it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if config cannot be loaded.
    pub fn config(&self) -> anyhow::Result<&Mutex<Box<dyn Config>>> {
        if let Some(cfg) = self.config.get() {
            return Ok(cfg);
        }
        let cfg = FileConfig::load()?;
        let boxed: Box<dyn Config> = Box::new(cfg);
        // Ignore set error - another thread may have set it first
        let _ = self.config.set(Mutex::new(boxed));
        self.config
            .get()
            .ok_or_else(|| anyhow::anyhow!("failed to initialize config"))
    }

    /// Resolve the user id and bearer token for an API call.
    ///
    /// Reads the config and session every time; callers that need it twice
    /// call this twice.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the config cannot be read or holds no
    /// logged-in user or token.
    pub fn auth_context(&self) -> anyhow::Result<AuthContext> {
        let cfg_lock = self
            .config()
            .map_err(|e| AuthError(format!("unable to load configuration: {e:#}")))?;
        let cfg = cfg_lock
            .lock()
            .map_err(|_| anyhow::anyhow!("configuration lock poisoned"))?;

        let user = cfg.user().ok_or_else(|| {
            AuthError("not logged in: no user found in the ionc configuration".to_string())
        })?;
        let (token, source) = cfg.session().user_token().ok_or_else(|| {
            AuthError(format!(
                "not logged in: no session token found (set {TOKEN_ENV} or add tokens.user to the configuration)"
            ))
        })?;

        debug!(user_id = %user.id, token_source = %source, "Resolved auth context");
        Ok(AuthContext::new(user.id, SecretString::from(token)))
    }

    /// Build an API client authorized with the given context.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API URL is invalid or the HTTP
    /// client cannot be built.
    pub fn api_client(&self, auth: &AuthContext) -> anyhow::Result<Client> {
        let api_url = {
            let cfg = self
                .config()?
                .lock()
                .map_err(|_| anyhow::anyhow!("configuration lock poisoned"))?;
            cfg.api_url()
        };
        let base_url =
            ionc_api::http::parse_base_url(&api_url).map_err(|reason| ConfigError::InvalidValue {
                key: "api_url".to_string(),
                value: api_url.clone(),
                reason,
            })?;

        let opts = ionc_api::http::HttpClientOptions {
            app_version: self.app_version.clone(),
        };
        let http = ionc_api::http::build_client(&opts).context("failed to build HTTP client")?;

        let client = Client::new(http, base_url, auth.token().clone());
        debug!(base_url = %client.base_url(), "Built API client");
        Ok(client)
    }

    /// Create a prompter instance.
    ///
    /// In test mode with a stub prompter, returns the stub.
    pub fn prompter(&self) -> Box<dyn Prompter> {
        if let Some(ref stub) = self.prompter_stub {
            return Box::new(StubPrompterWrapper(stub.clone()));
        }
        Box::new(DialoguerPrompter::new())
    }
}

/// Wrapper to use `Arc<StubPrompter>` as `Box<dyn Prompter>`.
#[derive(Debug)]
struct StubPrompterWrapper(Arc<StubPrompter>);

impl Prompter for StubPrompterWrapper {
    fn select(
        &self,
        prompt: &str,
        default: Option<usize>,
        options: &[String],
    ) -> anyhow::Result<usize> {
        self.0.select(prompt, default, options)
    }
}
