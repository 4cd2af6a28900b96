//! Core error types for the ionc CLI.

/// Configuration-specific errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path of the config file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse config.
    #[error("failed to parse config file {path}: {message}")]
    Parse {
        /// Path of the config file.
        path: String,
        /// Parser error message.
        message: String,
    },

    /// A configured value is not usable.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Config key.
        key: String,
        /// The offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}
