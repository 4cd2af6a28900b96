//! API error types.

/// HTTP API error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-success HTTP response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message from the API, or the raw body.
        message: String,
    },

    /// The API answered, but not in the shape this client understands.
    ///
    /// Usually means the CLI and the API disagree on versions.
    #[error(
        "API response was not in the expected format: {reason}\n  request:  {method} {url}\n  response: HTTP {status} {body}"
    )]
    MalformedResponse {
        /// Request method.
        method: String,
        /// Request URL.
        url: String,
        /// Response status code.
        status: u16,
        /// Response body as received.
        body: String,
        /// Decoder error.
        reason: String,
    },

    /// Network/transport error.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Check if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Check if this is a 401 Unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    /// Check if this is a 409 Conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Http { status: 409, .. })
    }

    /// Check if the response failed shape validation.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}
