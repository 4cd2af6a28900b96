//! Authenticated REST API client.
//!
//! Every successful response is wrapped in an envelope,
//! `{ "meta": {...}, "data": ... }`; errors carry `{ "error": { "message": ... } }`.
//! The client unwraps `data` into the caller's type and reports anything
//! else as [`ApiError::MalformedResponse`] with the request and response
//! attached.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ApiError;
use crate::http::auth_header_value;

/// API client wrapping reqwest with bearer auth and envelope decoding.
///
/// Tokens are stored as [`SecretString`] to prevent accidental logging or
/// exposure through `Debug` output.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: url::Url,
    token: SecretString,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl Client {
    /// Create a new API client for the given base URL and bearer token.
    pub fn new(http: reqwest::Client, base_url: url::Url, token: SecretString) -> Self {
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Get the base URL this client sends requests to.
    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Execute a request and decode the envelope's `data` field.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a body
    /// that does not decode into `T`.
    pub async fn rest<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let url = self.resolve_url(path);
        let resp = self.send_request(method.clone(), &url, body).await?;
        let resp = Self::check_response(resp).await?;

        let status = resp.status().as_u16();
        let text = resp.text().await?;
        decode_envelope(&method, &url, status, &text)
    }

    /// Execute a request whose response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or non-success status.
    pub async fn rest_empty(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), ApiError> {
        let url = self.resolve_url(path);
        let resp = self.send_request(method, &url, body).await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    /// Check a response for errors and return an `ApiError::Http` if the
    /// status is not successful.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(env) => env.error.message,
            Err(_) if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            Err(_) => text,
        };
        debug!(status = status.as_u16(), %message, "API request failed");

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }

    fn resolve_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/'),
        )
    }

    async fn send_request(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        debug!(%method, %url, "API request");
        let mut req = self.http.request(method, url).header(
            reqwest::header::AUTHORIZATION,
            auth_header_value(self.token.expose_secret()),
        );
        if let Some(body) = body {
            req = req.json(body);
        }
        req.send().await
    }
}

/// Decode an envelope body, keeping the exchange for diagnostics on failure.
fn decode_envelope<T: DeserializeOwned>(
    method: &reqwest::Method,
    url: &str,
    status: u16,
    text: &str,
) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(text)
        .map(|env| env.data)
        .map_err(|e| ApiError::MalformedResponse {
            method: method.to_string(),
            url: url.to_string(),
            status,
            body: text.to_string(),
            reason: e.to_string(),
        })
}
