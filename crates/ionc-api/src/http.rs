//! HTTP client construction.
//!
//! Provides default headers, User-Agent, Accept, and base URL validation.

use reqwest::header::{self, HeaderMap, HeaderValue};

/// Options for constructing an HTTP client.
#[derive(Debug)]
pub struct HttpClientOptions {
    /// Application version for User-Agent.
    pub app_version: String,
}

/// Build a reqwest client with default configuration.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_client(opts: &HttpClientOptions) -> anyhow::Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(&format!("ionc/{}", opts.app_version))?,
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Format an authorization header value from a bearer token.
pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse and validate an API base URL. Only `http` and `https` are accepted.
///
/// # Errors
///
/// Returns a description of the problem if the URL is unusable.
pub fn parse_base_url(raw: &str) -> Result<url::Url, String> {
    let url = url::Url::parse(raw).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme {other:?}")),
    }
}
