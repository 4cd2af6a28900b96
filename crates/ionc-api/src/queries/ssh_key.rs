//! SSH public key resource: `/users/{user_id}/sshkeys`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::ApiError;

/// An SSH public key registered on the user's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKey {
    /// Opaque key id.
    pub id: String,
    /// Key fingerprint as computed by the server.
    pub fingerprint: String,
    /// Key name (usually the key type).
    pub name: String,
    /// Trailing comment of the public key, often `user@host`.
    pub annotation: String,
    /// Full public key line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    /// When the key was registered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// When the key was last modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl SshKey {
    /// Label used when offering this key in a selection prompt.
    pub fn choice_label(&self) -> String {
        format!("{} {} {}", self.fingerprint, self.name, self.annotation)
    }
}

/// Path of the user's key collection.
pub fn ssh_keys_path(user_id: &str) -> String {
    format!("users/{}/sshkeys", urlencoding::encode(user_id))
}

/// Path of a single key.
pub fn ssh_key_path(user_id: &str, key_id: &str) -> String {
    format!(
        "{}/{}",
        ssh_keys_path(user_id),
        urlencoding::encode(key_id)
    )
}

/// Fetch all keys registered for a user.
///
/// # Errors
///
/// Returns an error on request failure or if the response is not a list of keys.
pub async fn list_ssh_keys(client: &Client, user_id: &str) -> Result<Vec<SshKey>, ApiError> {
    client
        .rest(reqwest::Method::GET, &ssh_keys_path(user_id), None)
        .await
}

/// Delete one key.
///
/// # Errors
///
/// Returns an error on request failure or non-success status.
pub async fn delete_ssh_key(client: &Client, user_id: &str, key_id: &str) -> Result<(), ApiError> {
    client
        .rest_empty(reqwest::Method::DELETE, &ssh_key_path(user_id, key_id), None)
        .await
}

/// Register a public key.
///
/// # Errors
///
/// Returns an error on request failure (409 if the key already exists) or
/// if the response is not a key.
pub async fn add_ssh_key(client: &Client, user_id: &str, pubkey: &str) -> Result<SshKey, ApiError> {
    let body = serde_json::json!({ "pubkey": pubkey });
    client
        .rest(reqwest::Method::POST, &ssh_keys_path(user_id), Some(&body))
        .await
}
