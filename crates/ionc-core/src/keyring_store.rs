//! Keyring-based secret storage.
//!
//! Uses OS-native credential storage (Keychain on macOS, etc.).

use anyhow::{Context, Result};

/// Keyring service name.
const SERVICE: &str = "ionc";

/// Keyring account holding the user's API token.
const USER_TOKEN_ACCOUNT: &str = "user_token";

/// Retrieve the user token from the OS keyring.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn get_user_token() -> Result<Option<String>> {
    let entry = keyring::Entry::new(SERVICE, USER_TOKEN_ACCOUNT)
        .context("failed to create keyring entry")?;

    match entry.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(anyhow::anyhow!("keyring error: {e}")),
    }
}
