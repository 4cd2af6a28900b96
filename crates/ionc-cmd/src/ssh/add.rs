//! `ionc ssh add` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use ionc_api::queries::ssh_key::add_ssh_key;
use ionc_core::cmdutil::FlagError;
use ionc_core::ios_eprintln;

use crate::factory::Factory;

/// Add an SSH public key to your account.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Path to the public key file, e.g. `~/.ssh/id_ed25519.pub`.
    #[arg(value_name = "PUBKEY_FILE")]
    pubkey_file: PathBuf,
}

impl AddArgs {
    /// Run the ssh add command.
    ///
    /// # Errors
    ///
    /// Returns an error if the key file is unreadable or invalid, or if the
    /// key cannot be registered.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let content = std::fs::read_to_string(&self.pubkey_file)
            .with_context(|| format!("failed to read key file: {}", self.pubkey_file.display()))?;
        let pubkey = parse_public_key(&content)
            .map_err(|reason| FlagError(format!("{}: {reason}", self.pubkey_file.display())))?;

        let auth = factory.auth_context()?;
        let client = factory.api_client(&auth)?;
        let ios = &factory.io;
        let cs = ios.color_scheme();

        debug!(file = %self.pubkey_file.display(), "Adding SSH key");
        match add_ssh_key(&client, auth.user_id(), &pubkey).await {
            Ok(key) => {
                ios_eprintln!(
                    ios,
                    "{} Your public key ({}) has been added.",
                    cs.success_icon(),
                    cs.bold(&key.fingerprint),
                );
                Ok(())
            }
            Err(e) if e.is_conflict() => {
                ios_eprintln!(
                    ios,
                    "{} This public key is already registered on your account.",
                    cs.warning_icon(),
                );
                Ok(())
            }
            Err(e) => Err(anyhow::Error::new(e).context("failed to add SSH key")),
        }
    }
}

/// Extract the key line from an OpenSSH public key file.
///
/// Accepts `<type> <base64> [annotation]` where type is `ssh-*` or `ecdsa-*`.
fn parse_public_key(content: &str) -> Result<String, String> {
    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with('#'))
        .ok_or_else(|| "file is empty".to_string())?;

    if line.starts_with("-----BEGIN") {
        return Err("this looks like a private key; pass the matching .pub file".to_string());
    }

    let mut parts = line.split_whitespace();
    let key_type = parts.next().unwrap_or_default();
    if !(key_type.starts_with("ssh-") || key_type.starts_with("ecdsa-")) {
        return Err(format!("unrecognized key type {key_type:?}"));
    }

    let data = parts
        .next()
        .ok_or_else(|| "missing key data after the key type".to_string())?;
    if !data
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
    {
        return Err("key data is not base64".to_string());
    }

    let annotation: Vec<&str> = parts.collect();
    if annotation.is_empty() {
        Ok(format!("{key_type} {data}"))
    } else {
        Ok(format!("{key_type} {data} {}", annotation.join(" ")))
    }
}
