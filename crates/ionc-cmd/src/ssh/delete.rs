//! `ionc ssh delete` command.

use anyhow::{Context, Result};
use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use tracing::info;

use ionc_api::queries::ssh_key::{SshKey, delete_ssh_key, list_ssh_keys};
use ionc_core::cmdutil::FlagError;
use ionc_core::ios_eprintln;

use crate::factory::Factory;

/// Delete an SSH key from your account.
///
/// Without KEY_ID, lists your keys and asks which one to delete.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// The ID of the SSH key to delete.
    #[arg(value_name = "KEY_ID", value_parser = NonEmptyStringValueParser::new())]
    key_id: Option<String>,
}

impl DeleteArgs {
    /// Run the ssh delete command.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be resolved or deleted, or if the
    /// selection prompt is cancelled.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let key_id = match self.key_id {
            Some(ref id) => id.clone(),
            None => match select_key(factory).await? {
                Some(id) => id,
                None => return Ok(()),
            },
        };

        let auth = factory.auth_context()?;
        let client = factory.api_client(&auth)?;

        info!(%key_id, "Deleting SSH key");
        delete_ssh_key(&client, auth.user_id(), &key_id)
            .await
            .with_context(|| format!("failed to delete SSH key {key_id}"))?;

        let ios = &factory.io;
        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} Your public key ({}) has been deleted.",
            cs.success_icon(),
            cs.bold(&key_id),
        );

        Ok(())
    }
}

/// Ask the user which of their keys to delete.
///
/// Returns `None` when the account has no keys.
async fn select_key(factory: &Factory) -> Result<Option<String>> {
    let ios = &factory.io;
    if !ios.can_prompt() {
        return Err(FlagError("KEY_ID required when not running interactively".to_string()).into());
    }

    let auth = factory.auth_context()?;
    let client = factory.api_client(&auth)?;
    let keys = list_ssh_keys(&client, auth.user_id())
        .await
        .context("failed to list SSH keys")?;

    if keys.is_empty() {
        super::warn_no_keys(ios);
        return Ok(None);
    }

    let labels: Vec<String> = keys.iter().map(SshKey::choice_label).collect();
    let selected = factory
        .prompter()
        .select("Which SSH key would you like to delete?", None, &labels)?;

    let key = keys
        .into_iter()
        .nth(selected)
        .context("selected SSH key is out of range")?;
    Ok(Some(key.id))
}
