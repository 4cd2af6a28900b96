//! `ionc ssh list` command.

use anyhow::{Context, Result};
use clap::Args;

use ionc_api::queries::ssh_key::list_ssh_keys;
use ionc_core::ios_println;
use ionc_core::table::TablePrinter;

use crate::factory::Factory;

/// List SSH keys on your account.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output the keys as JSON.
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Run the ssh list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the keys cannot be listed.
    pub async fn run(&self, factory: &Factory) -> Result<()> {
        let auth = factory.auth_context()?;
        let client = factory.api_client(&auth)?;
        let ios = &factory.io;

        let keys = list_ssh_keys(&client, auth.user_id())
            .await
            .context("failed to list SSH keys")?;

        if self.json {
            let output =
                serde_json::to_string_pretty(&keys).context("failed to serialize SSH keys")?;
            ios_println!(ios, "{output}");
            return Ok(());
        }

        if keys.is_empty() {
            super::warn_no_keys(ios);
            return Ok(());
        }

        let cs = ios.color_scheme();
        let mut tp = TablePrinter::new(ios).with_headers(&["id", "fingerprint", "name", "annotation"]);

        for key in &keys {
            tp.add_row(vec![
                key.id.clone(),
                cs.bold(&key.fingerprint),
                key.name.clone(),
                cs.gray(&key.annotation),
            ]);
        }

        ios_println!(ios, "{}", tp.render());

        Ok(())
    }
}
