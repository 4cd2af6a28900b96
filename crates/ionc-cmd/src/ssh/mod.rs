//! SSH key commands (`ionc ssh`).
//!
//! Manage the SSH public keys registered on the logged-in account.

pub mod add;
pub mod delete;
pub mod list;

use clap::Subcommand;
use ionc_core::{IOStreams, ios_eprintln};

/// Manage SSH keys.
#[derive(Debug, Subcommand)]
pub enum SshCommand {
    /// Add an SSH public key to your account.
    Add(add::AddArgs),
    /// Delete an SSH key from your account.
    Delete(delete::DeleteArgs),
    /// List SSH keys on your account.
    #[command(alias = "ls")]
    List(list::ListArgs),
}

impl SshCommand {
    /// Run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> anyhow::Result<()> {
        match self {
            Self::Add(args) => args.run(factory).await,
            Self::Delete(args) => args.run(factory).await,
            Self::List(args) => args.run(factory).await,
        }
    }
}

/// Warn that the account has no keys.
pub(crate) fn warn_no_keys(ios: &IOStreams) {
    let cs = ios.color_scheme();
    ios_eprintln!(
        ios,
        "{} No SSH keys found. Use `{}` to add keys.",
        cs.warning_icon(),
        cs.bold("ionc ssh add"),
    );
}
