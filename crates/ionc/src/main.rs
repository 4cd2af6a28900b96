//! ionc - manage the SSH keys on your cloud account.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ionc_api::errors::ApiError;
use ionc_cmd::factory::Factory;
use ionc_core::cmdutil::{AuthError, is_user_cancellation};
use ionc_core::{IOStreams, ios_eprintln};

mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const CANCEL: i32 = 2;
    pub const AUTH: i32 = 4;
}

#[derive(Debug, Parser)]
#[command(
    name = "ionc",
    version,
    about = "Manage your account from the command line",
    long_about = "Manage the SSH keys registered on your account from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage SSH keys.
    #[command(subcommand)]
    Ssh(ionc_cmd::ssh::SshCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("IONC_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string());

    let exit_code = if let Some(cmd) = cli.command {
        match run_command(cmd, &factory).await {
            Ok(()) => exit_codes::OK,
            Err(e) => report_error(&factory.io, &e),
        }
    } else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        exit_codes::OK
    };

    std::process::exit(exit_code);
}

async fn run_command(cmd: Commands, factory: &Factory) -> anyhow::Result<()> {
    match cmd {
        Commands::Ssh(sub) => sub.run(factory).await,
    }
}

/// Print a fatal error on stderr and return the exit code for it.
fn report_error(ios: &IOStreams, err: &anyhow::Error) -> i32 {
    let cs = ios.color_scheme();
    ios_eprintln!(ios, "{} {err:#}", cs.error_icon());
    exit_code_for(err)
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if is_user_cancellation(err) {
        exit_codes::CANCEL
    } else if err.downcast_ref::<AuthError>().is_some()
        || err
            .downcast_ref::<ApiError>()
            .is_some_and(ApiError::is_unauthorized)
    {
        exit_codes::AUTH
    } else {
        exit_codes::ERROR
    }
}
