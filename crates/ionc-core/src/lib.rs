//! Core types, traits, and utilities for the ionc CLI.
//!
//! This crate provides the foundational abstractions used across all ionc crates:
//! - [`IOStreams`] for terminal I/O handling
//! - [`config::Config`] and [`config::Session`] for configuration and credentials
//! - [`prompter::Prompter`] for interactive prompts
//! - [`auth::AuthContext`] for the per-call user identity
//! - Table formatting and color schemes

pub mod auth;
pub mod cmdutil;
pub mod config;
pub mod errors;
pub mod iostreams;
pub mod keyring_store;
pub mod prompter;
pub mod table;
#[cfg(test)]
pub mod test_utils;

pub use auth::AuthContext;
pub use errors::ConfigError;
pub use iostreams::IOStreams;
