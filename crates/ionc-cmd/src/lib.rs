//! Command implementations for the ionc CLI.
//!
//! Each module corresponds to an `ionc` top-level command group.

pub mod factory;
pub mod ssh;

#[cfg(test)]
pub mod test_helpers;
