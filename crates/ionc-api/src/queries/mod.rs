//! Typed models and calls for API resources.

pub mod ssh_key;
