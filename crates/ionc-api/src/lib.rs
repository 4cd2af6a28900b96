//! HTTP client and REST API models for ionc.

pub mod client;
pub mod errors;
pub mod http;
pub mod queries;
