//! Shared types and client plumbing for the subscriber dashboard.
//!
//! This crate is consumed from two sides: the wasm UI uses the
//! [`ApiClient`] and the fetch lifecycle primitives in [`fetch`], and the
//! native test suite exercises both against a mock backend.

pub mod api_client;
pub mod fetch;
pub mod responses;

pub use api_client::{ApiClient, ApiConfig, ClientError};
pub use fetch::{FetchState, FetchTracker};
