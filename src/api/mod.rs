//! The boundary to the backend donation API.
//!
//! Everything the UI shows lives in an external backend; this module owns
//! the HTTP client and the adapters that normalize the backend's
//! loosely-typed JSON into the crate's canonical models.

mod client;
mod models;

pub use client::ApiClient;
