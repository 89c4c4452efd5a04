//! Browser side of the client core
//!
//! The request building, error classification and endpoint methods live in
//! `saro::api`; this module only supplies the `gloo-net` transport and the
//! runtime-injected base URL.

pub mod runtime;
pub mod transport;

pub use runtime::{build_client, runtime_api_url};
pub use transport::GlooTransport;

/// Client type shared by every page
pub type Client = saro::ApiClient<GlooTransport>;
