//! # SARO
//!
//! Client core for the SARO AI regulatory intelligence dashboard: the
//! base-URL resolver, a typed HTTP client for every backend endpoint, the
//! navigation state machine and the per-page view models shared by the
//! `saro` CLI and the browser dashboard.
//!
//! ## Modules
//!
//! - [`config`]: configuration file, environment overrides and base-URL resolution
//! - [`api`]: HTTP client wrapper, error taxonomy and endpoint methods
//! - [`navigation`]: page identifiers, sidebar sections and active-page state
//! - [`shell`]: navigation coupled with the mounted page's state
//! - [`pages`]: view models for every dashboard page
//! - `poller`: fixed-interval dashboard refresh (`native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use saro::{ApiClient, Config, ReqwestTransport, Shell};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = ApiClient::from_config(&config, None)?;
//!
//!     let health = client.health().await?;
//!     println!("backend: {}", health);
//!
//!     let mut shell = Shell::new();
//!     shell.navigate("mvp2");
//!     shell.load(&client).await;
//!     println!("{}", shell.breadcrumb());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod navigation;
pub mod pages;
#[cfg(feature = "native")]
pub mod poller;
pub mod shell;

pub use api::{
    ApiClient, ClientError, ClientResult, HttpMethod, HttpRequest, HttpResponse, RequestOptions,
    Transport, TransportError,
};

#[cfg(feature = "native")]
pub use api::ReqwestTransport;

pub use config::{ApiBase, Config, ConfigError, LoggingConfig};

pub use navigation::{NavSection, Navigation, PageId};

pub use pages::PageState;

pub use shell::{Shell, Transition};

#[cfg(feature = "native")]
pub use poller::{poll_dashboard, PollHandle};
