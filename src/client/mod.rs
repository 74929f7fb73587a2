//! HTTP transport layer for the Akeneo API.
//!
//! This module provides the main entry point [`AkeneoClient`]: it owns the
//! authenticated session, the shared request pacer and the HTTP transport,
//! and exposes one service per PIM resource.
//!
//! # Example
//!
//! ```no_run
//! use akeneo_rs::{AkeneoClient, Connector};
//!
//! # async fn example() -> akeneo_rs::Result<()> {
//! let connector = Connector::new("client-id", "secret", "username", "password");
//! let client = AkeneoClient::connect(connector, "https://pim.example.com/").await?;
//!
//! let locales = client.locales().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod limiter;
pub mod paginated;

pub use config::{ClientConfig, PimVersion, RateLimitConfig, RetryConfig};
pub use http::AkeneoClient;
pub use limiter::RateLimiter;
pub use paginated::PageStream;

pub(crate) use http::{query_pairs, ClientInner};
