//! # akeneo-rs
//!
//! An async Rust client for the Akeneo PIM REST API.
//!
//! The crate takes care of the transport concerns of talking to a PIM —
//! credential lifecycle, request pacing, throttling retries, and lazy
//! pagination — and exposes one typed service per resource on top of them.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 password grant with transparent,
//!   race-free token refresh
//! - **Rate limiting**: strict request pacing shared across all calls of a
//!   client, no burst accumulation
//! - **Throttling retries**: bounded retry with exponential backoff on
//!   HTTP 429, terminal on everything else
//! - **Lazy pagination**: cursor-following, cancellable item streams that
//!   never hold a full result set in memory
//! - **Typed resources**: products, product models, families, attributes,
//!   categories, channels, locales and media files
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use akeneo_rs::{AkeneoClient, Connector};
//!
//! #[tokio::main]
//! async fn main() -> akeneo_rs::Result<()> {
//!     let connector = Connector::new("client-id", "secret", "username", "password");
//!     let client = AkeneoClient::connect(connector, "https://pim.example.com/").await?;
//!
//!     // One page of families
//!     let families = client.families().list(None).await?;
//!     println!("{} families on page one", families.items().len());
//!
//!     // A single product
//!     let product = client.products().get("top-1234", None).await?;
//!     println!("{:?}", product.family);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming example
//!
//! Listing endpoints are paginated; [`client::PageStream`] follows the
//! `next` links for you:
//!
//! ```rust,no_run
//! use akeneo_rs::{AkeneoClient, CancellationToken, Connector};
//! use akeneo_rs::api::ProductListOptions;
//! use akeneo_rs::models::SearchFilter;
//! use futures_util::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> akeneo_rs::Result<()> {
//!     let connector = Connector::new("client-id", "secret", "username", "password");
//!     let client = AkeneoClient::connect(connector, "https://pim.example.com/").await?;
//!
//!     let mut filter = SearchFilter::new();
//!     filter.add("enabled", "=", true);
//!     let options = ProductListOptions {
//!         search: Some(filter.to_string()),
//!         limit: Some(100),
//!         ..Default::default()
//!     };
//!
//!     let cancel = CancellationToken::new();
//!     let mut products = client.products().stream(Some(&options), cancel.clone());
//!     while let Some(product) = products.next().await {
//!         let product = product?;
//!         println!("{:?}", product.identifier);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Connector;
pub use client::{AkeneoClient, ClientConfig, PimVersion, RateLimitConfig, RetryConfig};
pub use error::{Error, Result};

/// Cancellation token handed to pagination streams; re-exported so callers
/// do not need a direct `tokio-util` dependency.
pub use tokio_util::sync::CancellationToken;

/// Prelude module for convenient imports.
///
/// ```rust
/// use akeneo_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AttributeListOptions, CategoryListOptions, ListOptions, ProductListOptions,
        ProductModelListOptions,
    };
    pub use crate::auth::{Connector, Session};
    pub use crate::client::{
        AkeneoClient, ClientConfig, PageStream, PimVersion, RateLimitConfig, RetryConfig,
    };
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Attribute, AttributeOption, Category, Channel, Family, FamilyVariant, Links, Locale,
        MediaFile, PageResponse, Product, ProductModel, ProductValue, SearchFilter, ValueData,
    };
    pub use crate::CancellationToken;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pim_version_ordering() {
        assert!(PimVersion::V7 > PimVersion::V6);
        assert!(PimVersion::V4 < PimVersion::V5);
    }

    #[test]
    fn test_default_rate_limit_matches_documented_ceiling() {
        let config = ClientConfig::new("https://pim.example.com/");
        assert_eq!(config.rate_limit.max_ops, 5);
        assert_eq!(config.rate_limit.interval, std::time::Duration::from_secs(1));
    }
}
