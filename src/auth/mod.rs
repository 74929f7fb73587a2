//! Authentication for the Akeneo API.
//!
//! The PIM uses OAuth2 password-grant authentication: a [`Connector`]'s
//! client id/secret (sent as HTTP Basic credentials) plus API username and
//! password are exchanged for a short-lived access token and a single-use
//! refresh token. [`Session`] owns that token pair and transparently
//! refreshes it before expiry.
//!
//! ```no_run
//! use akeneo_rs::{Connector, auth::Session};
//! use url::Url;
//!
//! # async fn example() -> akeneo_rs::Result<()> {
//! let connector = Connector::new("client-id", "secret", "username", "password");
//! let base_url = Url::parse("https://pim.example.com/")?;
//! let session = Session::login(connector, &base_url, reqwest::Client::new()).await?;
//! # Ok(())
//! # }
//! ```

mod connector;
mod session;

pub use connector::Connector;
pub use session::Session;
