//! Locales service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{Locale, PageResponse};
use crate::Result;

use super::ListOptions;

const LOCALES_PATH: &str = "api/rest/v1/locales";

/// Service for locale operations.
pub struct LocalesService {
    inner: Arc<ClientInner>,
}

impl LocalesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of locales.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<PageResponse<Locale>> {
        match options {
            Some(options) => self.inner.get_with_query(LOCALES_PATH, options).await,
            None => self.inner.get(LOCALES_PATH).await,
        }
    }

    /// Stream all locales lazily across pages.
    pub fn stream(
        &self,
        options: Option<&ListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<Locale> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), LOCALES_PATH.to_string(), query, cancel)
    }
}
