//! Categories service.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{Category, PageResponse};
use crate::Result;

const CATEGORIES_PATH: &str = "api/rest/v1/categories";

/// Service for category operations.
pub struct CategoriesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing categories.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CategoryListOptions {
    /// Search filter, as produced by
    /// [`SearchFilter`](crate::models::SearchFilter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Page number to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Ask the server for a total count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_count: Option<bool>,
    /// Include the position among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_position: Option<bool>,
    /// Include enriched category attributes. Enterprise Edition only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_enriched_attributes: Option<bool>,
}

impl CategoriesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of categories.
    pub async fn list(
        &self,
        options: Option<&CategoryListOptions>,
    ) -> Result<PageResponse<Category>> {
        match options {
            Some(options) => self.inner.get_with_query(CATEGORIES_PATH, options).await,
            None => self.inner.get(CATEGORIES_PATH).await,
        }
    }

    /// Stream all categories lazily across pages.
    pub fn stream(
        &self,
        options: Option<&CategoryListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<Category> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), CATEGORIES_PATH.to_string(), query, cancel)
    }

    /// Get a category by code.
    pub async fn get(&self, code: &str) -> Result<Category> {
        self.inner.get(&format!("{CATEGORIES_PATH}/{code}")).await
    }
}
