//! Product models service.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{PageResponse, ProductModel};
use crate::Result;

const PRODUCT_MODELS_PATH: &str = "api/rest/v1/product-models";

/// Service for product model operations.
pub struct ProductModelsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing product models.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProductModelListOptions {
    /// Search filter, as produced by
    /// [`SearchFilter`](crate::models::SearchFilter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Restrict values to one channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Restrict values to these locales (comma-separated codes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<String>,
    /// Restrict values to these attributes (comma-separated codes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<String>,
    /// Pagination method, `page` or `search_after`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination_type: Option<String>,
    /// Cursor for `search_after` pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_after: Option<String>,
    /// Page number to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Ask the server for a total count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_count: Option<bool>,
    /// Include quality scores. Since Akeneo 5.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_quality_scores: Option<bool>,
}

/// Query parameters for fetching one product model.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProductModelGetOptions {
    /// Include quality scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_quality_scores: Option<bool>,
}

impl ProductModelsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of product models.
    pub async fn list(
        &self,
        options: Option<&ProductModelListOptions>,
    ) -> Result<PageResponse<ProductModel>> {
        match options {
            Some(options) => self.inner.get_with_query(PRODUCT_MODELS_PATH, options).await,
            None => self.inner.get(PRODUCT_MODELS_PATH).await,
        }
    }

    /// Stream all product models lazily across pages.
    pub fn stream(
        &self,
        options: Option<&ProductModelListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<ProductModel> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(
            self.inner.clone(),
            PRODUCT_MODELS_PATH.to_string(),
            query,
            cancel,
        )
    }

    /// Get a product model by code.
    pub async fn get(
        &self,
        code: &str,
        options: Option<&ProductModelGetOptions>,
    ) -> Result<ProductModel> {
        let path = format!("{PRODUCT_MODELS_PATH}/{code}");
        match options {
            Some(options) => self.inner.get_with_query(&path, options).await,
            None => self.inner.get(&path).await,
        }
    }

    /// Create a product model.
    ///
    /// The code and family variant are checked before anything is sent.
    pub async fn create(&self, model: &ProductModel) -> Result<()> {
        model.validate_for_create()?;
        self.inner.post_empty(PRODUCT_MODELS_PATH, model).await
    }
}
