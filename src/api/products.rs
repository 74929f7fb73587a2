//! Products service.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner, PimVersion};
use crate::models::{PageResponse, PatchResponseLine, Product};
use crate::Result;

const PRODUCTS_PATH: &str = "api/rest/v1/products";
// Identifier-free product addressing, since Akeneo 7.0.
const PRODUCTS_UUID_PATH: &str = "api/rest/v1/products-uuid";

/// Service for product operations.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use akeneo_rs::CancellationToken;
///
/// # async fn example(client: akeneo_rs::AkeneoClient) -> akeneo_rs::Result<()> {
/// let mut stream = client.products().stream(None, CancellationToken::new());
/// while let Some(product) = stream.next().await {
///     let product = product?;
///     println!("{:?}", product.identifier);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ProductsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing products.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProductListOptions {
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
    /// Include attribute option labels in values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_attribute_options: Option<bool>,
    /// Include completeness data. Since Akeneo 6.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_completeness: Option<bool>,
    /// Include quality scores. Since Akeneo 5.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_quality_scores: Option<bool>,
}

/// Query parameters for fetching one product.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ProductGetOptions {
    /// Include attribute option labels in values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_attribute_options: Option<bool>,
    /// Include quality scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_quality_scores: Option<bool>,
}

impl ProductsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn base_path(&self) -> &'static str {
        if self.inner.config.pim_version >= PimVersion::V7 {
            PRODUCTS_UUID_PATH
        } else {
            PRODUCTS_PATH
        }
    }

    /// Fetch one page of products.
    pub async fn list(&self, options: Option<&ProductListOptions>) -> Result<PageResponse<Product>> {
        match options {
            Some(options) => self.inner.get_with_query(self.base_path(), options).await,
            None => self.inner.get(self.base_path()).await,
        }
    }

    /// Stream all products lazily across pages.
    pub fn stream(
        &self,
        options: Option<&ProductListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<Product> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), self.base_path().to_string(), query, cancel)
    }

    /// Get a product by identifier (UUID from Akeneo 7.0 on).
    pub async fn get(
        &self,
        identifier: &str,
        options: Option<&ProductGetOptions>,
    ) -> Result<Product> {
        let path = format!("{}/{}", self.base_path(), identifier);
        match options {
            Some(options) => self.inner.get_with_query(&path, options).await,
            None => self.inner.get(&path).await,
        }
    }

    /// Create or update several products in one call.
    ///
    /// Returns one status line per input product, in input order.
    pub async fn upsert(&self, products: &[Product]) -> Result<Vec<PatchResponseLine>> {
        self.inner.patch(PRODUCTS_PATH, &products).await
    }
}
