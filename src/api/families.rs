//! Families service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{Family, FamilyVariant, PageResponse};
use crate::Result;

use super::ListOptions;

const FAMILIES_PATH: &str = "api/rest/v1/families";

/// Service for family and family variant operations.
pub struct FamiliesService {
    inner: Arc<ClientInner>,
}

impl FamiliesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of families.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<PageResponse<Family>> {
        match options {
            Some(options) => self.inner.get_with_query(FAMILIES_PATH, options).await,
            None => self.inner.get(FAMILIES_PATH).await,
        }
    }

    /// Stream all families lazily across pages.
    pub fn stream(
        &self,
        options: Option<&ListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<Family> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), FAMILIES_PATH.to_string(), query, cancel)
    }

    /// Get a family by code.
    pub async fn get(&self, code: &str) -> Result<Family> {
        self.inner.get(&format!("{FAMILIES_PATH}/{code}")).await
    }

    /// Fetch one page of a family's variants.
    pub async fn variants(
        &self,
        code: &str,
        options: Option<&ListOptions>,
    ) -> Result<PageResponse<FamilyVariant>> {
        let path = format!("{FAMILIES_PATH}/{code}/variants");
        match options {
            Some(options) => self.inner.get_with_query(&path, options).await,
            None => self.inner.get(&path).await,
        }
    }

    /// Get one family variant by code.
    pub async fn variant(&self, code: &str, variant_code: &str) -> Result<FamilyVariant> {
        self.inner
            .get(&format!("{FAMILIES_PATH}/{code}/variants/{variant_code}"))
            .await
    }
}
