//! Attributes service.

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{Attribute, AttributeOption, PageResponse};
use crate::Result;

use super::ListOptions;

const ATTRIBUTES_PATH: &str = "api/rest/v1/attributes";

/// Service for attribute and attribute option operations.
pub struct AttributesService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing attributes.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AttributeListOptions {
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
    /// Include select options of table attributes. Decreases performance
    /// when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_table_select_options: Option<bool>,
}

impl AttributesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of attributes.
    pub async fn list(
        &self,
        options: Option<&AttributeListOptions>,
    ) -> Result<PageResponse<Attribute>> {
        match options {
            Some(options) => self.inner.get_with_query(ATTRIBUTES_PATH, options).await,
            None => self.inner.get(ATTRIBUTES_PATH).await,
        }
    }

    /// Stream all attributes lazily across pages.
    pub fn stream(
        &self,
        options: Option<&AttributeListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<Attribute> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), ATTRIBUTES_PATH.to_string(), query, cancel)
    }

    /// Get an attribute by code.
    pub async fn get(&self, code: &str) -> Result<Attribute> {
        self.inner.get(&format!("{ATTRIBUTES_PATH}/{code}")).await
    }

    /// Fetch one page of a select attribute's options.
    pub async fn options(
        &self,
        code: &str,
        options: Option<&ListOptions>,
    ) -> Result<PageResponse<AttributeOption>> {
        let path = format!("{ATTRIBUTES_PATH}/{code}/options");
        match options {
            Some(options) => self.inner.get_with_query(&path, options).await,
            None => self.inner.get(&path).await,
        }
    }
}
