//! Channels service.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{Channel, PageResponse};
use crate::Result;

use super::ListOptions;

const CHANNELS_PATH: &str = "api/rest/v1/channels";

/// Service for channel operations.
pub struct ChannelsService {
    inner: Arc<ClientInner>,
}

impl ChannelsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of channels.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<PageResponse<Channel>> {
        match options {
            Some(options) => self.inner.get_with_query(CHANNELS_PATH, options).await,
            None => self.inner.get(CHANNELS_PATH).await,
        }
    }

    /// Stream all channels lazily across pages.
    pub fn stream(
        &self,
        options: Option<&ListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<Channel> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), CHANNELS_PATH.to_string(), query, cancel)
    }
}
