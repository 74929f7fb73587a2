//! Media files service.

use std::sync::Arc;

use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::client::paginated::PageStream;
use crate::client::{query_pairs, ClientInner};
use crate::models::{MediaFile, PageResponse};
use crate::{Error, Result};

use super::ListOptions;

const MEDIA_FILES_PATH: &str = "api/rest/v1/media-files";

/// Service for media file operations.
///
/// Media file codes are storage paths and may contain slashes; they are used
/// verbatim in request paths.
pub struct MediaFilesService {
    inner: Arc<ClientInner>,
}

impl MediaFilesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of media files.
    pub async fn list(&self, options: Option<&ListOptions>) -> Result<PageResponse<MediaFile>> {
        match options {
            Some(options) => self.inner.get_with_query(MEDIA_FILES_PATH, options).await,
            None => self.inner.get(MEDIA_FILES_PATH).await,
        }
    }

    /// Stream all media files lazily across pages.
    pub fn stream(
        &self,
        options: Option<&ListOptions>,
        cancel: CancellationToken,
    ) -> PageStream<MediaFile> {
        let query = match options {
            Some(options) => query_pairs(options),
            None => Ok(Vec::new()),
        };
        PageStream::spawn(self.inner.clone(), MEDIA_FILES_PATH.to_string(), query, cancel)
    }

    /// Get a media file's metadata by code.
    pub async fn get(&self, code: &str) -> Result<MediaFile> {
        self.inner.get(&format!("{MEDIA_FILES_PATH}/{code}")).await
    }

    /// Download a media file's binary content into `dest`.
    ///
    /// Fetches the metadata first, then follows its `download` link. A
    /// missing file surfaces as [`Error::NotFound`].
    pub async fn download<W>(&self, code: &str, dest: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let media = self.get(code).await?;
        let href = media
            .links
            .download_href()
            .ok_or_else(|| Error::NotFound(format!("media file {code} has no download link")))?;
        let target = Url::parse(href)?;
        self.inner.download_to(&target, dest).await
    }
}
