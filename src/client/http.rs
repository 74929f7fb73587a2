//! HTTP client implementation for the Akeneo API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::api::{
    AttributesService, CategoriesService, ChannelsService, FamiliesService, LocalesService,
    MediaFilesService, ProductModelsService, ProductsService,
};
use crate::auth::{Connector, Session};
use crate::error::ErrorResponse;
use crate::models::PageResponse;
use crate::{Error, Result};

use super::config::ClientConfig;
use super::limiter::RateLimiter;

/// The main client for interacting with an Akeneo PIM instance.
///
/// The client owns the session, the shared rate limiter and the HTTP
/// transport; per-resource services borrow all three through it. Cloning is
/// cheap and every clone shares the same pacing and token state.
///
/// # Example
///
/// ```no_run
/// use akeneo_rs::{AkeneoClient, Connector};
///
/// # async fn example() -> akeneo_rs::Result<()> {
/// let connector = Connector::new("client-id", "secret", "username", "password");
/// let client = AkeneoClient::connect(connector, "https://pim.example.com/").await?;
///
/// let families = client.families().list(None).await?;
/// println!("{} families on the first page", families.items().len());
/// # Ok(())
/// # }
/// ```
pub struct AkeneoClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
    pub(crate) limiter: RateLimiter,
}

impl AkeneoClient {
    /// Connect to a PIM instance with default configuration.
    ///
    /// Performs the initial password grant; construction fails with
    /// [`Error::Auth`] when the token endpoint rejects the credentials.
    pub async fn connect(connector: Connector, base_url: impl Into<String>) -> Result<Self> {
        Self::connect_with_config(connector, ClientConfig::new(base_url)).await
    }

    /// Connect to a PIM instance with custom configuration.
    pub async fn connect_with_config(connector: Connector, config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let session = Session::login(connector, &base_url, http.clone()).await?;
        let limiter = RateLimiter::new(config.rate_limit.max_ops, config.rate_limit.interval);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                session,
                config,
                limiter,
            }),
        })
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// Get the product models service.
    pub fn product_models(&self) -> ProductModelsService {
        ProductModelsService::new(self.inner.clone())
    }

    /// Get the families service.
    pub fn families(&self) -> FamiliesService {
        FamiliesService::new(self.inner.clone())
    }

    /// Get the attributes service.
    pub fn attributes(&self) -> AttributesService {
        AttributesService::new(self.inner.clone())
    }

    /// Get the categories service.
    pub fn categories(&self) -> CategoriesService {
        CategoriesService::new(self.inner.clone())
    }

    /// Get the channels service.
    pub fn channels(&self) -> ChannelsService {
        ChannelsService::new(self.inner.clone())
    }

    /// Get the locales service.
    pub fn locales(&self) -> LocalesService {
        LocalesService::new(self.inner.clone())
    }

    /// Get the media files service.
    pub fn media_files(&self) -> MediaFilesService {
        MediaFilesService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl Clone for AkeneoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for AkeneoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AkeneoClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ClientInner {
    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None, None).await
    }

    /// Make a GET request with query options.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = encode_query(query)?;
        self.request(Method::GET, path, Some(query), None).await
    }

    /// Fetch one page of a list endpoint using raw query pairs.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        pairs: &[(String, String)],
    ) -> Result<PageResponse<T>> {
        self.get_with_query(path, pairs).await
    }

    /// Make a POST request expecting a decoded response.
    #[allow(dead_code)]
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, None, Some(body)).await
    }

    /// Make a POST request, discarding the response body.
    pub(crate) async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let body = serde_json::to_value(body)?;
        let url = self.resolve(path, None)?;
        self.send(Method::POST, url, Some(&body), true).await?;
        Ok(())
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PATCH, path, None, Some(body)).await
    }

    /// Stream a raw binary body into `dest`.
    ///
    /// Auth, pacing and throttling retries follow the regular request path;
    /// the response body is copied to the sink instead of being decoded.
    pub(crate) async fn download_to<W>(&self, target: &Url, dest: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut response = self.send(Method::GET, target.clone(), None, false).await?;
        while let Some(chunk) = response.chunk().await? {
            dest.write_all(&chunk).await?;
        }
        dest.flush().await?;
        Ok(())
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<String>,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.resolve(path, query.as_deref())?;
        let response = self.send(method, url, body.as_ref(), true).await?;
        Ok(response.json::<T>().await?)
    }

    fn resolve(&self, path: &str, query: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if let Some(query) = query {
            if !query.is_empty() {
                url.set_query(Some(query));
            }
        }
        Ok(url)
    }

    /// Issue one logical request: valid token, one rate-limiter slot per
    /// physical attempt, retry on 429 only.
    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&serde_json::Value>,
        json_headers: bool,
    ) -> Result<reqwest::Response> {
        self.session.ensure_valid().await?;
        let token = self.session.access_token().await;

        let max_retries = self.config.retry.max_retries;
        let mut attempt = 0u32;
        loop {
            self.limiter.acquire().await;

            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .bearer_auth(token.expose_secret());
            if json_headers {
                request = request
                    .header(CONTENT_TYPE, "application/json")
                    .header(ACCEPT, "application/json");
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            tracing::debug!(method = %method, url = %url, attempt, "dispatching request");
            let response = request.send().await?;
            let status = response.status();
            if status.is_success() {
                return Ok(response);
            }

            let bytes = response.bytes().await.unwrap_or_default();
            let envelope = ErrorResponse::from_body(&bytes);

            if status == StatusCode::TOO_MANY_REQUESTS {
                let message = envelope
                    .map(|e| e.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "too many requests".to_string());
                if attempt < max_retries {
                    let backoff = self.config.retry.backoff_for_attempt(attempt);
                    tracing::debug!(
                        url = %url,
                        backoff_ms = backoff.as_millis() as u64,
                        "throttled, backing off"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    continue;
                }
                return Err(Error::ThrottleExhausted {
                    attempts: attempt + 1,
                    message,
                });
            }

            if status == StatusCode::NOT_FOUND {
                let message = envelope
                    .map(|e| e.message)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("resource not found: {}", url.path()));
                return Err(Error::NotFound(message));
            }

            let (code, message) = match envelope {
                Some(e) if !e.message.is_empty() => (e.code, e.message),
                Some(e) => (e.code, format!("request failed with status {status}")),
                None => (None, format!("request failed with status {status}")),
            };
            return Err(Error::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }
    }
}

/// Encode query options as URL parameters.
///
/// Raw key/value pairs pass through; typed option records use their declared
/// parameter names with `None` fields omitted. Shapes that do not flatten to
/// parameters (nested maps, sequences of non-pairs) fail with
/// [`Error::Serialization`].
pub(crate) fn encode_query<Q: Serialize + ?Sized>(query: &Q) -> Result<String> {
    serde_urlencoded::to_string(query).map_err(|err| Error::Serialization(err.to_string()))
}

/// Encode query options and split them back into raw pairs, the form a
/// pagination producer threads from page to page.
pub(crate) fn query_pairs<Q: Serialize + ?Sized>(query: &Q) -> Result<Vec<(String, String)>> {
    let encoded = encode_query(query)?;
    Ok(url::form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|err| Error::Config(format!("invalid base URL {raw:?}: {err}")))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!("invalid base URL {raw:?}")));
    }
    // Relative API paths resolve against the directory, so the path must end
    // with a slash or an instance prefix would be dropped.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct DemoOptions {
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        with_count: Option<bool>,
    }

    #[test]
    fn test_encode_query_omits_empty_fields() {
        let options = DemoOptions {
            search: None,
            limit: Some(25),
            with_count: Some(true),
        };
        assert_eq!(encode_query(&options).unwrap(), "limit=25&with_count=true");
    }

    #[test]
    fn test_encode_query_passes_raw_pairs_through() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("limit".to_string(), "10".to_string()),
        ];
        assert_eq!(encode_query(&pairs).unwrap(), "page=2&limit=10");
    }

    #[test]
    fn test_encode_query_rejects_unsupported_shapes() {
        let nested = serde_json::json!({"filters": {"enabled": true}});
        assert!(matches!(encode_query(&nested), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_parse_base_url_normalizes_trailing_slash() {
        let url = parse_base_url("https://pim.example.com/prefix").unwrap();
        assert_eq!(url.path(), "/prefix/");
        assert_eq!(
            url.join("api/rest/v1/products").unwrap().as_str(),
            "https://pim.example.com/prefix/api/rest/v1/products"
        );

        assert!(parse_base_url("not a url").is_err());
    }
}
