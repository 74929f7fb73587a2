//! Session management for Akeneo API authentication.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use url::Url;

use crate::auth::Connector;
use crate::{Error, Result};

/// Token endpoint, relative to the PIM base address.
const TOKEN_PATH: &str = "api/oauth/v1/token";

/// Tokens are refreshed this long before their actual expiry so a call is
/// never sent with a token that would expire mid-flight.
const REFRESH_MARGIN: Duration = Duration::minutes(5);

/// Authentication session for the Akeneo API.
///
/// The session owns the token lifecycle: the initial password grant, expiry
/// tracking, and refresh with fallback to full re-authentication.
///
/// # Thread safety
///
/// `Session` is shared across every request pipeline of a client. Token state
/// is replaced atomically under a write lock, and [`Session::ensure_valid`]
/// holds a single-flight guard so overlapping callers that observe an
/// expiring token perform one refresh between them instead of racing to
/// spend the same single-use refresh token.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    connector: Connector,
    token_url: Url,
    http: reqwest::Client,
    state: RwLock<TokenState>,
    refresh_guard: Mutex<()>,
}

struct TokenState {
    access_token: SecretString,
    refresh_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Authenticate against the PIM with a password grant and return a live
    /// session.
    ///
    /// `base_url` must end with a slash for instance path prefixes to
    /// resolve correctly.
    pub async fn login(connector: Connector, base_url: &Url, http: reqwest::Client) -> Result<Self> {
        connector.validate()?;
        let token_url = base_url.join(TOKEN_PATH)?;

        let response = password_grant(&http, &token_url, &connector).await?;
        let state = TokenState::try_from_response(response)?;

        Ok(Self {
            inner: Arc::new(SessionInner {
                connector,
                token_url,
                http,
                state: RwLock::new(state),
                refresh_guard: Mutex::new(()),
            }),
        })
    }

    /// True when the token should be refreshed before issuing a call at
    /// `now`: within [`REFRESH_MARGIN`] of expiry, or already expired.
    pub async fn should_refresh(&self, now: DateTime<Utc>) -> bool {
        let state = self.inner.state.read().await;
        now + REFRESH_MARGIN > state.expires_at
    }

    /// Token expiry instant.
    pub async fn expires_at(&self) -> DateTime<Utc> {
        self.inner.state.read().await.expires_at
    }

    /// Make sure the access token is valid for at least the refresh margin,
    /// refreshing or re-authenticating as needed.
    ///
    /// When the refresh grant fails for any reason the session falls back to
    /// a full password grant; only that fallback's failure is surfaced, and
    /// it is fatal for the in-flight call. The next `ensure_valid` starts a
    /// fresh attempt.
    pub async fn ensure_valid(&self) -> Result<()> {
        if !self.should_refresh(Utc::now()).await {
            return Ok(());
        }

        // Single-flight: the first caller performs the grant, the rest wait
        // here and see the fresh token on the re-check.
        let _guard = self.inner.refresh_guard.lock().await;
        if !self.should_refresh(Utc::now()).await {
            return Ok(());
        }

        match self.refresh().await {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(error = %err, "refresh grant failed, re-authenticating");
                self.authenticate().await
            }
        }
    }

    /// Exchange the stored refresh token for a new token pair.
    pub async fn refresh(&self) -> Result<()> {
        let refresh_token = {
            let state = self.inner.state.read().await;
            state.refresh_token.expose_secret().to_string()
        };
        let response = refresh_grant(
            &self.inner.http,
            &self.inner.token_url,
            &self.inner.connector,
            &refresh_token,
        )
        .await?;
        self.store(response).await
    }

    /// Perform a full password grant, replacing the current token state.
    pub async fn authenticate(&self) -> Result<()> {
        let response =
            password_grant(&self.inner.http, &self.inner.token_url, &self.inner.connector).await?;
        self.store(response).await
    }

    /// Current access token value, read at request-build time.
    pub(crate) async fn access_token(&self) -> SecretString {
        self.inner.state.read().await.access_token.clone()
    }

    async fn store(&self, response: TokenResponse) -> Result<()> {
        let fresh = TokenState::try_from_response(response)?;
        // Access token, refresh token and expiry are replaced together.
        *self.inner.state.write().await = fresh;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_url", &self.inner.token_url.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl TokenState {
    /// Validate a token response the way the PIM contract requires: access
    /// token, refresh token and a nonzero expiry must all be present.
    fn try_from_response(response: TokenResponse) -> Result<Self> {
        let access_token = response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Auth("token response missing access_token".into()))?;
        let refresh_token = response
            .refresh_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Auth("token response missing refresh_token".into()))?;
        let expires_in = match response.expires_in {
            Some(seconds) if seconds > 0 => seconds,
            _ => return Err(Error::Auth("token response missing expires_in".into())),
        };

        Ok(Self {
            access_token: SecretString::from(access_token),
            refresh_token: SecretString::from(refresh_token),
            expires_at: Utc::now() + Duration::seconds(expires_in),
        })
    }
}

async fn password_grant(
    http: &reqwest::Client,
    token_url: &Url,
    connector: &Connector,
) -> Result<TokenResponse> {
    let request = PasswordGrantRequest {
        grant_type: "password",
        username: &connector.username,
        password: connector.password.expose_secret(),
    };
    token_request(http, token_url, connector, &request).await
}

async fn refresh_grant(
    http: &reqwest::Client,
    token_url: &Url,
    connector: &Connector,
    refresh_token: &str,
) -> Result<TokenResponse> {
    let request = RefreshGrantRequest {
        grant_type: "refresh_token",
        refresh_token,
    };
    token_request(http, token_url, connector, &request).await
}

async fn token_request<B: Serialize>(
    http: &reqwest::Client,
    token_url: &Url,
    connector: &Connector,
    body: &B,
) -> Result<TokenResponse> {
    let response = http
        .post(token_url.clone())
        .header("Content-Type", "application/json")
        .header("Authorization", basic_auth(connector))
        .json(body)
        .send()
        .await
        .map_err(|err| Error::Auth(format!("token request failed: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.bytes().await.unwrap_or_default();
        let message = crate::error::ErrorResponse::from_body(&body)
            .map(|envelope| envelope.message)
            .unwrap_or_else(|| format!("token endpoint returned status {status}"));
        return Err(Error::Auth(message));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|err| Error::Auth(format!("invalid token response: {err}")))
}

fn basic_auth(connector: &Connector) -> String {
    let credentials = format!(
        "{}:{}",
        connector.client_id,
        connector.secret.expose_secret()
    );
    format!("Basic {}", BASE64.encode(credentials))
}

#[derive(Serialize)]
struct PasswordGrantRequest<'a> {
    grant_type: &'static str,
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshGrantRequest<'a> {
    grant_type: &'static str,
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
    #[allow(dead_code)]
    scope: Option<String>,
    #[allow(dead_code)]
    token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_expiring_at(expires_at: DateTime<Utc>) -> Session {
        Session {
            inner: Arc::new(SessionInner {
                connector: Connector::new("id", "secret", "user", "pass"),
                token_url: Url::parse("https://pim.example.com/api/oauth/v1/token").unwrap(),
                http: reqwest::Client::new(),
                state: RwLock::new(TokenState {
                    access_token: SecretString::from("super-secret-token".to_string()),
                    refresh_token: SecretString::from("super-secret-refresh".to_string()),
                    expires_at,
                }),
                refresh_guard: Mutex::new(()),
            }),
        }
    }

    #[tokio::test]
    async fn test_should_refresh_is_boundary_exact() {
        let now = Utc::now();
        let session = session_expiring_at(now + Duration::minutes(5));

        // now + 5min == expiry: not strictly past, no refresh yet.
        assert!(!session.should_refresh(now).await);
        // One second inside the margin: refresh.
        assert!(session.should_refresh(now + Duration::seconds(1)).await);
        // One second outside: no refresh.
        assert!(!session.should_refresh(now - Duration::seconds(1)).await);
    }

    #[tokio::test]
    async fn test_should_refresh_for_expired_token() {
        let now = Utc::now();
        let session = session_expiring_at(now - Duration::hours(1));
        assert!(session.should_refresh(now).await);
    }

    #[test]
    fn test_token_response_validation() {
        let complete = TokenResponse {
            access_token: Some("a".into()),
            refresh_token: Some("r".into()),
            expires_in: Some(3600),
            scope: None,
            token_type: None,
        };
        assert!(TokenState::try_from_response(complete).is_ok());

        let missing_access = TokenResponse {
            access_token: None,
            refresh_token: Some("r".into()),
            expires_in: Some(3600),
            scope: None,
            token_type: None,
        };
        assert!(TokenState::try_from_response(missing_access).is_err());

        let empty_refresh = TokenResponse {
            access_token: Some("a".into()),
            refresh_token: Some(String::new()),
            expires_in: Some(3600),
            scope: None,
            token_type: None,
        };
        assert!(TokenState::try_from_response(empty_refresh).is_err());

        let zero_expiry = TokenResponse {
            access_token: Some("a".into()),
            refresh_token: Some("r".into()),
            expires_in: Some(0),
            scope: None,
            token_type: None,
        };
        assert!(TokenState::try_from_response(zero_expiry).is_err());
    }

    #[test]
    fn test_basic_auth_header() {
        let connector = Connector::new("my-id", "my-secret", "user", "pass");
        assert_eq!(basic_auth(&connector), format!("Basic {}", BASE64.encode("my-id:my-secret")));
    }

    #[tokio::test]
    async fn test_debug_redacts_token() {
        let session = session_expiring_at(Utc::now());
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("REDACTED"));
    }
}
