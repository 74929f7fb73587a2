//! API connection credentials.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// Credentials of an Akeneo connection (Connect > Connection settings in the
/// PIM UI). Immutable once supplied; used only to obtain tokens.
#[derive(Clone, Deserialize)]
pub struct Connector {
    /// OAuth client identifier.
    pub client_id: String,
    /// OAuth client secret.
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret: SecretString,
    /// API username.
    pub username: String,
    /// API user password.
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
}

impl Connector {
    /// Build a connector from its four credential parts.
    pub fn new(
        client_id: impl Into<String>,
        secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            secret: SecretString::from(secret.into()),
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Check that every credential part is present.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(Error::Config("client_id is empty".into()));
        }
        if self.secret.expose_secret().is_empty() {
            return Err(Error::Config("secret is empty".into()));
        }
        if self.username.is_empty() {
            return Err(Error::Config("username is empty".into()));
        }
        if self.password.expose_secret().is_empty() {
            return Err(Error::Config("password is empty".into()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connector")
            .field("client_id", &self.client_id)
            .field("secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> std::result::Result<SecretString, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_parts() {
        let full = Connector::new("id", "secret", "user", "pass");
        assert!(full.validate().is_ok());

        assert!(Connector::new("", "secret", "user", "pass").validate().is_err());
        assert!(Connector::new("id", "", "user", "pass").validate().is_err());
        assert!(Connector::new("id", "secret", "", "pass").validate().is_err());
        assert!(Connector::new("id", "secret", "user", "").validate().is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let connector = Connector::new("id", "super-secret", "user", "hunter2");
        let debug = format!("{connector:?}");
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("hunter2"));
    }
}
