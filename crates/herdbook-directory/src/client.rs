//! HTTP user directory client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use herdbook_core::error::{Error, TransportError};
use herdbook_core::{Result, UserDirectory, UserProfile};

fn map_reqwest(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout { duration_ms: 0 }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// A user record as returned by the identity provider's API.
#[derive(Debug, Deserialize)]
struct ProviderUser {
    first_name: Option<String>,
    last_name: Option<String>,
    image_url: Option<String>,
    #[serde(default)]
    email_addresses: Vec<ProviderEmail>,
    #[serde(default)]
    phone_numbers: Vec<ProviderPhone>,
}

#[derive(Debug, Deserialize)]
struct ProviderEmail {
    email_address: String,
}

#[derive(Debug, Deserialize)]
struct ProviderPhone {
    phone_number: String,
}

impl From<ProviderUser> for UserProfile {
    fn from(user: ProviderUser) -> Self {
        UserProfile {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user
                .email_addresses
                .into_iter()
                .next()
                .map(|e| e.email_address),
            phone: user.phone_numbers.into_iter().next().map(|p| p.phone_number),
            image_url: user.image_url,
        }
    }
}

/// HTTP-backed user directory.
///
/// Looks users up by id via `GET {base}/v1/users/{id}` with a bearer
/// secret. Failures are all-or-nothing; there is no partial or degraded
/// response, and no retry at this layer.
#[derive(Clone)]
pub struct HttpDirectory {
    base: Url,
    secret_key: String,
    client: reqwest::Client,
}

impl HttpDirectory {
    /// Create a new directory client for the given API base URL.
    pub fn new(base: Url, secret_key: impl Into<String>) -> Self {
        Self {
            base,
            secret_key: secret_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn user_endpoint(&self, id: &str) -> Result<Url> {
        self.base
            .join(&format!("v1/users/{}", id))
            .map_err(|e| Error::Transport(TransportError::Http {
                status: 0,
                message: format!("invalid user endpoint: {}", e),
            }))
    }
}

#[async_trait]
impl UserDirectory for HttpDirectory {
    #[instrument(skip(self))]
    async fn user(&self, id: &str) -> Result<UserProfile> {
        let endpoint = self.user_endpoint(id)?;

        let response = self
            .client
            .get(endpoint)
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(map_reqwest)?;

        let status = response.status();

        if status.as_u16() == 404 {
            return Err(Error::NotFound {
                collection: "users".to_string(),
                id: id.to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Transport(TransportError::Http {
                status: status.as_u16(),
                message,
            }));
        }

        let user: ProviderUser = response.json().await.map_err(map_reqwest)?;

        debug!("Fetched user profile");

        Ok(user.into())
    }
}

impl std::fmt::Debug for HttpDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectory")
            .field("base", &self.base)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
