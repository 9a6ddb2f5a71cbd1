//! Type-safe API client that carries its credential

use super::ClientError;
use reqwest::{Client, ClientBuilder, header};

const USER_AGENT: &str = concat!("portal-client/", env!("CARGO_PKG_VERSION"));

/// Client for endpoints that require a bearer token
#[derive(Clone)]
pub struct AuthenticatedPortalClient {
    client: Client,
    base_url: String,
    token: String,
}

impl AuthenticatedPortalClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }

        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and decode the JSON body
    ///
    /// Non-2xx responses become [`ClientError::Status`] carrying the body's
    /// `message` field when present. A 2xx body that does not decode as `T`
    /// becomes [`ClientError::Serialization`].
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status, &body))
        }
    }
}

/// Builder for [`AuthenticatedPortalClient`]
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedPortalClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        AuthenticatedPortalClient::new(base_url, token)
    }
}
