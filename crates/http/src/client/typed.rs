//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use super::error::error_message;
use reqwest::{Client, ClientBuilder, RequestBuilder, header};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("gallery-client/", env!("CARGO_PKG_VERSION"));

/// Client for the public data service and the sign-in/sign-up endpoints
#[derive(Clone)]
pub struct PublicGalleryClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer credential
#[derive(Clone)]
pub struct AuthenticatedGalleryClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

fn normalize_base_url(base_url: String) -> Result<String, ClientError> {
    let base_url = base_url.trim().trim_end_matches('/').to_string();
    if base_url.is_empty() {
        return Err(ClientError::Configuration("base_url is required".into()));
    }
    Ok(base_url)
}

/// Send a request and decode the JSON body.
///
/// The services report failures as `{error: string}`, sometimes with a 2xx
/// status. Both forms become errors here.
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let body = send_checked(request).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Send a request, map error statuses and `{error}` payloads, and return
/// the raw body
async fn send_checked(request: RequestBuilder) -> Result<String, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = error_message(&body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            }
        });
        tracing::debug!(%status, %message, "request rejected");
        return Err(ClientError::from_status(status, message));
    }

    if let Some(message) = error_message(&body) {
        tracing::debug!(%status, %message, "error payload in successful response");
        return Err(ClientError::Api(message));
    }

    Ok(body)
}

impl PublicGalleryClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: normalize_base_url(base_url.into())?,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        send(request).await
    }

    /// Attach a bearer credential to get an authenticated client
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedGalleryClient {
        AuthenticatedGalleryClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedGalleryClient {
    /// Create a new authenticated client
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, token, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ClientError::Configuration("token is required".into()));
        }
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: normalize_base_url(base_url.into())?,
            token,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and handle common errors
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        send(request).await
    }

    /// Execute a request whose response body is not needed
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        send_checked(request).await.map(|_| ())
    }
}

/// Type-safe builder that creates the appropriate client type
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub const fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicGalleryClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicGalleryClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedGalleryClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        AuthenticatedGalleryClient::new_with_timeout(base_url, token, self.timeout)
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
