//! Type-safe API clients that encode the authentication requirement in the
//! client type: public endpoints go through [`PublicRosterClient`],
//! everything else requires an [`AuthenticatedRosterClient`] whose bearer
//! token is injected at construction. No global client state exists.

use reqwest::{header, Client, ClientBuilder as ReqwestBuilder, Method};
use serde::de::DeserializeOwned;

use super::error::ClientError;

const USER_AGENT: &str = "roster-client/0.1.0";

/// Client for the unauthenticated endpoints (login, signup).
#[derive(Debug, Clone)]
pub struct PublicRosterClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedRosterClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_client() -> Result<Client, ClientError> {
    ReqwestBuilder::new()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|err| ClientError::Configuration(err.to_string()))
}

impl PublicRosterClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request builder without authentication.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    /// Upgrades to an authenticated client after a successful login.
    #[must_use]
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedRosterClient {
        AuthenticatedRosterClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
        }
    }
}

impl AuthenticatedRosterClient {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request builder carrying the `Authorization: Bearer` header.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }
}

/// Executes a request expecting a JSON body. Transport failures and decode
/// failures surface with the operation's fallback message; non-2xx statuses
/// are classified by [`ClientError::from_response`].
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    fallback: &str,
) -> Result<T, ClientError> {
    let response = request.send().await.map_err(|err| {
        tracing::debug!(error = %err, "request failed before a response arrived");
        ClientError::Request {
            message: fallback.to_string(),
            source: err,
        }
    })?;
    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(|err| ClientError::Request {
            message: fallback.to_string(),
            source: err,
        })
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status, &body, fallback))
    }
}

/// Executes a request whose success response carries no body.
pub(crate) async fn execute_empty(
    request: reqwest::RequestBuilder,
    fallback: &str,
) -> Result<(), ClientError> {
    let response = request.send().await.map_err(|err| {
        tracing::debug!(error = %err, "request failed before a response arrived");
        ClientError::Request {
            message: fallback.to_string(),
            source: err,
        }
    })?;
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_response(status, &body, fallback))
    }
}

/// Builder that produces the appropriate client type.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
}

impl ClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build_public(self) -> Result<PublicRosterClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        PublicRosterClient::new(base_url)
    }

    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedRosterClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        AuthenticatedRosterClient::new(base_url, token)
    }
}
