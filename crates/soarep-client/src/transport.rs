//! HTTP transport seam.
//!
//! The registry never talks to the network directly; it hands a verb and a
//! fully resolved URL to an [`HttpClient`]. [`ReqwestClient`] is the
//! production implementation. Tests can substitute their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::descriptor::Verb;
use crate::error::{Error, Result};

/// A raw HTTP response: status code and body, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a single request and returns whatever the server answered.
///
/// Implementations return `Err` only when no response was received
/// (connection, TLS, timeout); any status code, including 4xx and 5xx, is a
/// successful [`HttpResponse`]. The registry decides what a status means.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request with no body.
    async fn send(&self, verb: Verb, url: &Url) -> Result<HttpResponse>;
}

/// [`HttpClient`] backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client with the timeouts and user agent from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(inner: reqwest::Client) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, verb: Verb, url: &Url) -> Result<HttpResponse> {
        let response = self
            .inner
            .request(verb.as_method(), url.clone())
            .send()
            .await
            .map_err(|e| Error::transport(url.as_str(), e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(url.as_str(), e))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
