//! HTTP transport for reqres calls.
//!
//! [`HttpBackend`] is the seam between the client and the network. The
//! production implementation uses reqwest and makes exactly one attempt per
//! call; the fake in [`testing`] serves canned responses for unit tests.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ReqresClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Single;

// ============================================================================
// Request / Response
// ============================================================================

/// One call to issue: verb, path relative to the base URL, query, extra
/// headers and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a header for this call only. Overrides the request spec's header of
    /// the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub const fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A request fully resolved against a request spec, ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A received response with its measured wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    url: Url,
    status: u16,
    body: String,
    elapsed: Duration,
}

impl ApiResponse {
    pub const fn new(url: Url, status: u16, body: String, elapsed: Duration) -> Self {
        Self {
            url,
            status,
            body,
            elapsed,
        }
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Decode the whole body.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the `data` field. `None` when the body is empty, or `data` is
    /// absent or null.
    pub fn data<T: DeserializeOwned>(&self) -> ApiResult<Option<T>> {
        if self.body.trim().is_empty() {
            return Ok(None);
        }

        Ok(self.json::<Single<T>>()?.data)
    }

    /// Decode the `data` field, failing when it is missing.
    pub fn require_data<T: DeserializeOwned>(&self) -> ApiResult<T> {
        self.data()?.ok_or_else(|| ApiError::MissingData {
            url: self.url.to_string(),
        })
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can execute a resolved request.
///
/// The backend reports whatever status the server returned; status
/// expectations are applied by the caller.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> ApiResult<ApiResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest. No retries: a transport failure is
/// reported as-is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ReqresClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: &HttpRequest) -> ApiResult<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let elapsed = started.elapsed();

        Ok(ApiResponse::new(request.url.clone(), status, body, elapsed))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
