//! Client for issuing reqres calls under an explicit specification.
//!
//! Each client owns its active [`RequestSpec`] and [`ResponseSpec`]. Installing
//! a new pair only affects that client, so concurrently running tests never
//! observe each other's expectations.

mod auth;
mod resources;
mod users;

use tracing::{debug, info};

use crate::config::ReqresClientConfig;
use crate::error::ApiResult;
use crate::http::{ApiRequest, ApiResponse, HttpBackend, HttpRequest, ReqwestBackend};
use crate::spec::{API_KEY_HEADER, LogDetail, RequestSpec, ResponseSpec};

pub use auth::AuthOutcome;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default reqres client using the reqwest HTTP backend.
pub type DefaultReqresClient = ReqresClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the reqres API, generic over its HTTP backend.
pub struct ReqresClient<B: HttpBackend> {
    backend: B,
    request_spec: RequestSpec,
    response_spec: ResponseSpec,
}

impl DefaultReqresClient {
    /// Create a new client with the given configuration.
    ///
    /// The active response spec starts as [`ResponseSpec::any`].
    pub fn new(config: &ReqresClientConfig) -> ApiResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        let request_spec = RequestSpec::from_config(config)?;
        Ok(Self::with_backend(request_spec, backend))
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ApiResult<Self> {
        Self::new(&ReqresClientConfig::default())
    }
}

impl<B: HttpBackend> ReqresClient<B> {
    /// Create a client over a custom backend.
    pub const fn with_backend(request_spec: RequestSpec, backend: B) -> Self {
        Self {
            backend,
            request_spec,
            response_spec: ResponseSpec::any(),
        }
    }

    /// Make `request` and `response` the active specification for every
    /// following call on this client.
    pub fn install(&mut self, request: RequestSpec, response: ResponseSpec) {
        self.request_spec = request;
        self.response_spec = response;
    }

    /// Replace only the active response spec.
    pub fn expect(&mut self, response: ResponseSpec) {
        self.response_spec = response;
    }

    pub const fn request_spec(&self) -> &RequestSpec {
        &self.request_spec
    }

    pub const fn response_spec(&self) -> &ResponseSpec {
        &self.response_spec
    }

    /// Issue one call and check it against the active response spec.
    pub async fn execute(&self, request: &ApiRequest) -> ApiResult<ApiResponse> {
        let resolved = self.resolve(request);
        let detail = self.request_spec.log_detail();

        if detail == LogDetail::All {
            debug!(
                method = %resolved.method,
                url = %resolved.url,
                headers = ?redacted_headers(&resolved.headers),
                body = %resolved.body.as_ref().map(ToString::to_string).unwrap_or_default(),
                "reqres request"
            );
        }

        let response = self.backend.send(&resolved).await?;

        if detail != LogDetail::Off {
            info!(
                method = %resolved.method,
                url = %resolved.url,
                status = response.status(),
                elapsed_ms = u64::try_from(response.elapsed().as_millis()).unwrap_or(u64::MAX),
                "reqres response"
            );
        }
        if detail == LogDetail::All {
            debug!(body = %response.body(), "reqres response body");
        }

        self.response_spec.verify(&response)?;
        Ok(response)
    }

    /// Merge spec headers with per-call headers; per-call values win.
    fn resolve(&self, request: &ApiRequest) -> HttpRequest {
        let mut headers: Vec<(String, String)> = self
            .request_spec
            .headers()
            .iter()
            .filter(|(name, _)| {
                !request
                    .headers
                    .iter()
                    .any(|(own, _)| own.eq_ignore_ascii_case(name))
            })
            .cloned()
            .collect();
        headers.extend(request.headers.iter().cloned());

        HttpRequest {
            method: request.method.clone(),
            url: self.request_spec.url_for(&request.path, &request.query),
            headers,
            body: request.body.clone(),
        }
    }
}

/// Headers with the API key value masked, for logging.
fn redacted_headers(headers: &[(String, String)]) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(API_KEY_HEADER) {
                (name.clone(), "***".to_string())
            } else {
                (name.clone(), value.clone())
            }
        })
        .collect()
}
