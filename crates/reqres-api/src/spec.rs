//! Request and response specifications.
//!
//! A [`RequestSpec`] holds what every call shares (base URL, JSON headers,
//! logging). A [`ResponseSpec`] holds the minimal checks applied to every
//! response before its body is looked at. Both are plain values owned by a
//! single client, so tests never share them.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::config::ReqresClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::ApiResponse;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// Logging Detail
// ============================================================================

/// How much of each exchange is written to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDetail {
    /// Nothing.
    Off,
    /// Method, URL, status and elapsed time.
    Summary,
    /// Summary plus headers and both bodies.
    #[default]
    All,
}

impl LogDetail {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Summary => "summary",
            Self::All => "all",
        }
    }
}

impl fmt::Display for LogDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogDetail {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "summary" => Ok(Self::Summary),
            "all" => Ok(Self::All),
            other => Err(ApiError::Configuration {
                message: format!("unknown log detail '{other}', expected off, summary or all"),
            }),
        }
    }
}

// ============================================================================
// Request Specification
// ============================================================================

/// Defaults applied to every request issued by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    base_url: Url,
    headers: Vec<(String, String)>,
    log_detail: LogDetail,
}

impl RequestSpec {
    /// Base URL plus JSON content type, full logging and no API key.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            headers: vec![
                ("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string()),
                ("Accept".to_string(), JSON_CONTENT_TYPE.to_string()),
            ],
            log_detail: LogDetail::default(),
        }
    }

    /// Request spec matching a client configuration, API key included.
    ///
    /// Fails with [`ApiError::InvalidUrl`] when the configured base URL does
    /// not parse.
    pub fn from_config(config: &ReqresClientConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let spec = Self::new(base_url).with_log_detail(config.log_detail);
        Ok(match &config.api_key {
            Some(key) => spec.with_api_key(key.clone()),
            None => spec,
        })
    }

    /// Add a header, replacing any existing header of the same name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Send `x-api-key` with every request.
    #[must_use]
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        self.with_header(API_KEY_HEADER, key)
    }

    /// Drop the `x-api-key` header.
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case(API_KEY_HEADER));
        self
    }

    #[must_use]
    pub const fn with_log_detail(mut self, detail: LogDetail) -> Self {
        self.log_detail = detail;
        self
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub const fn log_detail(&self) -> LogDetail {
        self.log_detail
    }

    /// Value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Resolve a request path and query against the base URL.
    ///
    /// The base URL's own path is kept as a prefix.
    pub(crate) fn url_for(&self, path: &str, query: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();

        let base_path = url.path().trim_end_matches('/').to_string();
        let path = path.trim_start_matches('/');
        url.set_path(&format!("{base_path}/{path}"));

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        url
    }
}

// ============================================================================
// Response Specification
// ============================================================================

/// Checks applied to every response before body extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    expected_status: Option<u16>,
    max_elapsed: Option<Duration>,
}

impl ResponseSpec {
    /// Require an exact status code.
    pub const fn status(code: u16) -> Self {
        Self {
            expected_status: Some(code),
            max_elapsed: None,
        }
    }

    /// No checks at all.
    pub const fn any() -> Self {
        Self {
            expected_status: None,
            max_elapsed: None,
        }
    }

    pub const fn ok() -> Self {
        Self::status(200)
    }

    pub const fn created() -> Self {
        Self::status(201)
    }

    pub const fn no_content() -> Self {
        Self::status(204)
    }

    pub const fn bad_request() -> Self {
        Self::status(400)
    }

    pub const fn not_found() -> Self {
        Self::status(404)
    }

    /// Also require the response to arrive strictly within `limit`.
    #[must_use]
    pub const fn with_max_elapsed(mut self, limit: Duration) -> Self {
        self.max_elapsed = Some(limit);
        self
    }

    pub const fn expected_status(&self) -> Option<u16> {
        self.expected_status
    }

    pub const fn max_elapsed(&self) -> Option<Duration> {
        self.max_elapsed
    }

    /// Check status first, then elapsed time.
    pub fn verify(&self, response: &ApiResponse) -> ApiResult<()> {
        if let Some(expected) = self.expected_status {
            if response.status() != expected {
                return Err(ApiError::UnexpectedStatus {
                    expected,
                    actual: response.status(),
                    url: response.url().to_string(),
                    body: response.body().to_string(),
                });
            }
        }

        if let Some(limit) = self.max_elapsed {
            if response.elapsed() >= limit {
                return Err(ApiError::TooSlow {
                    url: response.url().to_string(),
                    elapsed_ms: response.elapsed().as_millis(),
                    limit_ms: limit.as_millis(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_for(base_url: &str) -> RequestSpec {
        RequestSpec::new(Url::parse(base_url).unwrap())
    }

    fn response(status: u16, elapsed_ms: u64) -> ApiResponse {
        ApiResponse::new(
            Url::parse("https://reqres.in/api/users/2").unwrap(),
            status,
            "{}".to_string(),
            Duration::from_millis(elapsed_ms),
        )
    }

    #[test]
    fn test_request_spec_sets_json_headers() {
        let spec = spec_for("https://reqres.in");
        assert_eq!(spec.header("content-type"), Some("application/json"));
        assert_eq!(spec.header("ACCEPT"), Some("application/json"));
        assert!(spec.header(API_KEY_HEADER).is_none());
        assert_eq!(spec.log_detail(), LogDetail::All);
    }

    #[test]
    fn test_from_config_rejects_invalid_url() {
        let config = ReqresClientConfig::new().with_base_url("not a url");
        assert!(matches!(
            RequestSpec::from_config(&config),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_new_keeps_parsed_url() {
        let base = Url::parse("http://localhost:9000/").unwrap();
        let spec = RequestSpec::new(base.clone());
        assert_eq!(spec.base_url(), &base);
    }

    #[test]
    fn test_api_key_is_replaced_not_duplicated() {
        let spec = spec_for("https://reqres.in")
            .with_api_key("first")
            .with_header("X-Api-Key", "second");

        let keys: Vec<_> = spec
            .headers()
            .iter()
            .filter(|(name, _)| name.eq_ignore_ascii_case(API_KEY_HEADER))
            .collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(spec.header(API_KEY_HEADER), Some("second"));

        assert!(spec.without_api_key().header(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_from_config_carries_key_and_logging() {
        let config = ReqresClientConfig::new().with_log_detail(LogDetail::Summary);
        let spec = RequestSpec::from_config(&config).unwrap();
        assert_eq!(spec.header(API_KEY_HEADER), Some("reqres-free-v1"));
        assert_eq!(spec.log_detail(), LogDetail::Summary);

        let keyless = RequestSpec::from_config(&config.without_api_key()).unwrap();
        assert!(keyless.header(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_url_for_joins_path_and_query() {
        let spec = spec_for("https://reqres.in");
        let url = spec.url_for("/api/users", &[("page".to_string(), "2".to_string())]);
        assert_eq!(url.as_str(), "https://reqres.in/api/users?page=2");

        let bare = spec.url_for("api/unknown/23", &[]);
        assert_eq!(bare.as_str(), "https://reqres.in/api/unknown/23");
    }

    #[test]
    fn test_url_for_keeps_base_path_prefix() {
        let spec = spec_for("http://localhost:8080/mock/");
        let url = spec.url_for("/api/login", &[]);
        assert_eq!(url.as_str(), "http://localhost:8080/mock/api/login");
    }

    #[test]
    fn test_log_detail_parsing() {
        assert_eq!("ALL".parse::<LogDetail>().unwrap(), LogDetail::All);
        assert_eq!(" summary ".parse::<LogDetail>().unwrap(), LogDetail::Summary);
        assert_eq!("none".parse::<LogDetail>().unwrap(), LogDetail::Off);
        assert!("loud".parse::<LogDetail>().is_err());
        assert_eq!(LogDetail::Summary.to_string(), "summary");
    }

    #[test]
    fn test_response_spec_status_check() {
        assert!(ResponseSpec::ok().verify(&response(200, 10)).is_ok());
        assert!(ResponseSpec::status(418).verify(&response(418, 10)).is_ok());

        match ResponseSpec::not_found().verify(&response(200, 10)) {
            Err(ApiError::UnexpectedStatus {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 404);
                assert_eq!(actual, 200);
            }
            other => panic!("Expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_response_spec_any_accepts_everything() {
        assert!(ResponseSpec::any().verify(&response(500, 10)).is_ok());
        assert_eq!(ResponseSpec::any().expected_status(), None);
    }

    #[test]
    fn test_response_spec_time_bound_is_strict() {
        let spec = ResponseSpec::any().with_max_elapsed(Duration::from_millis(4000));
        assert!(spec.verify(&response(200, 3999)).is_ok());
        assert!(matches!(
            spec.verify(&response(200, 4000)),
            Err(ApiError::TooSlow { limit_ms: 4000, .. })
        ));
    }

    #[test]
    fn test_status_is_checked_before_time() {
        let spec = ResponseSpec::created().with_max_elapsed(Duration::from_millis(1));
        assert!(matches!(
            spec.verify(&response(500, 50)),
            Err(ApiError::UnexpectedStatus { .. })
        ));
    }

    #[test]
    fn test_named_constructors() {
        assert_eq!(ResponseSpec::ok().expected_status(), Some(200));
        assert_eq!(ResponseSpec::created().expected_status(), Some(201));
        assert_eq!(ResponseSpec::no_content().expected_status(), Some(204));
        assert_eq!(ResponseSpec::bad_request().expected_status(), Some(400));
        assert_eq!(ResponseSpec::not_found().expected_status(), Some(404));
    }
}
