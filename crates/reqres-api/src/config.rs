//! Public configuration for the reqres client.
//!
//! Defaults target the public deployment. [`ReqresClientConfig::from_env`]
//! lets a run point at another deployment without code changes.

use std::ffi::OsString;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};
use crate::spec::LogDetail;

/// Public deployment of the API.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Free-tier key accepted by the public deployment.
pub const DEFAULT_API_KEY: &str = "reqres-free-v1";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "REQRES_BASE_URL";
/// Environment variable overriding the API key. Empty disables the header.
pub const ENV_API_KEY: &str = "REQRES_API_KEY";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "REQRES_TIMEOUT_SECS";
/// Environment variable selecting request/response logging (`off|summary|all`).
pub const ENV_LOG: &str = "REQRES_LOG";

/// Configuration for the reqres client.
///
/// # Example
///
/// ```
/// use reqres_api::ReqresClientConfig;
/// use std::time::Duration;
///
/// let config = ReqresClientConfig::new()
///     .with_base_url("http://localhost:8080")
///     .with_timeout(Duration::from_secs(10))
///     .without_api_key();
/// ```
#[derive(Debug, Clone)]
pub struct ReqresClientConfig {
    /// Base URL every request path is joined onto
    pub(crate) base_url: String,
    /// Value of the `x-api-key` header, if any
    pub(crate) api_key: Option<String>,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// How much of each exchange is logged
    pub(crate) log_detail: LogDetail,
}

impl Default for ReqresClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: Some(DEFAULT_API_KEY.to_string()),
            user_agent: concat!("reqres-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            log_detail: LogDetail::All,
        }
    }
}

impl ReqresClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `REQRES_*` variables from the process environment.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_env_provider(&SystemEnv)
    }

    /// Defaults overlaid with variables from the given provider.
    pub fn from_env_provider(env: &dyn EnvProvider) -> ApiResult<Self> {
        let mut config = Self::default();

        if let Some(base_url) = read_var(env, ENV_BASE_URL)? {
            config.base_url = base_url;
        }

        if let Some(api_key) = read_var(env, ENV_API_KEY)? {
            config.api_key = if api_key.is_empty() {
                None
            } else {
                Some(api_key)
            };
        }

        if let Some(raw) = read_var(env, ENV_TIMEOUT_SECS)? {
            let secs: u64 = raw.trim().parse().map_err(|_| ApiError::Configuration {
                message: format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = read_var(env, ENV_LOG)? {
            config.log_detail = raw.parse()?;
        }

        Ok(config)
    }

    /// Set the base URL. Defaults to `https://reqres.in`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the `x-api-key` header value.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Send no `x-api-key` header.
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set how much of each exchange is logged. Defaults to [`LogDetail::All`].
    #[must_use]
    pub const fn with_log_detail(mut self, detail: LogDetail) -> Self {
        self.log_detail = detail;
        self
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

fn read_var(env: &dyn EnvProvider, key: &str) -> ApiResult<Option<String>> {
    env.get(key)
        .map(|value| {
            value.into_string().map_err(|_| ApiError::Configuration {
                message: format!("{key} is not valid UTF-8"),
            })
        })
        .transpose()
}

// ============================================================================
// Environment Access
// ============================================================================

/// Trait for accessing environment variables (injectable for testing).
pub trait EnvProvider {
    /// Get an environment variable.
    fn get(&self, key: &str) -> Option<OsString>;
}

/// Production environment provider that reads from the actual process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Test environment provider with predefined variables.
#[cfg(test)]
#[derive(Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReqresClientConfig::new();
        assert_eq!(config.base_url, "https://reqres.in");
        assert_eq!(config.api_key.as_deref(), Some("reqres-free-v1"));
        assert!(config.user_agent.starts_with("reqres-api/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.log_detail, LogDetail::All);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ReqresClientConfig::new()
            .with_base_url("http://localhost:3000")
            .with_api_key("secret")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_log_detail(LogDetail::Summary);

        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.log_detail, LogDetail::Summary);

        assert!(config.without_api_key().api_key().is_none());
    }

    #[test]
    fn test_from_env_without_variables_keeps_defaults() {
        let config = ReqresClientConfig::from_env_provider(&MockEnv::new()).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), Some(DEFAULT_API_KEY));
    }

    #[test]
    fn test_from_env_overrides() {
        let env = MockEnv::new()
            .with_var(ENV_BASE_URL, "http://staging.local")
            .with_var(ENV_API_KEY, "other-key")
            .with_var(ENV_TIMEOUT_SECS, " 12 ")
            .with_var(ENV_LOG, "off");

        let config = ReqresClientConfig::from_env_provider(&env).unwrap();
        assert_eq!(config.base_url(), "http://staging.local");
        assert_eq!(config.api_key(), Some("other-key"));
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.log_detail, LogDetail::Off);
    }

    #[test]
    fn test_from_env_empty_api_key_disables_header() {
        let env = MockEnv::new().with_var(ENV_API_KEY, "");
        let config = ReqresClientConfig::from_env_provider(&env).unwrap();
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_from_env_rejects_bad_timeout() {
        let env = MockEnv::new().with_var(ENV_TIMEOUT_SECS, "soon");
        let result = ReqresClientConfig::from_env_provider(&env);
        assert!(matches!(result, Err(ApiError::Configuration { .. })));
    }

    #[test]
    fn test_from_env_rejects_bad_log_detail() {
        let env = MockEnv::new().with_var(ENV_LOG, "verbose");
        let result = ReqresClientConfig::from_env_provider(&env);
        assert!(matches!(result, Err(ApiError::Configuration { .. })));
    }
}
