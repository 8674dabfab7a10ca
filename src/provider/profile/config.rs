use crate::error::ApiError;
use crate::provider::dropbox::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable consulted when no access token is configured.
pub const ACCESS_TOKEN_ENV: &str = "DROPBOX_ACCESS_TOKEN";

/// Set to `1` to force mock data, mirroring a design-time preview.
pub const PREVIEW_ENV: &str = "EXPLORER_PREVIEW";

/// Listing backend configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Route every listing through the mock resolver.
    #[serde(default)]
    pub use_mock: bool,

    /// Opaque access token; falls back to `DROPBOX_ACCESS_TOKEN`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout for live calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            use_mock: false,
            access_token: None,
            endpoint: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("use_mock", &self.use_mock)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Where listing requests are routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Mock,
    Dropbox {
        access_token: String,
        endpoint: String,
        timeout: Duration,
    },
}

impl BackendConfig {
    pub fn preview_mode() -> bool {
        std::env::var(PREVIEW_ENV).map(|v| v == "1").unwrap_or(false)
    }

    /// True when mock data is forced regardless of credentials.
    pub fn mock_forced(&self) -> bool {
        self.use_mock || cfg!(feature = "mock") || Self::preview_mode()
    }

    pub fn resolved_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| std::env::var(ACCESS_TOKEN_ENV).ok())
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn endpoint_url_is_valid(endpoint: &str) -> bool {
        let Some((scheme, rest)) = endpoint.trim().split_once("://") else {
            return false;
        };
        if scheme != "http" && scheme != "https" {
            return false;
        }
        if rest.is_empty() || rest.chars().any(char::is_whitespace) {
            return false;
        }

        let authority = rest.split('/').next().unwrap_or_default();
        let host = authority.split(':').next().unwrap_or_default();
        !host.is_empty()
            && (host == "localhost"
                || host.contains('.')
                || host.parse::<std::net::IpAddr>().is_ok())
    }

    /// Validate backend configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(endpoint) = &self.endpoint {
            if !Self::endpoint_url_is_valid(endpoint) {
                return Err(format!("Invalid endpoint URL: {}", endpoint));
            }
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be at least 1 second".to_string());
        }

        Ok(())
    }

    /// Decide the routing for this configuration.
    ///
    /// Without a usable access token the listing falls back to mock data.
    pub fn to_backend(&self) -> Result<Backend, ApiError> {
        self.validate().map_err(ApiError::ConfigError)?;

        if self.mock_forced() {
            return Ok(Backend::Mock);
        }

        match self.resolved_access_token() {
            Some(access_token) => Ok(Backend::Dropbox {
                access_token,
                endpoint: self
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                timeout: Duration::from_secs(self.timeout_secs),
            }),
            None => {
                tracing::warn!(
                    "No access token configured (set backend.access_token or {}); using mock data",
                    ACCESS_TOKEN_ENV
                );
                Ok(Backend::Mock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // Tests that read or write process environment variables hold this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn explicit_mock_switch_wins_over_token() {
        let config = BackendConfig {
            use_mock: true,
            access_token: Some("secret".to_string()),
            ..BackendConfig::default()
        };
        assert_eq!(config.to_backend().unwrap(), Backend::Mock);
    }

    #[cfg(not(feature = "mock"))]
    #[test]
    fn configured_token_selects_dropbox() {
        let _guard = env_lock();
        let config = BackendConfig {
            access_token: Some("  secret ".to_string()),
            timeout_secs: 7,
            ..BackendConfig::default()
        };
        match config.to_backend().unwrap() {
            Backend::Dropbox {
                access_token,
                endpoint,
                timeout,
            } => {
                assert_eq!(access_token, "secret");
                assert_eq!(endpoint, DEFAULT_ENDPOINT);
                assert_eq!(timeout, Duration::from_secs(7));
            }
            other => panic!("Expected dropbox backend, got {:?}", other),
        }
    }

    #[test]
    fn missing_token_falls_back_to_mock() {
        let _guard = env_lock();
        let saved = std::env::var(ACCESS_TOKEN_ENV).ok();
        std::env::remove_var(ACCESS_TOKEN_ENV);

        let config = BackendConfig {
            access_token: Some("   ".to_string()),
            ..BackendConfig::default()
        };
        let token = config.resolved_access_token();
        let backend = config.to_backend();

        if let Some(value) = saved {
            std::env::set_var(ACCESS_TOKEN_ENV, value);
        }
        assert_eq!(token, None);
        assert_eq!(backend.unwrap(), Backend::Mock);
    }

    #[cfg(not(feature = "mock"))]
    #[test]
    fn env_token_is_used_when_config_has_none() {
        let _guard = env_lock();
        let saved = std::env::var(ACCESS_TOKEN_ENV).ok();
        std::env::set_var(ACCESS_TOKEN_ENV, "from-env");

        let backend = BackendConfig::default().to_backend();

        match saved {
            Some(value) => std::env::set_var(ACCESS_TOKEN_ENV, value),
            None => std::env::remove_var(ACCESS_TOKEN_ENV),
        }
        assert!(matches!(
            backend.unwrap(),
            Backend::Dropbox { access_token, .. } if access_token == "from-env"
        ));
    }

    #[test]
    fn preview_mode_forces_mock() {
        let _guard = env_lock();
        let saved = std::env::var(PREVIEW_ENV).ok();
        std::env::set_var(PREVIEW_ENV, "1");

        let config = BackendConfig {
            access_token: Some("secret".to_string()),
            ..BackendConfig::default()
        };
        let preview = BackendConfig::preview_mode();
        let backend = config.to_backend();

        std::env::set_var(PREVIEW_ENV, "0");
        let preview_off = BackendConfig::preview_mode();

        match saved {
            Some(value) => std::env::set_var(PREVIEW_ENV, value),
            None => std::env::remove_var(PREVIEW_ENV),
        }
        assert!(preview);
        assert!(!preview_off);
        assert_eq!(backend.unwrap(), Backend::Mock);
    }

    #[test]
    fn endpoint_validation() {
        assert!(BackendConfig::endpoint_url_is_valid("https://api.dropboxapi.com/2"));
        assert!(BackendConfig::endpoint_url_is_valid("http://localhost:8080"));
        assert!(BackendConfig::endpoint_url_is_valid("http://127.0.0.1/2"));
        assert!(!BackendConfig::endpoint_url_is_valid("api.dropboxapi.com"));
        assert!(!BackendConfig::endpoint_url_is_valid("ftp://files.example.com"));
        assert!(!BackendConfig::endpoint_url_is_valid("https://"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert!(matches!(config.to_backend(), Err(ApiError::ConfigError(_))));

        let config = BackendConfig {
            endpoint: Some("not a url".to_string()),
            ..BackendConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = BackendConfig {
            access_token: Some("super-secret".to_string()),
            ..BackendConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
