//! Deployment mode resolution

use std::fmt;
use std::time::Duration;

use crate::constants;

/// Which implementation serves API calls. Resolved once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// Requests go to the backend over HTTP
    Live,
    /// Requests resolve against in-memory fixtures
    Static,
}

impl DeployMode {
    /// Static when the flag is truthy or the site is served from a static host.
    pub fn detect(static_flag: Option<&str>, hostname: Option<&str>) -> Self {
        let flagged = static_flag
            .map(|f| matches!(f.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        let static_host = hostname
            .map(|h| h.trim_end_matches('.').to_ascii_lowercase().ends_with(constants::STATIC_HOST_SUFFIX))
            .unwrap_or(false);

        if flagged || static_host {
            DeployMode::Static
        } else {
            DeployMode::Live
        }
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployMode::Live => f.write_str("live"),
            DeployMode::Static => f.write_str("static"),
        }
    }
}

/// Dispatch shim configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub static_deploy: Option<String>,
    /// Serving hostname; falls back to the host of `api_url`
    pub hostname: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            static_deploy: None,
            hostname: None,
            timeout_seconds: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: constants::get_api_url(),
            static_deploy: constants::get_static_deploy_flag(),
            hostname: constants::get_hostname(),
            timeout_seconds: constants::get_timeout_secs(),
        }
    }

    pub fn live(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn static_deploy() -> Self {
        Self {
            static_deploy: Some("true".to_string()),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn mode(&self) -> DeployMode {
        let host = self.hostname.clone().or_else(|| {
            reqwest::Url::parse(&self.api_url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
        });

        DeployMode::detect(self.static_deploy.as_deref(), host.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_flag() {
        assert_eq!(DeployMode::detect(Some("true"), None), DeployMode::Static);
        assert_eq!(DeployMode::detect(Some("TRUE"), None), DeployMode::Static);
        assert_eq!(DeployMode::detect(Some("1"), Some("localhost")), DeployMode::Static);
        assert_eq!(DeployMode::detect(Some("false"), Some("localhost")), DeployMode::Live);
        assert_eq!(DeployMode::detect(None, None), DeployMode::Live);
    }

    #[test]
    fn test_detect_hostname() {
        assert_eq!(DeployMode::detect(None, Some("someone.github.io")), DeployMode::Static);
        assert_eq!(DeployMode::detect(None, Some("portfolio.example.com")), DeployMode::Live);
    }

    #[test]
    fn test_config_mode_uses_api_host() {
        let config = ClientConfig::live("https://someone.github.io/portfolio");
        assert_eq!(config.mode(), DeployMode::Static);

        let config = ClientConfig::live("http://localhost:5000");
        assert_eq!(config.mode(), DeployMode::Live);

        let mut config = ClientConfig::live("http://localhost:5000");
        config.hostname = Some("someone.github.io".to_string());
        assert_eq!(config.mode(), DeployMode::Static);

        assert_eq!(ClientConfig::static_deploy().mode(), DeployMode::Static);
    }
}
