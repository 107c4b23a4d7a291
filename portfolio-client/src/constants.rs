//! Central Configuration Constants
//!
//! Defaults for the dispatch shim, overridable from the environment.

/// Default backend URL for live mode
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Hostname suffix that implies a static deployment
pub const STATIC_HOST_SUFFIX: &str = "github.io";

/// Artificial latency bounds for static mode (milliseconds, max exclusive)
pub const STATIC_LATENCY_MIN_MS: u64 = 100;
pub const STATIC_LATENCY_MAX_MS: u64 = 500;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get backend URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("PORTFOLIO_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Raw static-deploy flag, if set
pub fn get_static_deploy_flag() -> Option<String> {
    std::env::var("STATIC_DEPLOY").ok()
}

/// Serving hostname override, if set
pub fn get_hostname() -> Option<String> {
    std::env::var("PORTFOLIO_HOSTNAME").ok()
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("PORTFOLIO_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
