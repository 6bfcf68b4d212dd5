//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs, and builds the
//! [`GatewayConfig`] the server runs with.

use service_gateway_common::config::{GatewayConfig, ServiceUrls, DEFAULT_PROBE_TIMEOUT_SECS};
use service_gateway_common::types::ServiceName;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use service_gateway::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("GATEWAY_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

/// 下流サービスのベースURLを環境変数から読み込む
///
/// 未設定・空文字のサービスは `None` になる。
pub fn load_service_urls() -> ServiceUrls {
    let mut urls = ServiceUrls::default();
    for name in ServiceName::ALL {
        let value = std::env::var(name.env_var())
            .ok()
            .filter(|url| !url.trim().is_empty());
        urls.set(name, value);
    }
    urls
}

/// ゲートウェイ設定を環境変数から読み込む
pub fn load_from_env() -> GatewayConfig {
    let defaults = GatewayConfig::default();

    let host = get_env_with_fallback_or("GATEWAY_HOST", "HOST", &defaults.host);
    let port = get_env_with_fallback_parse("GATEWAY_PORT", "PORT", defaults.port);
    let probe_timeout_secs = match get_env_with_fallback_parse(
        "GATEWAY_PROBE_TIMEOUT_SECS",
        "PROBE_TIMEOUT_SECS",
        DEFAULT_PROBE_TIMEOUT_SECS,
    ) {
        0 => {
            tracing::warn!(
                default_secs = DEFAULT_PROBE_TIMEOUT_SECS,
                "Probe timeout must be non-zero, using default"
            );
            DEFAULT_PROBE_TIMEOUT_SECS
        }
        secs => secs,
    };

    GatewayConfig {
        host,
        port,
        probe_timeout_secs,
        services: load_service_urls(),
    }
}
