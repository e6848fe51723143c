//! Base URL and map credential resolution.
//!
//! The WASM app has no process environment, so both values are baked in at
//! build time with `option_env!`. The CLI overrides the base URL at runtime.

use std::fmt;

/// Backend address used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const BUILD_API_URL: Option<&str> = option_env!("GEO_API_URL");
const BUILD_MAPS_API_KEY: Option<&str> = option_env!("GOOGLE_MAPS_API_KEY");

#[derive(Debug, PartialEq, Clone)]
pub enum ConfigError {
    MissingMapsKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingMapsKey => write!(
                f,
                "Google Maps API key not configured. Please set GOOGLE_MAPS_API_KEY when building the dashboard and rebuild."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Base URL of the analytics API baked into this build.
pub fn api_base_url() -> String {
    resolve_api_url(BUILD_API_URL)
}

/// Google Maps key baked into this build.
pub fn maps_api_key() -> Result<String, ConfigError> {
    resolve_maps_key(BUILD_MAPS_API_KEY)
}

/// Pick the configured URL, falling back to [`DEFAULT_API_URL`] when unset or blank.
pub fn resolve_api_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// A missing or blank key is a configuration error.
pub fn resolve_maps_key(configured: Option<&str>) -> Result<String, ConfigError> {
    configured
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::MissingMapsKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_defaults() {
        assert_eq!(resolve_api_url(None), "http://localhost:5000");
        assert_eq!(resolve_api_url(Some("  ")), "http://localhost:5000");
        assert_eq!(resolve_api_url(Some("https://geo.example.in/")), "https://geo.example.in");
    }

    #[test]
    fn test_maps_key_required() {
        assert_eq!(resolve_maps_key(None), Err(ConfigError::MissingMapsKey));
        assert_eq!(resolve_maps_key(Some(" ")), Err(ConfigError::MissingMapsKey));
        assert_eq!(resolve_maps_key(Some("abc123")), Ok("abc123".to_string()));
    }
}
