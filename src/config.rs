//! App Configuration
//!
//! Values are baked in at build time, e.g. `TODO_API_URL=https://host/api/todo trunk build`.

use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/todo";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection endpoint; single tasks live at `{api_base_url}/{id}`
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_parts(option_env!("TODO_API_URL"), option_env!("TODO_LOG_LEVEL"))
    }
}

impl AppConfig {
    fn from_parts(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();
        // Unknown level names fall back to info
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::INFO);

        Self { api_base_url, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_parts(None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_parts(Some(" https://todo.example/api/todo "), Some("debug"));
        assert_eq!(config.api_base_url, "https://todo.example/api/todo");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_blank_url_and_bad_level_fall_back() {
        let config = AppConfig::from_parts(Some(""), Some("loud"));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, Level::INFO);
    }
}
