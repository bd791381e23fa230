//! Build-time Configuration
//!
//! Values baked in by Trunk from the environment at compile time.

use log::LevelFilter;

use goal_board_api::DEFAULT_BASE_URL;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the REST service
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Read `GOAL_BOARD_API_URL` and `GOAL_BOARD_LOG` as seen by the compiler
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("GOAL_BOARD_API_URL"), option_env!("GOAL_BOARD_LOG"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(String::from)
                .unwrap_or(defaults.api_base_url),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("http://localhost:5000/api/"), Some("debug"));
        assert_eq!(config.api_base_url, "http://localhost:5000/api/");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_or_unknown_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
