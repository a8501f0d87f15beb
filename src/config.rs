//! App Configuration
//!
//! Compile-time overrides (set when running `trunk build`):
//! - `PEOPLE_API_URL`: where the person list is fetched from
//! - `PEOPLE_BASE_PATH`: path prefix the app is mounted under
//! - `PEOPLE_LOG_LEVEL`: `error` | `warn` | `info` | `debug` | `trace`

use log::LevelFilter;

const DEFAULT_PEOPLE_URL: &str = "https://mate-academy.github.io/react_people-table/api/people.json";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub people_url: String,
    pub base_path: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            people_url: DEFAULT_PEOPLE_URL.to_string(),
            base_path: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with whatever was set at build time
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PEOPLE_API_URL"),
            option_env!("PEOPLE_BASE_PATH"),
            option_env!("PEOPLE_LOG_LEVEL"),
        )
    }

    fn from_values(people_url: Option<&str>, base_path: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            people_url: people_url
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .unwrap_or(defaults.people_url),
            base_path: base_path
                .map(|s| s.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_path),
            log_level: log_level
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("/api/people.json"), Some("/app/"), Some("debug"));
        assert_eq!(config.people_url, "/api/people.json");
        assert_eq!(config.base_path, "/app");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), None, Some("loud"));
        assert_eq!(config.people_url, DEFAULT_PEOPLE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
