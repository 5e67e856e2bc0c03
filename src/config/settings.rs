//! Application settings loading from config.toml
//!
//! Settings are read from a TOML file whose every field has a default, so a
//! missing file or a partial file both produce a usable configuration. A few
//! values can be overridden from the environment after the file is read.

use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable naming an alternative settings file.
pub const CONFIG_PATH_ENV: &str = "BRIEFING_DESK_CONFIG";

/// Environment variable overriding `server.bind_addr`.
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Briefing viewer settings
    pub briefing: BriefingConfig,
    /// Shared snapshot settings
    pub share: ShareConfig,
    /// Database settings (the URL itself comes from `DATABASE_URL`)
    pub database: DatabaseConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the dashboard listens on
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Briefing viewer settings
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BriefingConfig {
    /// Date shown when `/briefing` is opened without a `date` parameter
    pub default_date: NaiveDate,
    /// Dates offered by the date picker and the "recent briefings" list, newest first
    pub recent_dates: Vec<NaiveDate>,
    /// Label used for articles whose category is missing or unnamed
    pub fallback_category: String,
}

impl Default for BriefingConfig {
    fn default() -> Self {
        let date = |d| NaiveDate::from_ymd_opt(2025, 9, d).unwrap_or_default();
        Self {
            default_date: date(5),
            recent_dates: vec![date(9), date(8), date(5)],
            fallback_category: "기타".to_string(),
        }
    }
}

/// Where the shared snapshot table comes from
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotSource {
    /// The hand-prepared snapshot table
    #[default]
    Builtin,
    /// Snapshots derived from the fixture briefings
    Briefings,
}

/// Shared snapshot settings
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct ShareConfig {
    /// Source of the snapshot table
    pub source: SnapshotSource,
}

/// Database settings
#[derive(Debug, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Create the briefing tables at startup if they are missing
    pub create_schema: bool,
}

/// Parses settings from a TOML string.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        warn!("Settings file {:?} not found, using defaults.", path_ref);
        return Ok(AppConfig::default());
    }

    debug!("Loading settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {path_ref:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads settings from `BRIEFING_DESK_CONFIG` (default `./config.toml`) and
/// applies environment overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.toml".to_string());
    let mut config = load_config(&path)?;

    if let Ok(bind_addr) = std::env::var(BIND_ADDR_ENV) {
        info!("Overriding bind address from {}: {}", BIND_ADDR_ENV, bind_addr);
        config.server.bind_addr = bind_addr;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [server]
            bind_addr = "0.0.0.0:8080"

            [briefing]
            default_date = "2025-09-08"
            recent_dates = ["2025-09-09", "2025-09-08"]
            fallback_category = "Other"

            [share]
            source = "briefings"

            [database]
            create_schema = true
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(
            config.briefing.default_date,
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()
        );
        assert_eq!(config.briefing.recent_dates.len(), 2);
        assert_eq!(config.briefing.fallback_category, "Other");
        assert_eq!(config.share.source, SnapshotSource::Briefings);
        assert!(config.database.create_schema);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.briefing.fallback_category, "기타");
        assert_eq!(config.briefing.recent_dates.len(), 3);
        assert_eq!(config.share.source, SnapshotSource::Builtin);
        assert!(!config.database.create_schema);
    }

    #[test]
    fn test_parse_partial_section_keeps_other_defaults() {
        let config = parse_config("[briefing]\nfallback_category = \"misc\"\n").unwrap();
        assert_eq!(config.briefing.fallback_category, "misc");
        assert_eq!(
            config.briefing.default_date,
            NaiveDate::from_ymd_opt(2025, 9, 5).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid_date_is_config_error() {
        let result = parse_config("[briefing]\ndefault_date = \"yesterday\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config("definitely/not/here.toml").unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
    }
}
