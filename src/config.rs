// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for wat
//!
//! Loads configuration from .watrc.toml in current directory or ~/.config/wat/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Output format for results (mirrored from cli for library use)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

/// Completion strategy selectable from config (mirrored from cli)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigMatcher {
    #[default]
    Prefix,
    Levenshtein,
}

/// Configuration loaded from .watrc.toml or ~/.config/wat/config.toml
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the documentation index JSON
    pub index_path: Option<PathBuf>,
    /// Default output format (text or json)
    pub default_format: Option<String>,
    /// Prefer detailed documents when available
    pub detail: Option<bool>,
    /// Prefer install documents when available
    pub install: Option<bool>,
    /// Colorize listings (defaults to on for terminals)
    pub color: Option<bool>,
    /// Completion matcher (prefix or levenshtein)
    pub matcher: Option<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .watrc.toml in current directory
    /// 2. ~/.config/wat/config.toml
    pub fn load() -> Self {
        // Try current directory first
        if let Some(config) = Self::load_from_path(Path::new(".watrc.toml")) {
            return config;
        }

        // Try home directory config
        if let Some(home) = dirs::home_dir() {
            let config_path = home.join(".config").join("wat").join("config.toml");
            if let Some(config) = Self::load_from_path(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get output format from config, parsing the string to ConfigOutputFormat
    pub fn output_format(&self) -> Option<ConfigOutputFormat> {
        self.default_format.as_ref().and_then(|s| match s.to_lowercase().as_str() {
            "json" => Some(ConfigOutputFormat::Json),
            "text" => Some(ConfigOutputFormat::Text),
            _ => None,
        })
    }

    /// Get matcher from config
    pub fn matcher(&self) -> Option<ConfigMatcher> {
        self.matcher.as_ref().and_then(|s| match s.to_lowercase().as_str() {
            "prefix" => Some(ConfigMatcher::Prefix),
            "levenshtein" | "fuzzy" => Some(ConfigMatcher::Levenshtein),
            _ => None,
        })
    }

    /// Index location: CLI flag, then config, then the data directory default
    pub fn resolve_index_path(&self, cli_value: Option<&Path>) -> PathBuf {
        cli_value
            .map(Path::to_path_buf)
            .or_else(|| self.index_path.clone())
            .unwrap_or_else(default_index_path)
    }

    /// Merge CLI flag with config (a set flag wins)
    pub fn merge_flag(cli_value: bool, config_value: Option<bool>) -> bool {
        cli_value || config_value.unwrap_or(false)
    }
}

/// `<data dir>/wat/index.json`, or `./index.json` when no data dir is known
pub fn default_index_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("wat").join("index.json"))
        .unwrap_or_else(|| PathBuf::from("index.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_keys() {
        let config: Config = toml::from_str(
            r#"
            index_path = "/srv/wat/index.json"
            default_format = "JSON"
            detail = true
            color = false
            matcher = "levenshtein"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.output_format(), Some(ConfigOutputFormat::Json));
        assert_eq!(config.matcher(), Some(ConfigMatcher::Levenshtein));
        assert_eq!(config.detail, Some(true));
        assert_eq!(config.install, None);
        assert_eq!(config.color, Some(false));
        assert_eq!(
            config.resolve_index_path(None),
            PathBuf::from("/srv/wat/index.json")
        );
    }

    #[test]
    fn cli_index_path_wins() {
        let config = Config {
            index_path: Some(PathBuf::from("/from/config.json")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_index_path(Some(Path::new("cli.json"))),
            PathBuf::from("cli.json")
        );
    }

    #[test]
    fn unknown_values_are_ignored() {
        let config: Config = toml::from_str("default_format = \"yaml\"\nmatcher = \"magic\"")
            .expect("parse config");
        assert_eq!(config.output_format(), None);
        assert_eq!(config.matcher(), None);
    }

    #[test]
    fn flags_merge() {
        assert!(Config::merge_flag(true, Some(false)));
        assert!(Config::merge_flag(false, Some(true)));
        assert!(!Config::merge_flag(false, None));
    }
}
