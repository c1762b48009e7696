//! # Store Configuration
//!
//! Options recognized by the café store.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CAFE_STORE_LOCALE=de                                               │
//! │     CAFE_STORE_MODE=ordering                                           │
//! │     CAFE_STORE_NAMESPACED=false                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cafe-store/store.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     locale = "en", mode = "menu", namespaced = true                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # store.toml
//! locale = "en"
//! mode = "ordering"  # menu | ordering
//! namespaced = true
//! ```
//!
//! The remote client is not configuration: it is handed to
//! [`CafeStore::new`](crate::store::CafeStore::new) directly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use ts_rs::TS;

use cafe_core::validation::validate_locale;
use cafe_core::DEFAULT_LOCALE;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Store Mode
// =============================================================================

/// What the embedding application uses the store for.
///
/// Accepted and exposed to the UI; the selection logic behaves the same in
/// both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    /// Read-only menu display.
    #[default]
    Menu,

    /// Customer is placing an order.
    Ordering,
}

impl std::fmt::Display for StoreMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreMode::Menu => write!(f, "menu"),
            StoreMode::Ordering => write!(f, "ordering"),
        }
    }
}

impl std::str::FromStr for StoreMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "menu" => Ok(StoreMode::Menu),
            "ordering" => Ok(StoreMode::Ordering),
            other => Err(StoreError::InvalidConfig(format!(
                "Unknown store mode: '{}'. Valid options: menu, ordering",
                other
            ))),
        }
    }
}

// =============================================================================
// Store Configuration
// =============================================================================

/// Complete store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Locale passed to every remote call unless the caller overrides it.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Menu or ordering.
    #[serde(default)]
    pub mode: StoreMode,

    /// Whether the enclosing framework should namespace this module.
    #[serde(default = "default_true")]
    pub namespaced: bool,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            locale: default_locale(),
            mode: StoreMode::default(),
            namespaced: true,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_mode(mut self, mode: StoreMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_namespaced(mut self, namespaced: bool) -> Self {
        self.namespaced = namespaced;
        self
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (store.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML config file without applying overrides.
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        validate_locale(&self.locale).map_err(cafe_core::CoreError::from)?;
        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup("CAFE_STORE_LOCALE") {
            debug!(locale = %locale, "Overriding locale from environment");
            self.locale = locale;
        }

        if let Some(mode) = lookup("CAFE_STORE_MODE") {
            match mode.parse() {
                Ok(parsed) => {
                    debug!(mode = %mode, "Overriding store mode from environment");
                    self.mode = parsed;
                }
                Err(_) => warn!(mode = %mode, "Unknown store mode in environment"),
            }
        }

        if let Some(namespaced) = lookup("CAFE_STORE_NAMESPACED") {
            match namespaced.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.namespaced = true,
                "0" | "false" | "no" => self.namespaced = false,
                _ => warn!(namespaced = %namespaced, "Invalid namespaced flag in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cafe", "cafe-store")
            .map(|dirs| dirs.config_dir().join("store.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cafe-store-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.mode, StoreMode::Menu);
        assert!(config.namespaced);
    }

    #[test]
    fn test_store_mode_parsing() {
        assert_eq!("menu".parse::<StoreMode>().unwrap(), StoreMode::Menu);
        assert_eq!("Ordering".parse::<StoreMode>().unwrap(), StoreMode::Ordering);
        assert!("checkout".parse::<StoreMode>().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str(r#"mode = "ordering""#).unwrap();
        assert_eq!(config.mode, StoreMode::Ordering);
        assert_eq!(config.locale, "en");
        assert!(config.namespaced);
    }

    #[test]
    fn test_config_validation() {
        assert!(StoreConfig::default().validate().is_ok());

        let config = StoreConfig::default().with_locale("");
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());

        assert!(StoreConfig::default()
            .with_locale("en US")
            .validate()
            .is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("CAFE_STORE_LOCALE", "ru"),
            ("CAFE_STORE_MODE", "ordering"),
            ("CAFE_STORE_NAMESPACED", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(
            config,
            StoreConfig {
                locale: "ru".into(),
                mode: StoreMode::Ordering,
                namespaced: false,
            }
        );
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = StoreConfig::default();
        config.apply_overrides(|key| match key {
            "CAFE_STORE_MODE" => Some("kiosk".into()),
            "CAFE_STORE_NAMESPACED" => Some("maybe".into()),
            _ => None,
        });

        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_from_file() {
        let path = temp_path("store.toml");
        std::fs::write(&path, "locale = \"de\"\nnamespaced = false\n").unwrap();

        let config = StoreConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.locale, "de");
        assert_eq!(config.mode, StoreMode::Menu);
        assert!(!config.namespaced);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "locale = \n").unwrap();

        let err = StoreConfig::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, StoreError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let config = StoreConfig::default().with_mode(StoreMode::Ordering);
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("mode = \"ordering\""));
        assert!(toml_str.contains("locale = \"en\""));
    }
}
