// SPDX-License-Identifier: MPL-2.0
//! Application configuration read from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Startup language and theme mode
//! - `[routing]` - Whether the locale is mirrored into the route, and the
//!   route shown at startup
//!
//! The file is only ever read. Picking a language at runtime is not written
//! back, so every launch starts from the configured (or detected) locale.
//!
//! # Examples
//!
//! ```no_run
//! use flaglang::app::config;
//!
//! // Load the configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let sync = config.routing.sync_enabled();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Startup language code (e.g. "es", "el-GR"). Unknown codes are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Route synchronization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutingConfig {
    /// Mirror the selected locale into the route.
    #[serde(default = "default_sync", skip_serializing_if = "Option::is_none")]
    pub sync: Option<bool>,

    /// Route shown at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_path: Option<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            sync: default_sync(),
            initial_path: None,
        }
    }
}

impl RoutingConfig {
    #[must_use]
    pub fn sync_enabled(&self) -> bool {
        self.sync.unwrap_or(DEFAULT_ROUTE_SYNC)
    }

    #[must_use]
    pub fn initial_path(&self) -> &str {
        self.initial_path.as_deref().unwrap_or(DEFAULT_INITIAL_PATH)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub routing: RoutingConfig,
}

fn default_sync() -> Option<bool> {
    Some(DEFAULT_ROUTE_SYNC)
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "ignoring unreadable config");
            (
                Config::default(),
                Some(format!("{}: {}", path.display(), error)),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::paths::tests::env_lock;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_enables_route_sync_at_root() {
        let config = Config::default();
        assert!(config.routing.sync_enabled());
        assert_eq!(config.routing.initial_path(), "/");
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn load_from_path_reads_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[general]\nlanguage = \"el\"\ntheme_mode = \"dark\"\n\n[routing]\nsync = false\ninitial_path = \"/it/home\"\n",
        )
        .expect("write config");

        let config = load_from_path(&path).expect("valid config");

        assert_eq!(config.general.language.as_deref(), Some("el"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert!(!config.routing.sync_enabled());
        assert_eq!(config.routing.initial_path(), "/it/home");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"es\"\n").expect("write config");

        let config = load_from_path(&path).expect("valid config");

        assert_eq!(config.general.language.as_deref(), Some("es"));
        assert_eq!(config.routing, RoutingConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("write config");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("absent.toml");
        assert!(matches!(load_from_path(&path), Err(Error::Io(_))));
    }

    #[test]
    fn load_with_override_without_file_returns_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[routing]\nsync = \"maybe\"\n")
            .expect("write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_uses_env_config_dir() {
        let _lock = env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\nlanguage = \"it\"\n")
            .expect("write config");
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        let (config, _) = load();

        std::env::remove_var(paths::ENV_CONFIG_DIR);
        assert_eq!(config.general.language.as_deref(), Some("it"));
    }
}
