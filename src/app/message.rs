// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `es`, `el-GR`).
    pub lang: Option<String>,
    /// Optional startup route (e.g. `/it/welcome`).
    pub route: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLAGLANG_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Disables route syncing regardless of the config file.
    pub no_route_sync: bool,
}
