// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

/// Route syncing is on unless the config or CLI turns it off.
pub const DEFAULT_ROUTE_SYNC: bool = true;

/// Route shown at startup when none is configured.
pub const DEFAULT_INITIAL_PATH: &str = "/";
