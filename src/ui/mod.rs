// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern. The
//! greeting and the flag are passive: they subscribe to the locale store and
//! only expose a `view`.
//!
//! - [`navbar`] - Top bar with the route field and the language selector
//! - [`locale_selector`] - Language pick list
//! - [`greeting`] - Localized headline
//! - [`flag`] - Flag of the active language
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod flag;
pub mod greeting;
pub mod locale_selector;
pub mod navbar;
pub mod styles;
pub mod theming;
