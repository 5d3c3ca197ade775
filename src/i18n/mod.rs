// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Views never talk to Fluent directly: they ask a [`TranslationProvider`]
//! for a key in a given [`Locale`]. The provider owns its own fallback
//! policy; the Fluent implementation lives in [`fluent`].

pub mod fluent;

pub use fluent::FluentTranslations;

use crate::locale::Locale;

/// Resolves a text key to a localized string.
pub trait TranslationProvider {
    /// Returns the text for `key` in `locale`.
    ///
    /// Never fails: implementations return a fallback or placeholder string
    /// for keys they cannot resolve.
    fn translate(&self, locale: Locale, key: &str) -> String;
}
