// SPDX-License-Identifier: MPL-2.0
//! Supported locales and the process-wide locale state.
//!
//! The set of locales is closed: every code that reaches the application
//! from the outside (CLI, config file, OS settings, route path) is mapped
//! onto [`Locale`] at the boundary. Codes outside the set never produce an
//! error; callers either get `None` from [`Locale::from_code`] or the
//! default locale from [`Locale::from_code_or_default`].

pub mod store;

pub use store::{LocaleStore, Subscription};

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A language the interface can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    El,
    Es,
    It,
}

impl Locale {
    /// Locale used whenever nothing better is known.
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale, in the order the selector lists them.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::El, Locale::Es, Locale::It];

    /// Lowercase ISO 639-1 code, also used as the route segment.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::El => "el",
            Locale::Es => "es",
            Locale::It => "it",
        }
    }

    /// Name of the language in the language itself.
    #[must_use]
    pub fn endonym(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::El => "Ελληνικά",
            Locale::Es => "Español",
            Locale::It => "Italiano",
        }
    }

    /// Position of the locale in [`Locale::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a language tag such as `es`, `IT` or `el-GR`.
    ///
    /// Only the primary language subtag is considered, so region or script
    /// qualified tags map onto the plain locale.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        // POSIX style values like `es_ES.UTF-8` carry an encoding suffix
        let tag = code.split('.').next().unwrap_or(code).replace('_', "-");
        let langid = tag.parse::<LanguageIdentifier>().ok()?;

        match langid.language.as_str() {
            "en" => Some(Locale::En),
            "el" => Some(Locale::El),
            "es" => Some(Locale::Es),
            "it" => Some(Locale::It),
            _ => None,
        }
    }

    /// Like [`Locale::from_code`] but falls back to [`Locale::DEFAULT`].
    #[must_use]
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or(Self::DEFAULT)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Picks the startup locale from the available hints, highest priority first.
///
/// Unrecognized hints are skipped. If none of them match, the OS locale is
/// consulted, and `en` is used as the last resort.
pub fn detect<'a>(hints: impl IntoIterator<Item = Option<&'a str>>) -> Locale {
    detect_with_system(hints, sys_locale::get_locale())
}

fn detect_with_system<'a>(
    hints: impl IntoIterator<Item = Option<&'a str>>,
    system: Option<String>,
) -> Locale {
    hints
        .into_iter()
        .flatten()
        .find_map(Locale::from_code)
        .or_else(|| system.as_deref().and_then(Locale::from_code))
        .unwrap_or(Locale::DEFAULT)
}
