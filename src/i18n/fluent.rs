// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed translations loaded from the embedded `assets/i18n/` folder.
//!
//! Keys follow the `message` or `message.attribute` form, so `intro.title`
//! reads the `title` attribute of the `intro` message:
//!
//! ```ftl
//! intro =
//!     .title = Hello, world!
//! ```
//!
//! Lookups fall back to English, then to a `MISSING: <key>` placeholder.

use super::TranslationProvider;
use crate::locale::Locale;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Prefix of the placeholder returned for unresolvable keys.
pub const MISSING_PREFIX: &str = "MISSING: ";

/// Fluent bundles for every supported locale that ships a `.ftl` file.
pub struct FluentTranslations {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl fmt::Debug for FluentTranslations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut locales: Vec<_> = self.bundles.keys().map(|locale| locale.code()).collect();
        locales.sort_unstable();
        f.debug_struct("FluentTranslations")
            .field("locales", &locales)
            .finish()
    }
}

impl Default for FluentTranslations {
    fn default() -> Self {
        Self::new()
    }
}

impl FluentTranslations {
    /// Loads the embedded translation files.
    #[must_use]
    pub fn new() -> Self {
        let mut bundles = HashMap::new();

        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.code());
            let Some(file) = Asset::get(&filename) else {
                tracing::warn!(%locale, "no translation file embedded");
                continue;
            };
            let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
            bundles.insert(locale, build_bundle(locale, source));
        }

        Self { bundles }
    }

    /// Builds translations from in-memory FTL sources.
    #[must_use]
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (Locale, S)>,
        S: Into<String>,
    {
        let bundles = sources
            .into_iter()
            .map(|(locale, source)| (locale, build_bundle(locale, source.into())))
            .collect();
        Self { bundles }
    }

    /// Whether a bundle is loaded for `locale`.
    #[must_use]
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.bundles.contains_key(&locale)
    }

    /// Looks up `key` in the bundle of `locale` only, without fallback.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let (id, attribute) = match key.split_once('.') {
            Some((id, attribute)) => (id, Some(attribute)),
            None => (key, None),
        };

        let message = bundle.get_message(id)?;
        let pattern = match attribute {
            Some(name) => message.get_attribute(name)?.value(),
            None => message.value()?,
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::warn!(%locale, key, ?errors, "failed to format message");
            None
        }
    }
}

impl TranslationProvider for FluentTranslations {
    fn translate(&self, locale: Locale, key: &str) -> String {
        self.lookup(locale, key)
            .or_else(|| {
                (locale != Locale::DEFAULT)
                    .then(|| self.lookup(Locale::DEFAULT, key))
                    .flatten()
            })
            .unwrap_or_else(|| format!("{MISSING_PREFIX}{key}"))
    }
}

fn build_bundle(locale: Locale, source: String) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(%locale, ?errors, "translation file has syntax errors");
        partial
    });

    let langid: LanguageIdentifier = locale.code().parse().unwrap_or_default();
    let mut bundle = FluentBundle::new(vec![langid]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, ?errors, "duplicate messages in translation file");
    }
    bundle
}
