// SPDX-License-Identifier: MPL-2.0
//! Flag images bound to each supported locale.
//!
//! Flags are SVG files embedded at compile time via `include_bytes!`, one
//! per [`Locale`]. The table is indexed by the locale itself, so a lookup
//! can neither miss nor fail, and iced handles are cached with `OnceLock`
//! so each flag is handed to the renderer as the same handle on every frame.

use crate::locale::Locale;
use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// An embedded flag image.
#[derive(Debug)]
pub struct FlagAsset {
    locale: Locale,
    name: &'static str,
    data: &'static [u8],
    handle: OnceLock<Handle>,
}

impl FlagAsset {
    const fn new(locale: Locale, name: &'static str, data: &'static [u8]) -> Self {
        Self {
            locale,
            name,
            data,
            handle: OnceLock::new(),
        }
    }

    /// Locale this flag belongs to.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// File name of the embedded image (e.g. `es.svg`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw SVG bytes.
    #[must_use]
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Renderer handle, created on first use.
    pub fn handle(&self) -> Handle {
        self.handle
            .get_or_init(|| Handle::from_memory(self.data))
            .clone()
    }
}

/// Declares a flag entry backed by a file in `assets/flags/`.
macro_rules! flag {
    ($locale:expr, $filename:literal) => {
        FlagAsset::new(
            $locale,
            $filename,
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/flags/", $filename)),
        )
    };
}

/// Indexed by [`Locale::index`]; order must follow [`Locale::ALL`].
static FLAGS: [FlagAsset; 4] = [
    flag!(Locale::En, "en.svg"),
    flag!(Locale::El, "el.svg"),
    flag!(Locale::Es, "es.svg"),
    flag!(Locale::It, "it.svg"),
];

/// Maps locales to their flag images.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetResolver;

impl AssetResolver {
    /// Returns the flag of `locale`.
    #[must_use]
    pub fn resolve(self, locale: Locale) -> &'static FlagAsset {
        &FLAGS[locale.index()]
    }

    /// Returns the flag for a raw locale code; unknown codes get the `en` flag.
    #[must_use]
    pub fn resolve_code(self, code: &str) -> &'static FlagAsset {
        self.resolve(Locale::from_code_or_default(code))
    }
}
