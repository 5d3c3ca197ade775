// SPDX-License-Identifier: MPL-2.0
//! `flaglang` is a small internationalized greeter built with the Iced GUI framework.
//!
//! A shared [`locale::LocaleStore`] holds the active language. The navbar
//! selector writes to it, while the greeting and the flag subscribe to it and
//! re-render with the matching Fluent message and SVG flag. The active
//! language can also be mirrored into an in-app route (`/es/...`) through
//! [`route::RouteSync`].

#![doc(html_root_url = "https://docs.rs/flaglang/0.1.0")]

pub mod app;
pub mod assets;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod route;
pub mod ui;
