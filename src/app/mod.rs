// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the locale store and the views.
//!
//! The `App` struct owns the [`LocaleStore`] and hands clones of it to the
//! selector, the greeting and the flag. Messages from the navbar are turned
//! into store writes (language picked) or route changes (address submitted,
//! back pressed); the views refresh themselves through their subscriptions.

pub mod config;
mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::assets::AssetResolver;
use crate::i18n::{FluentTranslations, TranslationProvider};
use crate::locale::{self, Locale, LocaleStore};
use crate::route::{self as routing, MemoryRouter, RouteSync};
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use crate::ui::{flag, greeting, locale_selector};
use config::Config;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::rc::Rc;

/// Root Iced application state.
pub struct App {
    translations: Rc<FluentTranslations>,
    store: LocaleStore,
    selector: locale_selector::State,
    greeting: greeting::State,
    flag: flag::State,
    /// Contents of the address field, kept in step with the router.
    route_input: String,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.store.get())
            .field("route", &self.current_route())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the config file and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!(%warning, "falling back to default settings");
        }
        (Self::from_config(flags, &config), Task::none())
    }

    /// Builds the initial state from already loaded settings.
    pub fn from_config(flags: Flags, config: &Config) -> Self {
        let route_sync = !flags.no_route_sync && config.routing.sync_enabled();
        let initial_path = flags
            .route
            .clone()
            .unwrap_or_else(|| config.routing.initial_path().to_string());

        let route_hint = route_sync
            .then(|| routing::locale_from_path(&initial_path))
            .flatten();
        let initial = locale::detect([
            flags.lang.as_deref(),
            route_hint.map(Locale::code),
            config.general.language.as_deref(),
        ]);
        tracing::info!(locale = %initial, route_sync, "starting");

        let store = LocaleStore::new(initial);
        let translations = Rc::new(FluentTranslations::new());
        let provider: Rc<dyn TranslationProvider> = translations.clone();

        let route = route_sync.then(|| {
            let mut route = RouteSync::new(store.clone(), MemoryRouter::new(&initial_path));
            route.navigate_to_locale(initial);
            route
        });

        let mut app = Self {
            greeting: greeting::State::new(&store, provider),
            flag: flag::State::new(&store, AssetResolver),
            selector: locale_selector::State::new(store.clone(), route),
            store,
            translations,
            route_input: String::new(),
            theme_mode: config.general.theme_mode,
        };
        app.sync_route_input();
        app
    }

    /// Active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.store.get()
    }

    /// Route shown by the router, if route syncing is enabled.
    #[must_use]
    pub fn current_route(&self) -> Option<String> {
        self.selector.route().map(RouteSync::current_path)
    }

    #[must_use]
    pub fn greeting(&self) -> &greeting::State {
        &self.greeting
    }

    #[must_use]
    pub fn flag(&self) -> &flag::State {
        &self.flag
    }

    fn title(&self) -> String {
        self.translations.translate(self.store.get(), "window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => match navbar::update(message, &mut self.route_input) {
                navbar::Event::None => {}
                navbar::Event::Selector(message) => {
                    if let locale_selector::Event::LocaleChanged(_) = self.selector.update(message) {
                        self.sync_route_input();
                    }
                }
                navbar::Event::Navigate(path) => {
                    if let Some(route) = self.selector.route_mut() {
                        route.on_external_navigation(&path);
                    }
                    self.sync_route_input();
                }
                navbar::Event::Back => {
                    if let Some(route) = self.selector.route_mut() {
                        route.go_back();
                    }
                    self.sync_route_input();
                }
            },
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            translations: self.translations.as_ref(),
            locale: self.store.get(),
            selector: &self.selector,
            greeting: &self.greeting,
            flag: &self.flag,
            route_input: self
                .selector
                .route()
                .map(|_| self.route_input.as_str()),
        })
    }

    fn sync_route_input(&mut self) {
        if let Some(path) = self.current_route() {
            self.route_input = path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{GeneralConfig, RoutingConfig};
    use crate::ui::locale_selector::Message as SelectorMessage;

    fn flags_with_lang(lang: &str) -> Flags {
        Flags {
            lang: Some(lang.to_string()),
            ..Flags::default()
        }
    }

    fn select(app: &mut App, locale: Locale) {
        let _ = app.update(Message::Navbar(navbar::Message::Selector(
            SelectorMessage::Selected(locale),
        )));
    }

    fn submit_route(app: &mut App, path: &str) {
        let _ = app.update(Message::Navbar(navbar::Message::RouteInputChanged(
            path.to_string(),
        )));
        let _ = app.update(Message::Navbar(navbar::Message::SubmitRoute));
    }

    #[test]
    fn cli_language_wins_and_route_is_mirrored() {
        let app = App::from_config(flags_with_lang("es"), &Config::default());

        assert_eq!(app.locale(), Locale::Es);
        assert_eq!(app.current_route().as_deref(), Some("/es"));
        assert_eq!(app.route_input, "/es");
    }

    #[test]
    fn route_locale_beats_config_language() {
        let flags = Flags {
            route: Some("/it/anything".to_string()),
            ..Flags::default()
        };
        let config = Config {
            general: GeneralConfig {
                language: Some("el".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };

        let app = App::from_config(flags, &config);

        assert_eq!(app.locale(), Locale::It);
        assert_eq!(app.current_route().as_deref(), Some("/it/anything"));
    }

    #[test]
    fn config_language_used_when_route_has_no_locale() {
        let config = Config {
            general: GeneralConfig {
                language: Some("el-GR".to_string()),
                ..GeneralConfig::default()
            },
            routing: RoutingConfig {
                sync: Some(true),
                initial_path: Some("/welcome".to_string()),
            },
        };

        let app = App::from_config(Flags::default(), &config);

        assert_eq!(app.locale(), Locale::El);
        assert_eq!(app.current_route().as_deref(), Some("/el/welcome"));
    }

    #[test]
    fn disabling_route_sync_hides_route() {
        let flags = Flags {
            no_route_sync: true,
            route: Some("/it".to_string()),
            ..flags_with_lang("en")
        };

        let mut app = App::from_config(flags, &Config::default());
        assert_eq!(app.current_route(), None);

        select(&mut app, Locale::Es);
        assert_eq!(app.locale(), Locale::Es);
        assert_eq!(app.current_route(), None);
    }

    #[test]
    fn selecting_language_updates_views_and_route() {
        let mut app = App::from_config(flags_with_lang("en"), &Config::default());

        select(&mut app, Locale::Es);

        assert_eq!(app.locale(), Locale::Es);
        assert_eq!(app.greeting().title(), "¡Hola, mundo!");
        assert_eq!(app.flag().flag().locale(), Locale::Es);
        assert_eq!(app.current_route().as_deref(), Some("/es"));
        assert_eq!(app.route_input, "/es");
    }

    #[test]
    fn submitted_route_changes_locale() {
        let mut app = App::from_config(flags_with_lang("en"), &Config::default());

        submit_route(&mut app, "/it/anything");

        assert_eq!(app.locale(), Locale::It);
        assert_eq!(app.greeting().title(), "Ciao, mondo!");
        assert_eq!(app.current_route().as_deref(), Some("/it/anything"));
    }

    #[test]
    fn unrecognized_route_keeps_locale() {
        let mut app = App::from_config(flags_with_lang("el"), &Config::default());

        submit_route(&mut app, "/xx/page");

        assert_eq!(app.locale(), Locale::El);
        assert_eq!(app.current_route().as_deref(), Some("/xx/page"));
    }

    #[test]
    fn back_restores_previous_locale() {
        let mut app = App::from_config(flags_with_lang("en"), &Config::default());
        select(&mut app, Locale::It);

        let _ = app.update(Message::Navbar(navbar::Message::Back));

        assert_eq!(app.locale(), Locale::En);
        assert_eq!(app.route_input, "/en");
    }

    #[test]
    fn title_and_theme_follow_state() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Dark,
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let app = App::from_config(flags_with_lang("en"), &config);

        assert_eq!(app.title(), "Flaglang");
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn view_renders_without_panicking() {
        let app = App::from_config(flags_with_lang("el"), &Config::default());
        let _element = app.view();
    }
}
