// SPDX-License-Identifier: MPL-2.0
//! Mirrors the active locale into the navigable path and back.
//!
//! Paths carry the locale as their first segment (`/es/welcome`). When the
//! user picks a language, [`RouteSync::navigate_to_locale`] rewrites that
//! segment and hands the new path to the [`Router`]. When the path changes
//! from the outside, [`RouteSync::on_external_navigation`] pushes a
//! recognized segment into the [`LocaleStore`] and ignores anything else.
//!
//! A navigation echoed back for the locale that is already active ends in a
//! no-op `set` on the store, so the two directions cannot ping-pong.

use crate::locale::{Locale, LocaleStore};

/// Path collaborator: knows the current path and can move to a new one.
pub trait Router {
    /// Path currently displayed, always starting with `/`.
    fn current_path(&self) -> String;

    /// Moves to `path`.
    fn navigate(&mut self, path: &str);
}

/// Entries kept by [`MemoryRouter`]; the oldest one goes first.
pub const MAX_HISTORY: usize = 64;

/// In-memory router with a bounded back stack.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryRouter {
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        Self {
            history: vec![normalize(initial_path)],
        }
    }

    /// Returns to the previous path. Returns the path now displayed, or
    /// `None` when already at the first entry.
    pub fn back(&mut self) -> Option<String> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        self.history.last().cloned()
    }

    /// Number of entries in the history, current one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.history.last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&mut self, path: &str) {
        let path = normalize(path);
        if self.history.last() != Some(&path) {
            self.history.push(path);
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }
    }
}

/// Keeps a [`LocaleStore`] and a [`Router`] in agreement.
#[derive(Debug)]
pub struct RouteSync<R = MemoryRouter> {
    store: LocaleStore,
    router: R,
}

impl<R: Router> RouteSync<R> {
    pub fn new(store: LocaleStore, router: R) -> Self {
        Self { store, router }
    }

    /// Rewrites the locale segment of the current path and navigates there.
    pub fn navigate_to_locale(&mut self, locale: Locale) {
        let current = self.router.current_path();
        let target = path_with_locale(&current, locale);
        if target != current {
            tracing::debug!(from = %current, to = %target, "syncing route with locale");
            self.router.navigate(&target);
        }
    }

    /// Applies a path the user or the platform navigated to.
    ///
    /// Recognized locale segments update the store; anything else leaves it
    /// untouched. Returns the locale that was applied, if any.
    pub fn on_external_navigation(&mut self, path: &str) -> Option<Locale> {
        self.router.navigate(path);
        self.apply_path(path)
    }

    fn apply_path(&self, path: &str) -> Option<Locale> {
        match locale_from_path(path) {
            Some(locale) => {
                self.store.set(locale);
                Some(locale)
            }
            None => {
                tracing::debug!(path, "no locale segment in path, keeping current locale");
                None
            }
        }
    }

    /// Path currently shown by the router.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.router.current_path()
    }

    #[must_use]
    pub fn router(&self) -> &R {
        &self.router
    }
}

impl RouteSync<MemoryRouter> {
    /// Steps back in the router history and applies the path found there.
    ///
    /// Returns `None` when there is no previous entry or when that entry
    /// carries no locale segment.
    pub fn go_back(&mut self) -> Option<Locale> {
        let path = self.router.back()?;
        self.apply_path(&path)
    }
}

/// Extracts the locale from the first path segment.
#[must_use]
pub fn locale_from_path(path: &str) -> Option<Locale> {
    first_segment(path).and_then(exact_locale)
}

/// Returns `path` with its locale segment set to `locale`.
///
/// An existing locale segment is replaced; otherwise one is prepended.
/// Query strings and fragments are kept as they are.
#[must_use]
pub fn path_with_locale(path: &str, locale: Locale) -> String {
    let normalized = normalize(path);
    let split_at = normalized.find(['?', '#']).unwrap_or(normalized.len());
    let (route, suffix) = normalized.split_at(split_at);

    let segments: Vec<&str> = route.split('/').filter(|s| !s.is_empty()).collect();
    let rest = match segments.split_first() {
        Some((first, rest)) if exact_locale(first).is_some() => rest,
        _ => &segments[..],
    };

    let mut result = format!("/{}", locale.code());
    for segment in rest {
        result.push('/');
        result.push_str(segment);
    }
    result.push_str(suffix);
    result
}

fn first_segment(path: &str) -> Option<&str> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .find(|segment| !segment.is_empty())
}

/// Route segments must be the bare code; `es-ES` is not a locale segment.
fn exact_locale(segment: &str) -> Option<Locale> {
    Locale::ALL
        .into_iter()
        .find(|locale| locale.code().eq_ignore_ascii_case(segment))
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(store: &LocaleStore) -> (Rc<Cell<usize>>, crate::locale::Subscription) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let subscription = store.subscribe(move |_| counter.set(counter.get() + 1));
        (count, subscription)
    }

    #[test]
    fn locale_from_path_reads_first_segment() {
        assert_eq!(locale_from_path("/it/anything"), Some(Locale::It));
        assert_eq!(locale_from_path("/el"), Some(Locale::El));
        assert_eq!(locale_from_path("es/x"), Some(Locale::Es));
        assert_eq!(locale_from_path("/ES?x=1"), Some(Locale::Es));
    }

    #[test]
    fn locale_from_path_ignores_other_segments() {
        assert_eq!(locale_from_path("/"), None);
        assert_eq!(locale_from_path(""), None);
        assert_eq!(locale_from_path("/xx/it"), None);
        assert_eq!(locale_from_path("/es-ES/home"), None);
    }

    #[test]
    fn path_with_locale_replaces_or_prepends() {
        assert_eq!(path_with_locale("/", Locale::Es), "/es");
        assert_eq!(path_with_locale("/it/anything", Locale::Es), "/es/anything");
        assert_eq!(path_with_locale("/about", Locale::El), "/el/about");
        assert_eq!(path_with_locale("en/a/b/", Locale::It), "/it/a/b");
        assert_eq!(path_with_locale("/en/page?q=1#top", Locale::Es), "/es/page?q=1#top");
    }

    #[test]
    fn navigate_then_parse_round_trips() {
        for locale in Locale::ALL {
            let store = LocaleStore::default();
            let mut sync = RouteSync::new(store, MemoryRouter::new("/it/anything"));
            sync.navigate_to_locale(locale);
            assert_eq!(locale_from_path(&sync.current_path()), Some(locale));
        }
    }

    #[test]
    fn navigate_to_active_path_does_not_grow_history() {
        let mut sync = RouteSync::new(LocaleStore::default(), MemoryRouter::new("/en"));
        sync.navigate_to_locale(Locale::En);
        assert_eq!(sync.router().depth(), 1);
    }

    #[test]
    fn external_navigation_sets_store() {
        let store = LocaleStore::default();
        let mut sync = RouteSync::new(store.clone(), MemoryRouter::default());

        assert_eq!(sync.on_external_navigation("/it/anything"), Some(Locale::It));
        assert_eq!(store.get(), Locale::It);
        assert_eq!(sync.current_path(), "/it/anything");
    }

    #[test]
    fn unrecognized_segment_leaves_store_alone() {
        let store = LocaleStore::new(Locale::El);
        let (count, _subscription) = counting(&store);
        let mut sync = RouteSync::new(store.clone(), MemoryRouter::default());

        assert_eq!(sync.on_external_navigation("/xx/page"), None);
        assert_eq!(store.get(), Locale::El);
        assert_eq!(count.get(), 0);
    }

    /// Router that reports every navigation back as an external one.
    struct EchoRouter {
        path: String,
        echoes: Rc<Cell<usize>>,
        store: LocaleStore,
    }

    impl Router for EchoRouter {
        fn current_path(&self) -> String {
            self.path.clone()
        }

        fn navigate(&mut self, path: &str) {
            self.path = path.to_string();
            self.echoes.set(self.echoes.get() + 1);
            if let Some(locale) = locale_from_path(path) {
                self.store.set(locale);
            }
        }
    }

    #[test]
    fn echoed_navigation_does_not_loop() {
        let store = LocaleStore::default();
        let (count, _subscription) = counting(&store);
        let echoes = Rc::new(Cell::new(0));
        let router = EchoRouter {
            path: "/en".to_string(),
            echoes: Rc::clone(&echoes),
            store: store.clone(),
        };
        let mut sync = RouteSync::new(store.clone(), router);

        store.set(Locale::Es);
        sync.navigate_to_locale(Locale::Es);

        assert_eq!(count.get(), 1);
        assert_eq!(echoes.get(), 1);
        assert_eq!(sync.current_path(), "/es");
    }

    #[test]
    fn memory_router_back_walks_history() {
        let mut router = MemoryRouter::new("home");
        assert_eq!(router.current_path(), "/home");

        router.navigate("/es/home");
        router.navigate("/it/home");
        assert_eq!(router.back(), Some("/es/home".to_string()));
        assert_eq!(router.back(), Some("/home".to_string()));
        assert_eq!(router.back(), None);
    }

    #[test]
    fn memory_router_history_is_bounded() {
        let mut router = MemoryRouter::new("/");
        for i in 0..MAX_HISTORY + 10 {
            router.navigate(&format!("/page/{i}"));
        }

        assert_eq!(router.depth(), MAX_HISTORY);
        assert_eq!(router.current_path(), format!("/page/{}", MAX_HISTORY + 9));

        while router.back().is_some() {}
        assert_eq!(router.current_path(), "/page/10");
    }

    #[test]
    fn go_back_restores_previous_locale() {
        let store = LocaleStore::default();
        let mut sync = RouteSync::new(store.clone(), MemoryRouter::new("/en/home"));

        sync.on_external_navigation("/es/home");
        assert_eq!(store.get(), Locale::Es);

        assert_eq!(sync.go_back(), Some(Locale::En));
        assert_eq!(store.get(), Locale::En);
        assert_eq!(sync.current_path(), "/en/home");
        assert_eq!(sync.go_back(), None);
    }
}
