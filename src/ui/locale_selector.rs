// SPDX-License-Identifier: MPL-2.0
//! Language drop-down bound to the locale store.
//!
//! Picking a language writes the store first. When route syncing is
//! configured, the route is rewritten afterwards, so the store stays the
//! single source of truth whether a change starts here or in the path.

use crate::locale::{Locale, LocaleStore};
use crate::route::RouteSync;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{pick_list, Row, Text};
use iced::{Element, Length};
use std::fmt;

/// Entry of the drop-down, labelled with the language's own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption(pub Locale);

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.endonym())
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Selected(Locale),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LocaleChanged(Locale),
}

#[derive(Debug)]
pub struct State {
    store: LocaleStore,
    route: Option<RouteSync>,
}

impl State {
    pub fn new(store: LocaleStore, route: Option<RouteSync>) -> Self {
        Self { store, route }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Selected(locale) => {
                if self.on_user_select(locale) {
                    Event::LocaleChanged(locale)
                } else {
                    Event::None
                }
            }
        }
    }

    /// Applies a language picked by the user. Returns `true` if it changed.
    pub fn on_user_select(&mut self, chosen: Locale) -> bool {
        if chosen == self.store.get() {
            return false;
        }

        self.store.set(chosen);
        if let Some(route) = self.route.as_mut() {
            route.navigate_to_locale(chosen);
        }
        true
    }

    /// Currently selected locale.
    #[must_use]
    pub fn selected(&self) -> Locale {
        self.store.get()
    }

    #[must_use]
    pub fn route(&self) -> Option<&RouteSync> {
        self.route.as_ref()
    }

    pub fn route_mut(&mut self) -> Option<&mut RouteSync> {
        self.route.as_mut()
    }

    pub fn view<'a>(&self, label: String) -> Element<'a, Message> {
        let options: Vec<LanguageOption> = Locale::ALL.into_iter().map(LanguageOption).collect();

        let picker = pick_list(options, Some(LanguageOption(self.selected())), |option| {
            Message::Selected(option.0)
        })
        .text_size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SELECTOR_WIDTH));

        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(label).size(typography::BODY))
            .push(picker)
            .into()
    }
}
