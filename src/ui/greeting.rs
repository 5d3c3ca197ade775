// SPDX-License-Identifier: MPL-2.0
//! Localized greeting shown below the navigation bar.
//!
//! The greeting keeps the translated title it last rendered and refreshes
//! it only when the locale store reports a change.

use crate::i18n::TranslationProvider;
use crate::locale::{LocaleStore, Subscription};
use crate::ui::design_tokens::typography;
use iced::widget::Text;
use iced::Element;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Translation key of the greeting headline.
pub const TITLE_KEY: &str = "intro.title";

pub struct State {
    title: Rc<RefCell<String>>,
    _subscription: Subscription,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("greeting::State")
            .field("title", &*self.title.borrow())
            .finish()
    }
}

impl State {
    pub fn new(store: &LocaleStore, translations: Rc<dyn TranslationProvider>) -> Self {
        let title = Rc::new(RefCell::new(
            translations.translate(store.get(), TITLE_KEY),
        ));

        let sink = Rc::clone(&title);
        let subscription = store.subscribe(move |locale| {
            *sink.borrow_mut() = translations.translate(locale, TITLE_KEY);
        });

        Self {
            title,
            _subscription: subscription,
        }
    }

    /// Text currently displayed.
    #[must_use]
    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        Text::new(self.title()).size(typography::HEADLINE).into()
    }
}
