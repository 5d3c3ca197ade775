// SPDX-License-Identifier: MPL-2.0
//! Flag of the active locale.

use crate::assets::{AssetResolver, FlagAsset};
use crate::locale::{LocaleStore, Subscription};
use crate::ui::design_tokens::sizing;
use crate::ui::styles::tooltip;
use iced::widget::tooltip::Position;
use iced::widget::{container, Svg};
use iced::{ContentFit, Element, Length};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub struct State {
    flag: Rc<Cell<&'static FlagAsset>>,
    _subscription: Subscription,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("flag::State")
            .field("flag", &self.flag.get().name())
            .finish()
    }
}

impl State {
    pub fn new(store: &LocaleStore, resolver: AssetResolver) -> Self {
        let flag = Rc::new(Cell::new(resolver.resolve(store.get())));

        let sink = Rc::clone(&flag);
        let subscription = store.subscribe(move |locale| sink.set(resolver.resolve(locale)));

        Self {
            flag,
            _subscription: subscription,
        }
    }

    /// Flag currently displayed.
    #[must_use]
    pub fn flag(&self) -> &'static FlagAsset {
        self.flag.get()
    }

    /// Renders the flag centered in its frame, with `alt` as its tooltip.
    pub fn view<'a, Message: 'a>(&self, alt: String) -> Element<'a, Message> {
        let image = Svg::new(self.flag().handle())
            .width(Length::Fixed(sizing::FLAG_WIDTH))
            .content_fit(ContentFit::Contain);

        container(tooltip::styled(image, alt, Position::Bottom))
            .center_x(Length::Fixed(sizing::FLAG_FRAME_WIDTH))
            .into()
    }
}
