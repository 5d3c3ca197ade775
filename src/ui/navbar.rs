// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar holds the language selector on the right. When route syncing is
//! enabled it also shows the current route in an address field that can be
//! edited and submitted, which is how external navigation enters the app.

use crate::i18n::TranslationProvider;
use crate::locale::Locale;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::locale_selector;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub translations: &'a dyn TranslationProvider,
    pub locale: Locale,
    pub selector: &'a locale_selector::State,
    /// Text of the address field; `None` hides the field.
    pub route_input: Option<&'a str>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Selector(locale_selector::Message),
    RouteInputChanged(String),
    SubmitRoute,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Selector(locale_selector::Message),
    Navigate(String),
    Back,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, route_input: &mut String) -> Event {
    match message {
        Message::Selector(message) => Event::Selector(message),
        Message::RouteInputChanged(value) => {
            *route_input = value;
            Event::None
        }
        Message::SubmitRoute => {
            let path = route_input.trim();
            if path.is_empty() {
                Event::None
            } else {
                Event::Navigate(path.to_string())
            }
        }
        Message::Back => Event::Back,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tr = |key: &str| ctx.translations.translate(ctx.locale, key);

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center);

    if let Some(route) = ctx.route_input {
        let field = text_input(&tr("navbar-route-placeholder"), route)
            .on_input(Message::RouteInputChanged)
            .on_submit(Message::SubmitRoute)
            .size(typography::BODY)
            .padding(spacing::XXS)
            .width(Length::Fixed(sizing::ROUTE_INPUT_WIDTH));
        let go = button(Text::new(tr("navbar-route-go")).size(typography::BODY))
            .on_press(Message::SubmitRoute)
            .style(styles::button::on_brand);
        let back = button(Text::new("\u{2190}").size(typography::BODY))
            .on_press(Message::Back)
            .style(styles::button::on_brand);

        row = row
            .push(back)
            .push(Text::new(tr("navbar-route-label")).size(typography::BODY))
            .push(field)
            .push(go);
    }

    let selector = ctx
        .selector
        .view(tr("navbar-language-label"))
        .map(Message::Selector);

    row = row
        .push(Space::new().width(Length::Fill))
        .push(selector);

    Container::new(row)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}
