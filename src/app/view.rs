// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout, top to bottom: navigation bar, greeting, flag.

use super::Message;
use crate::i18n::TranslationProvider;
use crate::locale::Locale;
use crate::ui::design_tokens::spacing;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::{flag, greeting, locale_selector};
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Space};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub translations: &'a dyn TranslationProvider,
    pub locale: Locale,
    pub selector: &'a locale_selector::State,
    pub greeting: &'a greeting::State,
    pub flag: &'a flag::State,
    pub route_input: Option<&'a str>,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        translations: ctx.translations,
        locale: ctx.locale,
        selector: ctx.selector,
        route_input: ctx.route_input,
    })
    .map(Message::Navbar);

    let flag_alt = ctx.translations.translate(ctx.locale, "flag-alt");

    let body = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .spacing(spacing::XL)
        .push(Space::new().height(Length::Fixed(spacing::XXL)))
        .push(ctx.greeting.view::<Message>())
        .push(ctx.flag.view::<Message>(flag_alt));

    Container::new(Column::new().push(navbar).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
