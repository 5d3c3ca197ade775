// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// White outlined button sitting on the orange navbar.
pub fn on_brand(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::WHITE, palette::BRAND_ORANGE_DARK)
        }
        button::Status::Active => (palette::BRAND_ORANGE, palette::WHITE),
        button::Status::Disabled => (palette::BRAND_ORANGE, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::WHITE,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
