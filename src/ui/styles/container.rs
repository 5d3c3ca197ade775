// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, shadow};
use iced::widget::container;
use iced::{Background, Theme};

/// Orange navigation bar, identical in light and dark themes.
pub fn navbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_ORANGE)),
        text_color: Some(palette::WHITE),
        shadow: shadow::SM,
        ..Default::default()
    }
}
