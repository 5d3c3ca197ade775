// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the navbar, greeting and flag.

## Organization

- **Palette**: Base and brand colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use flaglang::ui::design_tokens::{palette, spacing};

let bar = palette::BRAND_ORANGE;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Navigation bar background, rgb(253, 117, 19).
    pub const BRAND_ORANGE: Color = Color::from_rgb(253.0 / 255.0, 117.0 / 255.0, 19.0 / 255.0);
    pub const BRAND_ORANGE_DARK: Color = Color::from_rgb(0.82, 0.38, 0.05);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const NAVBAR_HEIGHT: f32 = 60.0;
    pub const SELECTOR_WIDTH: f32 = 140.0;
    pub const ROUTE_INPUT_WIDTH: f32 = 220.0;

    /// Frame the flag sits in.
    pub const FLAG_FRAME_WIDTH: f32 = 500.0;
    /// The flag takes half of its frame.
    pub const FLAG_WIDTH: f32 = FLAG_FRAME_WIDTH / 2.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Greeting headline
    pub const HEADLINE: f32 = 40.0;

    /// Standard body - labels, inputs
    pub const BODY: f32 = 14.0;

    /// Small body - tooltips
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::FLAG_WIDTH < sizing::FLAG_FRAME_WIDTH);
    assert!(typography::HEADLINE > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
};
