// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared constants for the form, the alert stack and the confirmation modal.

- **Palette**: grays plus one accent per dialog variant
- **Opacity**: overlay and surface levels
- **Spacing**: 8px grid
- **Sizing**: fixed widths of cards and panels
- **Typography**: font size scale
- **Border**, **Radius**, **Shadow**: card outlines and elevation

```
use lead_dialogs::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Dimmed layer behind a modal
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let gap = spacing::MD; // 16px
```
"#]

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Focus ring of secondary buttons.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Variant accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const PURPLE_500: Color = Color::from_rgb(0.576, 0.341, 0.871);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Modal backdrop and disabled controls.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Panels drawn over the window background.
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const MODAL_WIDTH: f32 = 440.0;
    pub const FORM_WIDTH: f32 = 480.0;
}

pub mod typography {
    /// Form heading.
    pub const TITLE_MD: f32 = 20.0;
    /// Dialog and panel titles.
    pub const TITLE_SM: f32 = 18.0;
    /// Alert titles.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Field labels and compact buttons.
    pub const BODY_SM: f32 = 13.0;
}

pub mod border {
    /// Modal outline.
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Modal elevation.
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(sizing::TOAST_WIDTH < sizing::FORM_WIDTH);
};
