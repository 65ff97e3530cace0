//! Site palettes.
//!
//! Dark is the base look; light overrides every token.

use folio_core::Color;

use super::{LinearGradient, ThemeTokens};

pub(super) static DARK: ThemeTokens = ThemeTokens {
    bg_primary: Color::rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0),
    bg_secondary: Color::rgb(45.0 / 255.0, 45.0 / 255.0, 45.0 / 255.0),
    text_primary: Color::WHITE,
    text_secondary: Color::rgb(204.0 / 255.0, 204.0 / 255.0, 204.0 / 255.0),
    text_muted: Color::rgb(153.0 / 255.0, 153.0 / 255.0, 153.0 / 255.0),
    accent_gradient: LinearGradient {
        angle_deg: 45.0,
        from: Color::rgb(0.0, 1.0, 135.0 / 255.0),
        to: Color::rgb(96.0 / 255.0, 239.0 / 255.0, 1.0),
    },
    card_bg: Color::rgba(1.0, 1.0, 1.0, 0.05),
    card_border: Color::rgba(1.0, 1.0, 1.0, 0.1),
    card_hover: Color::rgba(1.0, 1.0, 1.0, 0.1),
    nav_bg: Color::rgba(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0, 0.95),
    tag_bg: Color::rgba(0.0, 1.0, 135.0 / 255.0, 0.1),
    tag_color: Color::rgb(0.0, 1.0, 135.0 / 255.0),
    button_text: Color::rgb(26.0 / 255.0, 26.0 / 255.0, 26.0 / 255.0),
};

pub(super) static LIGHT: ThemeTokens = ThemeTokens {
    bg_primary: Color::WHITE,
    bg_secondary: Color::rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0),
    text_primary: Color::rgb(45.0 / 255.0, 45.0 / 255.0, 45.0 / 255.0),
    text_secondary: Color::rgb(74.0 / 255.0, 74.0 / 255.0, 74.0 / 255.0),
    text_muted: Color::rgb(102.0 / 255.0, 102.0 / 255.0, 102.0 / 255.0),
    accent_gradient: LinearGradient {
        angle_deg: 45.0,
        from: Color::rgb(0.0, 184.0 / 255.0, 95.0 / 255.0),
        to: Color::rgb(0.0, 153.0 / 255.0, 1.0),
    },
    card_bg: Color::rgba(0.0, 0.0, 0.0, 0.02),
    card_border: Color::rgba(0.0, 0.0, 0.0, 0.1),
    card_hover: Color::rgba(0.0, 0.0, 0.0, 0.05),
    nav_bg: Color::rgba(1.0, 1.0, 1.0, 0.95),
    tag_bg: Color::rgba(0.0, 184.0 / 255.0, 95.0 / 255.0, 0.1),
    tag_color: Color::rgb(0.0, 136.0 / 255.0, 77.0 / 255.0),
    button_text: Color::WHITE,
};
