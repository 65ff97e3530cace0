//! Named visual tokens
//!
//! Every presentation surface of the site styles itself through this fixed
//! catalog. Each [`ThemeMode`] maps to one complete [`ThemeTokens`] set.

mod palette;

use folio_core::Color;

use crate::ThemeMode;

/// Semantic token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeToken {
    // Page surfaces
    BgPrimary,
    BgSecondary,

    // Text
    TextPrimary,
    TextSecondary,
    TextMuted,

    // Accent
    AccentGradient,

    // Cards
    CardBg,
    CardBorder,
    CardHover,

    // Navigation
    NavBg,

    // Tags and badges
    TagBg,
    TagColor,

    // Buttons
    ButtonText,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 13] = [
        ThemeToken::BgPrimary,
        ThemeToken::BgSecondary,
        ThemeToken::TextPrimary,
        ThemeToken::TextSecondary,
        ThemeToken::TextMuted,
        ThemeToken::AccentGradient,
        ThemeToken::CardBg,
        ThemeToken::CardBorder,
        ThemeToken::CardHover,
        ThemeToken::NavBg,
        ThemeToken::TagBg,
        ThemeToken::TagColor,
        ThemeToken::ButtonText,
    ];

    /// CSS custom property name, without the `--` prefix.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::BgPrimary => "bg-primary",
            Self::BgSecondary => "bg-secondary",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextMuted => "text-muted",
            Self::AccentGradient => "accent-gradient",
            Self::CardBg => "card-bg",
            Self::CardBorder => "card-border",
            Self::CardHover => "card-hover",
            Self::NavBg => "nav-bg",
            Self::TagBg => "tag-bg",
            Self::TagColor => "tag-color",
            Self::ButtonText => "button-text",
        }
    }
}

/// Two-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub angle_deg: f32,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    pub fn to_css(&self) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            self.angle_deg,
            self.from.to_css(),
            self.to.to_css()
        )
    }
}

/// Value of one token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(LinearGradient),
}

impl Paint {
    pub fn to_css(&self) -> String {
        match self {
            Paint::Solid(color) => color.to_css(),
            Paint::Gradient(gradient) => gradient.to_css(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

/// Complete token set of one mode
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeTokens {
    pub bg_primary: Color,
    pub bg_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_gradient: LinearGradient,

    pub card_bg: Color,
    pub card_border: Color,
    pub card_hover: Color,

    pub nav_bg: Color,

    pub tag_bg: Color,
    pub tag_color: Color,

    pub button_text: Color,
}

impl ThemeTokens {
    /// The fixed token set for `mode`.
    pub fn for_mode(mode: ThemeMode) -> &'static ThemeTokens {
        match mode {
            ThemeMode::Dark => &palette::DARK,
            ThemeMode::Light => &palette::LIGHT,
        }
    }

    /// Get a token value by key
    pub fn get(&self, token: ThemeToken) -> Paint {
        match token {
            ThemeToken::BgPrimary => self.bg_primary.into(),
            ThemeToken::BgSecondary => self.bg_secondary.into(),
            ThemeToken::TextPrimary => self.text_primary.into(),
            ThemeToken::TextSecondary => self.text_secondary.into(),
            ThemeToken::TextMuted => self.text_muted.into(),
            ThemeToken::AccentGradient => Paint::Gradient(self.accent_gradient),
            ThemeToken::CardBg => self.card_bg.into(),
            ThemeToken::CardBorder => self.card_border.into(),
            ThemeToken::CardHover => self.card_hover.into(),
            ThemeToken::NavBg => self.nav_bg.into(),
            ThemeToken::TagBg => self.tag_bg.into(),
            ThemeToken::TagColor => self.tag_color.into(),
            ThemeToken::ButtonText => self.button_text.into(),
        }
    }
}
