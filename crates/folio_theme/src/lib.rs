//! Folio Theme System
//!
//! The site has two visual modes. This crate owns the choice between them and
//! the fixed set of named tokens each mode maps to.
//!
//! # Overview
//!
//! - [`ThemeMode`]: `dark` (default) or `light`
//! - [`ThemeStore`]: resolves the mode from the persisted preference, then
//!   changes it only through [`ThemeStore::toggle`] / [`ThemeStore::set`]
//! - [`ThemeToken`] / [`ThemeTokens`]: the named colors and surfaces of one
//!   mode, with CSS variable output for hosts that style through a cascade
//!
//! # Quick Start
//!
//! ```rust
//! use folio_store::Preferences;
//! use folio_theme::{ThemeMode, ThemeStore, ThemeToken};
//!
//! let mut theme = ThemeStore::mount(Preferences::in_memory());
//! assert_eq!(theme.get(), ThemeMode::Dark);
//! assert_eq!(theme.tokens().get(ThemeToken::BgPrimary).to_css(), "#1a1a1a");
//!
//! theme.toggle();
//! assert_eq!(theme.get(), ThemeMode::Light);
//! assert_eq!(theme.tokens().get(ThemeToken::BgPrimary).to_css(), "#ffffff");
//! ```
//!
//! The store only holds the enum. Tokens are a pure function of the mode, so
//! a host can render them however its styling layer wants.

mod css;
mod error;
mod mode;
mod store;
pub mod tokens;

pub use error::UnknownThemeMode;
pub use mode::ThemeMode;
pub use store::{ThemeStore, THEME_STORAGE_KEY};
pub use tokens::{LinearGradient, Paint, ThemeToken, ThemeTokens};
