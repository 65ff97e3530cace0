//! Folio application layer
//!
//! Wires the preference stores and the translation table into one
//! [`PortfolioProvider`], the single owner of the active locale and theme.
//! Presentation code receives a read-only [`Consumer`] from it.
//!
//! # Example
//!
//! ```rust
//! use folio_app::{FolioConfig, PortfolioProvider};
//! use folio_core::MemoryRouter;
//! use folio_i18n::{Locale, TranslationKey};
//! use folio_theme::ThemeMode;
//!
//! let config = FolioConfig::default();
//! let mut app = PortfolioProvider::from_config(MemoryRouter::new("/bg"), &config);
//!
//! let ui = app.consumer();
//! assert_eq!(ui.locale(), Locale::Bg);
//! assert_eq!(ui.theme(), ThemeMode::Dark);
//! assert_eq!(ui.t(TranslationKey::NavContact), "Контакти");
//!
//! app.set_locale(Locale::En);
//! app.toggle_theme();
//! assert_eq!(app.consumer().t(TranslationKey::NavContact), "Contact");
//! ```

mod config;
mod error;
mod logging;
mod provider;

pub use config::{FolioConfig, LogConfig, RouteConfig, StorageConfig};
pub use error::ConfigError;
pub use logging::init_tracing;
pub use provider::{Consumer, PortfolioProvider};
