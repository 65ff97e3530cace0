//! Folio internationalization (i18n)
//!
//! - [`Locale`]: the closed set of site languages
//! - [`TranslationKey`]: the closed catalog of display-string identifiers
//! - [`Translations`]: per-locale tables with a never-failing lookup that
//!   echoes the key id when an entry is missing
//! - [`LocaleStore`]: resolves the active locale from the route, the persisted
//!   preference and the default, and keeps all three in step on `set`
//!
//! # Example
//!
//! ```rust
//! use folio_core::MemoryRouter;
//! use folio_i18n::{Locale, LocaleStore, TranslationKey, Translations};
//! use folio_store::Preferences;
//!
//! let translations = Translations::builtin();
//! let mut store = LocaleStore::mount(MemoryRouter::new("/bg"), Preferences::in_memory());
//! assert_eq!(store.get(), Locale::Bg);
//! assert_eq!(translations.t(store.get(), TranslationKey::NavHome), "Начало");
//!
//! store.set(Locale::En);
//! assert_eq!(store.router().path().as_str(), "/en");
//! ```

mod catalog;
mod error;
mod key;
mod locale;
mod store;
mod translations;

pub use catalog::Catalog;
pub use error::{CatalogError, UnknownLocale};
pub use key::TranslationKey;
pub use locale::Locale;
pub use store::{LocaleStore, LOCALE_STORAGE_KEY};
pub use translations::Translations;
