use std::sync::Arc;

use folio_core::{ListenerId, Router};
use folio_i18n::{Locale, LocaleStore, TranslationKey, Translations};
use folio_store::Preferences;
use folio_theme::{ThemeMode, ThemeStore, ThemeTokens};
use tracing::{debug, info};

use crate::FolioConfig;

/// Sole owner of the active locale and theme.
///
/// Components never hold their own copy of either value. They read through a
/// [`Consumer`] snapshot and mutate only through the provider's methods.
#[derive(Debug)]
pub struct PortfolioProvider<R> {
    locale: LocaleStore<R>,
    theme: ThemeStore,
    translations: Arc<Translations>,
}

impl<R: Router> PortfolioProvider<R> {
    /// Mount both stores over shared preferences with the default keys and
    /// the built-in translations.
    pub fn mount(router: R, prefs: Preferences) -> Self {
        let locale = LocaleStore::mount(router, prefs.clone());
        let theme = ThemeStore::mount(prefs);
        Self::assemble(locale, theme, Translations::builtin())
    }

    /// Mount using the storage medium, keys and route policy from `config`.
    pub fn from_config(router: R, config: &FolioConfig) -> Self {
        let prefs = config.preferences();
        let locale =
            LocaleStore::mount_with_key(router, prefs.clone(), &config.storage.locale_key);
        let theme = ThemeStore::mount_with_key(prefs, &config.storage.theme_key);
        let mut provider = Self::assemble(locale, theme, Translations::builtin());

        if config.route.canonicalize_on_mount && provider.locale.canonicalize_route() {
            debug!(locale = %provider.locale.get(), "route canonicalized on mount");
        }
        provider
    }

    fn assemble(locale: LocaleStore<R>, theme: ThemeStore, translations: Arc<Translations>) -> Self {
        info!(locale = %locale.get(), theme = %theme.get(), "provider mounted");
        Self {
            locale,
            theme,
            translations,
        }
    }

    /// Swap the translation table, e.g. for catalogs loaded from disk.
    pub fn with_translations(mut self, translations: Arc<Translations>) -> Self {
        self.translations = translations;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        self.theme.tokens()
    }

    pub fn t(&self, key: TranslationKey) -> &str {
        self.translations.t(self.locale.get(), key)
    }

    pub fn t_id<'a>(&'a self, id: &'a str) -> &'a str {
        self.translations.t_id(self.locale.get(), id)
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale.set(locale);
    }

    pub fn toggle_locale(&mut self) {
        self.locale.toggle();
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme.set(mode);
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn subscribe_locale(&mut self, f: impl Fn(Locale) + 'static) -> ListenerId {
        self.locale.subscribe(f)
    }

    pub fn subscribe_theme(&mut self, f: impl Fn(ThemeMode) + 'static) -> ListenerId {
        self.theme.subscribe(f)
    }

    pub fn router(&self) -> &R {
        self.locale.router()
    }

    pub fn router_mut(&mut self) -> &mut R {
        self.locale.router_mut()
    }

    pub fn locale_store(&self) -> &LocaleStore<R> {
        &self.locale
    }

    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn translations(&self) -> &Arc<Translations> {
        &self.translations
    }

    /// Read-only view for presentation code.
    pub fn consumer(&self) -> Consumer<'_> {
        Consumer {
            locale: self.locale.get(),
            theme: self.theme.get(),
            translations: &self.translations,
        }
    }
}

/// Snapshot of the provider's state at the time it was taken.
///
/// Holding one borrows the provider, so no mutation can happen while a
/// consumer is alive.
#[derive(Clone, Copy, Debug)]
pub struct Consumer<'a> {
    locale: Locale,
    theme: ThemeMode,
    translations: &'a Translations,
}

impl<'a> Consumer<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn tokens(&self) -> &'static ThemeTokens {
        ThemeTokens::for_mode(self.theme)
    }

    pub fn t(&self, key: TranslationKey) -> &'a str {
        self.translations.t(self.locale, key)
    }

    pub fn t_id(&self, id: &'a str) -> &'a str {
        self.translations.t_id(self.locale, id)
    }
}
