//! Active theme ownership

use folio_core::{ListenerId, Listeners};
use folio_store::Preferences;
use tracing::debug;

use crate::{ThemeMode, ThemeTokens};

/// Default persisted-preference key for the theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Owner of the active [`ThemeMode`].
///
/// Resolved once at mount from the persisted value; changed only through
/// [`ThemeStore::set`] and [`ThemeStore::toggle`], each of which persists the
/// new mode.
#[derive(Debug)]
pub struct ThemeStore {
    current: ThemeMode,
    prefs: Preferences,
    key: String,
    listeners: Listeners<ThemeMode>,
}

impl ThemeStore {
    /// Precedence: valid persisted value, then `dark`.
    pub fn resolve_initial(persisted: Option<&str>) -> ThemeMode {
        ThemeMode::resolve(persisted)
    }

    /// Resolve from the value persisted under [`THEME_STORAGE_KEY`].
    /// Mounting writes nothing.
    pub fn mount(prefs: Preferences) -> Self {
        Self::mount_with_key(prefs, THEME_STORAGE_KEY)
    }

    pub fn mount_with_key(prefs: Preferences, key: impl Into<String>) -> Self {
        let key = key.into();
        let persisted = prefs.read(&key);
        let current = Self::resolve_initial(persisted.as_deref());
        debug!(persisted = ?persisted, resolved = %current, "ThemeStore: mounted");
        Self {
            current,
            prefs,
            key,
            listeners: Listeners::new(),
        }
    }

    pub fn get(&self) -> ThemeMode {
        self.current
    }

    /// Token set of the current mode.
    pub fn tokens(&self) -> &'static ThemeTokens {
        ThemeTokens::for_mode(self.current)
    }

    pub fn set(&mut self, mode: ThemeMode) {
        let previous = self.current;
        self.current = mode;
        self.prefs.write(&self.key, mode.code());

        if previous != mode {
            debug!(from = %previous, to = %mode, "ThemeStore::set");
            self.listeners.notify(mode);
        }
    }

    /// Flip between dark and light. Two toggles restore the original mode.
    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }

    /// Call `f` with the new mode after each change.
    pub fn subscribe(&mut self, f: impl Fn(ThemeMode) + 'static) -> ListenerId {
        self.listeners.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_reads_persisted_mode_without_writing() {
        let prefs = Preferences::in_memory();
        let store = ThemeStore::mount(prefs.clone());
        assert_eq!(store.get(), ThemeMode::Dark);
        assert_eq!(prefs.read(THEME_STORAGE_KEY), None);

        prefs.write(THEME_STORAGE_KEY, "light");
        assert_eq!(ThemeStore::mount(prefs).get(), ThemeMode::Light);
    }

    #[test]
    fn tokens_follow_the_mode() {
        let mut store = ThemeStore::mount(Preferences::in_memory());
        assert_eq!(store.tokens(), ThemeTokens::for_mode(ThemeMode::Dark));
        store.toggle();
        assert_eq!(store.tokens(), ThemeTokens::for_mode(ThemeMode::Light));
    }
}
