//! Active locale ownership
//!
//! The store resolves the locale once, at mount, and afterwards changes it
//! only through [`LocaleStore::set`]. Route and storage are written from the
//! store outward; inbound route changes after mount are not read back, so the
//! two can never chase each other.

use folio_core::{ListenerId, Listeners, Router};
use folio_store::Preferences;
use tracing::debug;

use crate::Locale;

/// Default persisted-preference key for the locale.
pub const LOCALE_STORAGE_KEY: &str = "language";

/// Owner of the active [`Locale`].
#[derive(Debug)]
pub struct LocaleStore<R> {
    current: Locale,
    router: R,
    prefs: Preferences,
    key: String,
    listeners: Listeners<Locale>,
}

impl<R: Router> LocaleStore<R> {
    /// Precedence: valid route param, then valid persisted value, then `en`.
    ///
    /// Same as [`Locale::resolve`]; kept here so the store's contract reads
    /// in one place.
    pub fn resolve_initial(route_param: Option<&str>, persisted: Option<&str>) -> Locale {
        Locale::resolve(route_param, persisted)
    }

    /// Resolve from the router's segment and the persisted value under
    /// [`LOCALE_STORAGE_KEY`]. Mounting writes nothing.
    pub fn mount(router: R, prefs: Preferences) -> Self {
        Self::mount_with_key(router, prefs, LOCALE_STORAGE_KEY)
    }

    /// [`LocaleStore::mount`] with a custom storage key.
    pub fn mount_with_key(router: R, prefs: Preferences, key: impl Into<String>) -> Self {
        let key = key.into();
        let route_param = router.locale_segment();
        let persisted = prefs.read(&key);
        let current = Self::resolve_initial(route_param.as_deref(), persisted.as_deref());
        debug!(
            route_param = ?route_param,
            persisted = ?persisted,
            resolved = %current,
            "LocaleStore: mounted"
        );
        Self {
            current,
            router,
            prefs,
            key,
            listeners: Listeners::new(),
        }
    }

    pub fn get(&self) -> Locale {
        self.current
    }

    /// Make `locale` active.
    ///
    /// In order: update memory, persist, rewrite the route segment with a
    /// history-replacing navigation unless it already reads `locale`, then
    /// notify listeners if the value changed.
    pub fn set(&mut self, locale: Locale) {
        let previous = self.current;
        self.current = locale;

        self.prefs.write(&self.key, locale.code());
        self.rewrite_route();

        if previous != locale {
            debug!(from = %previous, to = %locale, "LocaleStore::set");
            self.listeners.notify(locale);
        }
    }

    /// Switch to the other locale.
    pub fn toggle(&mut self) {
        self.set(self.current.other());
    }

    /// Repair a missing or unknown locale segment (`/` becomes `/en`).
    ///
    /// Only the route is touched. Returns whether a rewrite happened.
    pub fn canonicalize_route(&mut self) -> bool {
        self.rewrite_route()
    }

    fn rewrite_route(&mut self) -> bool {
        let target = self.current.code();
        let segment = self.router.locale_segment();
        if segment.as_deref() == Some(target) {
            return false;
        }
        debug!(from = ?segment, to = target, "LocaleStore: replacing route segment");
        self.router.replace_locale_segment(target);
        true
    }

    /// Call `f` with the new locale after each change.
    pub fn subscribe(&mut self, f: impl Fn(Locale) + 'static) -> ListenerId {
        self.listeners.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Mutable router access for host-driven navigation. The store does not
    /// re-read the segment afterwards.
    pub fn router_mut(&mut self) -> &mut R {
        &mut self.router
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }
}
