use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use folio_core::{MemoryRouter, Router};
use folio_i18n::{Locale, LocaleStore, LOCALE_STORAGE_KEY};
use folio_store::{MemoryStorage, Preferences, UnavailableStorage};
use pretty_assertions::assert_eq;

/// Router that records what the persisted locale was when it was asked to
/// rewrite, to observe the write-then-rewrite order.
struct ProbeRouter {
    inner: MemoryRouter,
    prefs: Preferences,
    persisted_at_rewrite: Vec<Option<String>>,
}

impl Router for ProbeRouter {
    fn locale_segment(&self) -> Option<String> {
        self.inner.locale_segment()
    }

    fn replace_locale_segment(&mut self, locale: &str) {
        self.persisted_at_rewrite
            .push(self.prefs.read(LOCALE_STORAGE_KEY));
        self.inner.replace_locale_segment(locale);
    }
}

#[test]
fn route_param_wins_over_persisted_on_mount() {
    let prefs = Preferences::new(Arc::new(MemoryStorage::with_entries([(
        LOCALE_STORAGE_KEY,
        "en",
    )])));
    let store = LocaleStore::mount(MemoryRouter::new("/bg"), prefs);
    assert_eq!(store.get(), Locale::Bg);
}

#[test]
fn persisted_value_used_when_route_is_invalid() {
    let prefs = Preferences::new(Arc::new(MemoryStorage::with_entries([(
        LOCALE_STORAGE_KEY,
        "bg",
    )])));
    let store = LocaleStore::mount(MemoryRouter::new("/fr/projects"), prefs);
    assert_eq!(store.get(), Locale::Bg);
}

#[test]
fn corrupt_persisted_value_falls_back_to_default() {
    let prefs = Preferences::new(Arc::new(MemoryStorage::with_entries([(
        LOCALE_STORAGE_KEY,
        "klingon",
    )])));
    let store = LocaleStore::mount(MemoryRouter::new("/"), prefs);
    assert_eq!(store.get(), Locale::En);
}

#[test]
fn set_then_read_round_trips_through_storage() {
    let prefs = Preferences::in_memory();
    let mut store = LocaleStore::mount(MemoryRouter::new("/en"), prefs.clone());

    store.set(Locale::Bg);

    assert_eq!(prefs.read(LOCALE_STORAGE_KEY).as_deref(), Some("bg"));
    assert_eq!(store.get(), Locale::Bg);
}

#[test]
fn set_rewrites_route_without_growing_history() {
    let mut router = MemoryRouter::new("/en");
    router.push("/en/projects?filter=ai#list");
    let mut store = LocaleStore::mount(router, Preferences::in_memory());

    store.set(Locale::Bg);

    let router = store.router();
    assert_eq!(router.path().as_str(), "/bg/projects?filter=ai#list");
    assert_eq!(router.history_len(), 2);
    assert_eq!(router.replacements(), 1);
}

#[test]
fn set_to_current_locale_skips_route_rewrite() {
    let prefs = Preferences::in_memory();
    let mut store = LocaleStore::mount(MemoryRouter::new("/bg/skills"), prefs.clone());
    assert_eq!(store.get(), Locale::Bg);

    store.set(Locale::Bg);

    assert_eq!(store.router().replacements(), 0);
    assert_eq!(store.router().path().as_str(), "/bg/skills");
    // Persistence is still written once per call.
    assert_eq!(prefs.read(LOCALE_STORAGE_KEY).as_deref(), Some("bg"));
}

#[test]
fn persistence_write_happens_before_route_rewrite() {
    let prefs = Preferences::in_memory();
    let router = ProbeRouter {
        inner: MemoryRouter::new("/en"),
        prefs: prefs.clone(),
        persisted_at_rewrite: Vec::new(),
    };
    let mut store = LocaleStore::mount(router, prefs);

    store.set(Locale::Bg);

    assert_eq!(
        store.router().persisted_at_rewrite,
        vec![Some("bg".to_string())]
    );
}

#[test]
fn unavailable_storage_keeps_memory_authoritative() {
    let prefs = Preferences::new(Arc::new(UnavailableStorage));
    let mut store = LocaleStore::mount(MemoryRouter::new("/"), prefs.clone());
    assert_eq!(store.get(), Locale::En);

    store.set(Locale::Bg);

    assert_eq!(store.get(), Locale::Bg);
    assert_eq!(store.router().path().as_str(), "/bg");
    assert_eq!(prefs.read(LOCALE_STORAGE_KEY), None);
}

#[test]
fn canonicalize_route_repairs_missing_or_unknown_segments() {
    let mut store = LocaleStore::mount(MemoryRouter::new("/"), Preferences::in_memory());
    assert!(store.canonicalize_route());
    assert_eq!(store.router().path().as_str(), "/en");
    assert!(!store.canonicalize_route());

    let mut store = LocaleStore::mount(
        MemoryRouter::new("/fr/projects"),
        Preferences::in_memory(),
    );
    assert!(store.canonicalize_route());
    assert_eq!(store.router().path().as_str(), "/en/projects");

    let prefs = Preferences::in_memory();
    let mut store = LocaleStore::mount(MemoryRouter::new("/bg"), prefs.clone());
    assert!(!store.canonicalize_route());
    assert_eq!(store.router().replacements(), 0);
    assert_eq!(prefs.read(LOCALE_STORAGE_KEY), None);
}

#[test]
fn page_segment_survives_locale_rewrites() {
    let mut store = LocaleStore::mount(MemoryRouter::new("/projects"), Preferences::in_memory());
    assert_eq!(store.get(), Locale::En);

    assert!(store.canonicalize_route());
    assert_eq!(store.router().path().as_str(), "/en/projects");

    let mut store = LocaleStore::mount(MemoryRouter::new("/projects"), Preferences::in_memory());
    store.set(Locale::Bg);
    assert_eq!(store.router().path().as_str(), "/bg/projects");
    assert_eq!(store.router().history_len(), 1);

    store.toggle();
    assert_eq!(store.router().path().as_str(), "/en/projects");
}

#[test]
fn listeners_hear_changes_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = LocaleStore::mount(MemoryRouter::new("/en"), Preferences::in_memory());

    let sink = Rc::clone(&seen);
    let id = store.subscribe(move |locale| sink.borrow_mut().push(locale));

    store.set(Locale::En);
    store.set(Locale::Bg);
    store.toggle();
    assert!(store.unsubscribe(id));
    store.toggle();

    assert_eq!(*seen.borrow(), vec![Locale::Bg, Locale::En]);
}
