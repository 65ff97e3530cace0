use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use folio_app::{FolioConfig, PortfolioProvider};
use folio_core::MemoryRouter;
use folio_i18n::{Locale, Translations, TranslationKey};
use folio_store::{MemoryStorage, Preferences, Storage, UnavailableStorage};
use folio_theme::ThemeMode;
use pretty_assertions::assert_eq;

fn shared_prefs() -> (Arc<MemoryStorage>, Preferences) {
    let storage = Arc::new(MemoryStorage::new());
    let prefs = Preferences::new(storage.clone());
    (storage, prefs)
}

#[test]
fn locale_round_trips_through_route_and_storage() {
    let (storage, prefs) = shared_prefs();
    let mut app = PortfolioProvider::mount(MemoryRouter::new("/en/projects"), prefs);

    app.set_locale(Locale::Bg);

    assert_eq!(app.locale(), Locale::Bg);
    assert_eq!(app.router().path().as_str(), "/bg/projects");
    assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("bg"));
    assert_eq!(app.router().history_len(), 1);
}

#[test]
fn theme_toggle_persists_and_swaps_tokens() {
    let (storage, prefs) = shared_prefs();
    let mut app = PortfolioProvider::mount(MemoryRouter::new("/en"), prefs);
    assert_eq!(app.theme(), ThemeMode::Dark);

    app.toggle_theme();
    assert_eq!(app.theme(), ThemeMode::Light);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));

    app.toggle_theme();
    assert_eq!(app.theme(), ThemeMode::Dark);
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn theme_change_leaves_locale_and_route_alone() {
    let (_, prefs) = shared_prefs();
    let mut app = PortfolioProvider::mount(MemoryRouter::new("/bg"), prefs);

    app.set_theme(ThemeMode::Light);

    assert_eq!(app.locale(), Locale::Bg);
    assert_eq!(app.router().replacements(), 0);
}

#[test]
fn remount_restores_persisted_choices() {
    let (storage, prefs) = shared_prefs();
    {
        let mut app = PortfolioProvider::mount(MemoryRouter::new("/en"), prefs);
        app.set_locale(Locale::Bg);
        app.set_theme(ThemeMode::Light);
    }

    let app = PortfolioProvider::mount(MemoryRouter::new("/"), Preferences::new(storage));
    assert_eq!(app.locale(), Locale::Bg);
    assert_eq!(app.theme(), ThemeMode::Light);
}

#[test]
fn file_backed_preferences_survive_a_new_process() {
    let dir = tempfile::tempdir().unwrap();
    let config = FolioConfig::from_toml_str(&format!(
        "[storage]\nscope = \"folio\"\npath = {:?}\n",
        dir.path().join("prefs.json")
    ))
    .unwrap();

    {
        let mut app = PortfolioProvider::from_config(MemoryRouter::new("/"), &config);
        app.toggle_locale();
        app.toggle_theme();
    }

    let app = PortfolioProvider::from_config(MemoryRouter::new("/"), &config);
    assert_eq!(app.locale(), Locale::Bg);
    assert_eq!(app.theme(), ThemeMode::Light);

    let raw = std::fs::read_to_string(dir.path().join("prefs.json")).unwrap();
    assert!(raw.contains("folio:language"), "{raw}");
    assert!(raw.contains("folio:theme"), "{raw}");
}

#[test]
fn unavailable_storage_keeps_the_session_working() {
    let prefs = Preferences::new(Arc::new(UnavailableStorage));
    let mut app = PortfolioProvider::mount(MemoryRouter::new("/"), prefs);

    app.toggle_locale();
    app.toggle_theme();

    assert_eq!(app.locale(), Locale::Bg);
    assert_eq!(app.theme(), ThemeMode::Light);
    assert_eq!(app.t(TranslationKey::NavHome), "Начало");
}

#[test]
fn canonicalize_on_mount_repairs_missing_segment() {
    let config = FolioConfig::from_toml_str("[route]\ncanonicalize_on_mount = true\n").unwrap();
    let app = PortfolioProvider::from_config(MemoryRouter::new("/"), &config);

    assert_eq!(app.router().path().as_str(), "/en");
    assert_eq!(app.router().history_len(), 1);
}

#[test]
fn mount_without_canonicalize_leaves_route_untouched() {
    let app = PortfolioProvider::from_config(MemoryRouter::new("/"), &FolioConfig::default());
    assert_eq!(app.router().path().as_str(), "/");
    assert_eq!(app.router().replacements(), 0);
}

#[test]
fn custom_keys_are_used_for_storage() {
    let config = FolioConfig::from_toml_str(
        "[storage]\nlocale_key = \"lang\"\ntheme_key = \"mode\"\n",
    )
    .unwrap();
    let app = PortfolioProvider::from_config(MemoryRouter::new("/"), &config);

    assert_eq!(app.locale_store().storage_key(), "lang");
    assert_eq!(app.theme_store().storage_key(), "mode");
}

#[test]
fn listeners_see_each_change_once() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut app = PortfolioProvider::mount(MemoryRouter::new("/en"), Preferences::in_memory());

    let log = seen.clone();
    app.subscribe_locale(move |l| log.borrow_mut().push(l.code()));
    let log = seen.clone();
    app.subscribe_theme(move |m| log.borrow_mut().push(m.code()));

    app.set_locale(Locale::En);
    app.toggle_locale();
    app.toggle_theme();

    assert_eq!(*seen.borrow(), vec!["bg", "light"]);
}

#[test]
fn replacement_translations_are_used() {
    let translations =
        Translations::from_sources(&[(Locale::En, "nav.home: Start\n")]).unwrap();
    let app = PortfolioProvider::mount(MemoryRouter::new("/en"), Preferences::in_memory())
        .with_translations(Arc::new(translations));

    assert_eq!(app.t(TranslationKey::NavHome), "Start");
    assert_eq!(app.t(TranslationKey::NavContact), "nav.contact");
}
