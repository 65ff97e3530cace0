use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::{Catalog, CatalogError, Locale, TranslationKey};

/// Built-in site catalogs, embedded at compile time.
const BUILTIN_SOURCES: [(Locale, &str); 2] = [
    (Locale::En, include_str!("../locales/en.yaml")),
    (Locale::Bg, include_str!("../locales/bg.yaml")),
];

static BUILTIN: OnceLock<Arc<Translations>> = OnceLock::new();

/// Translation tables for every locale.
///
/// Lookups never fail: a missing or empty entry resolves to the key id
/// itself, so gaps show up on the page instead of breaking it. Results borrow
/// from the table, so identical arguments always yield the identical string.
#[derive(Clone, Debug, Default)]
pub struct Translations {
    tables: FxHashMap<Locale, Catalog>,
}

impl Translations {
    /// Empty tables; every lookup falls back to the key id.
    pub fn new() -> Self {
        Self::default()
    }

    /// The site's English and Bulgarian catalogs, parsed once per process.
    ///
    /// An embedded catalog that fails to parse is logged and left empty, and
    /// coverage gaps are logged; neither is fatal.
    pub fn builtin() -> Arc<Translations> {
        Arc::clone(BUILTIN.get_or_init(|| {
            let mut translations = Translations::new();
            for (locale, src) in BUILTIN_SOURCES {
                match Catalog::parse(src) {
                    Ok(catalog) => translations.insert(locale, catalog),
                    Err(err) => {
                        warn!(%locale, error = %err, "built-in catalog failed to parse");
                        translations.insert(locale, Catalog::new());
                    }
                }
            }
            translations.log_coverage();
            Arc::new(translations)
        }))
    }

    /// Build tables from catalog sources.
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self, CatalogError> {
        let mut translations = Translations::new();
        for &(locale, src) in sources {
            let catalog = Catalog::parse(src).map_err(|source| CatalogError::Locale {
                locale,
                source: Box::new(source),
            })?;
            translations.insert(locale, catalog);
        }
        translations.log_coverage();
        Ok(translations)
    }

    /// Install (or replace) the catalog of `locale`.
    pub fn insert(&mut self, locale: Locale, catalog: Catalog) {
        debug!(%locale, entries = catalog.len(), "Translations: catalog loaded");
        self.tables.insert(locale, catalog);
    }

    pub fn catalog(&self, locale: Locale) -> Option<&Catalog> {
        self.tables.get(&locale)
    }

    /// Display string for `key` in `locale`, or the key id when absent.
    pub fn t(&self, locale: Locale, key: TranslationKey) -> &str {
        self.lookup(locale, key.as_str())
            .unwrap_or_else(|| key.as_str())
    }

    /// [`Translations::t`] for ids assembled at runtime, such as
    /// `projects.status.{status}`. Unknown ids come back unchanged.
    pub fn t_id<'a>(&'a self, locale: Locale, id: &'a str) -> &'a str {
        self.lookup(locale, id).unwrap_or(id)
    }

    /// Catalog keys with no usable entry for `locale`, in catalog order.
    pub fn missing_keys(&self, locale: Locale) -> Vec<TranslationKey> {
        TranslationKey::ALL
            .iter()
            .copied()
            .filter(|key| self.lookup(locale, key.as_str()).is_none())
            .collect()
    }

    fn lookup(&self, locale: Locale, id: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|catalog| catalog.get(id))
            .filter(|s| !s.is_empty())
    }

    fn log_coverage(&self) {
        for locale in Locale::ALL {
            let missing = self.missing_keys(locale);
            if !missing.is_empty() {
                let ids: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
                warn!(
                    %locale,
                    count = missing.len(),
                    keys = ?ids,
                    "translation catalog is missing keys; their ids will be shown"
                );
            }
            if let Some(catalog) = self.tables.get(&locale) {
                let unknown = catalog
                    .ids()
                    .filter(|id| TranslationKey::from_id(id).is_none())
                    .count();
                if unknown > 0 {
                    debug!(%locale, count = unknown, "catalog has ids outside the key catalog");
                }
            }
        }
    }
}
