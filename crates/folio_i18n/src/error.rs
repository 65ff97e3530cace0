use thiserror::Error;

use crate::Locale;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("yaml catalog error: {0}")]
    Yaml(String),

    #[error("catalog syntax error at line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    #[error("catalog for `{locale}` is invalid: {source}")]
    Locale {
        locale: Locale,
        #[source]
        source: Box<CatalogError>,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown locale `{0}` (expected `en` or `bg`)")]
pub struct UnknownLocale(pub String);
