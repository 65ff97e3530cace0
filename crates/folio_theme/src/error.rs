use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme mode `{0}` (expected `dark` or `light`)")]
pub struct UnknownThemeMode(pub String);
