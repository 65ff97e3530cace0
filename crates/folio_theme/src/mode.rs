use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::UnknownThemeMode;

/// Visual palette selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    /// Persisted value, also used as the `data-theme` attribute.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Value for the document's `data-theme` attribute.
    pub const fn data_attr(self) -> &'static str {
        self.code()
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Exact match on `dark` / `light`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// A valid persisted value, else the default (`dark`).
    pub fn resolve(persisted: Option<&str>) -> Self {
        match persisted {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                debug!(persisted = raw, "ignoring unknown persisted theme");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownThemeMode(s.to_string()))
    }
}
