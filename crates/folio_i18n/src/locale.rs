use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::UnknownLocale;

/// Site display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    #[default]
    En,
    Bg,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Bg];

    /// Route segment and persisted value.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bg => "bg",
        }
    }

    /// Short uppercase badge shown on the language toggle.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Bg => "BG",
        }
    }

    /// The other locale of the pair.
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Bg,
            Self::Bg => Self::En,
        }
    }

    /// Exact match on the lowercase code; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Self::En),
            "bg" => Some(Self::Bg),
            _ => None,
        }
    }

    /// Pick the initial locale: a valid route param, else a valid persisted
    /// value, else the default. Unknown values count as absent.
    pub fn resolve(route_param: Option<&str>, persisted: Option<&str>) -> Self {
        if let Some(locale) = route_param.and_then(Self::parse) {
            return locale;
        }
        if let Some(raw) = route_param {
            debug!(route_param = raw, "ignoring unknown route locale");
        }
        if let Some(locale) = persisted.and_then(Self::parse) {
            return locale;
        }
        if let Some(raw) = persisted {
            debug!(persisted = raw, "ignoring unknown persisted locale");
        }
        Self::default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("bg"), Some(Locale::Bg));
        for bad in ["", "EN", "Bg", " en", "fr", "en-US"] {
            assert_eq!(Locale::parse(bad), None, "input={bad:?}");
        }
        assert_eq!("fr".parse::<Locale>(), Err(UnknownLocale("fr".into())));
    }

    #[test]
    fn other_is_an_involution() {
        for l in Locale::ALL {
            assert_ne!(l.other(), l);
            assert_eq!(l.other().other(), l);
        }
    }

    #[test]
    fn badge_is_the_uppercase_code() {
        for l in Locale::ALL {
            assert_eq!(l.badge(), l.code().to_ascii_uppercase());
        }
    }
}
