//! Locale route segment access
//!
//! The site is served under `/{lang}/...`. Only the first path segment is
//! interpreted here, and only when it is shaped like a language tag;
//! everything after the slot belongs to the host's router.

use std::fmt;

/// Host navigation facility, narrowed to the locale segment.
pub trait Router {
    /// Current value of the first path segment, if the path has one.
    ///
    /// The value is returned verbatim; validating it is the caller's job.
    fn locale_segment(&self) -> Option<String>;

    /// Navigate to the equivalent path with its locale slot set to `locale`,
    /// as [`LocalePath::with_locale`] does.
    ///
    /// Implementations must replace the current history entry rather than
    /// push a new one.
    fn replace_locale_segment(&mut self, locale: &str);
}

/// A navigable path such as `/bg/projects?tab=ai#top`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LocalePath(String);

impl LocalePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First non-empty path segment, ignoring query and fragment.
    pub fn segment(&self) -> Option<&str> {
        let (path, _) = split_suffix(&self.0);
        path.split('/').find(|s| !s.is_empty())
    }

    /// The same path with its locale slot set to `locale`.
    ///
    /// A first segment shaped like a language tag (`en`, `fr`, `pt-BR`) is
    /// the slot and gets replaced. Any other first segment is a page, and
    /// `locale` is inserted in front of it: `/projects` becomes
    /// `/en/projects`. The rest of the path, query and fragment are kept.
    pub fn with_locale(&self, locale: &str) -> LocalePath {
        let (path, suffix) = split_suffix(&self.0);
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            return LocalePath(format!("/{locale}{suffix}"));
        }
        let (first, rest) = match trimmed.find('/') {
            Some(idx) => trimmed.split_at(idx),
            None => (trimmed, ""),
        };
        if is_language_tag(first) {
            LocalePath(format!("/{locale}{rest}{suffix}"))
        } else {
            LocalePath(format!("/{locale}/{trimmed}{suffix}"))
        }
    }
}

impl fmt::Display for LocalePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocalePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LocalePath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A 2 or 3 letter primary subtag, optionally followed by `-`/`_` subtags of
/// 2 to 8 alphanumerics.
fn is_language_tag(segment: &str) -> bool {
    let mut parts = segment.split(['-', '_']);
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_alphabetic()));
    primary_ok
        && parts.all(|p| (2..=8).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_alphanumeric()))
}

/// Split `path?query#fragment` into the path and the `?...`/`#...` suffix.
fn split_suffix(raw: &str) -> (&str, &str) {
    match raw.find(['?', '#']) {
        Some(idx) => raw.split_at(idx),
        None => (raw, ""),
    }
}

/// In-memory router with an observable history.
///
/// Used by headless hosts and tests. `push` models user navigation (a new
/// history entry); `replace_locale_segment` rewrites the current entry.
#[derive(Clone, Debug)]
pub struct MemoryRouter {
    history: Vec<LocalePath>,
    replacements: usize,
}

impl MemoryRouter {
    pub fn new(path: impl Into<LocalePath>) -> Self {
        Self {
            history: vec![path.into()],
            replacements: 0,
        }
    }

    /// Current path.
    pub fn path(&self) -> &LocalePath {
        // `history` is never empty: `new` seeds it and nothing pops.
        &self.history[self.history.len() - 1]
    }

    /// Navigate to `path`, adding a history entry.
    pub fn push(&mut self, path: impl Into<LocalePath>) {
        self.history.push(path.into());
    }

    /// Number of history entries, including the current one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of history-replacing rewrites performed so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Router for MemoryRouter {
    fn locale_segment(&self) -> Option<String> {
        self.path().segment().map(str::to_string)
    }

    fn replace_locale_segment(&mut self, locale: &str) {
        let next = self.path().with_locale(locale);
        tracing::trace!(from = %self.path(), to = %next, "MemoryRouter: replace");
        let last = self.history.len() - 1;
        self.history[last] = next;
        self.replacements += 1;
    }
}
