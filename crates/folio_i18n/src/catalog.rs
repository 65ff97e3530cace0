//! Per-locale string catalog and its source format.
//!
//! Sources are a YAML mapping of string ids to strings:
//!
//! ```yaml
//! nav.home: "Home"
//! hero.tagline: "Turning Ideas into\nIntelligent Code"
//! ```
//!
//! A line-based `key = value` form is accepted as a fallback for sources that
//! are clearly not YAML mappings. It supports `#` and `//` comments and
//! optional single or double quotes with `\n`, `\t`, `\\`, `\"`, `\'` escapes.

use rustc_hash::FxHashMap;

use crate::CatalogError;

const MAX_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

/// Display strings of one locale, keyed by dotted id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: FxHashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in this catalog, unordered.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a YAML mapping, or the `key = value` line format.
    pub fn parse(src: &str) -> Result<Self, CatalogError> {
        match parse_yaml(src)? {
            Some(catalog) => Ok(catalog),
            None => parse_lines(src),
        }
    }
}

fn is_valid_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Shared entry checks; `Err` carries the message only.
fn check_entry(catalog: &Catalog, id: &str, value: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("empty key".to_string());
    }
    if !is_valid_id(id) {
        return Err(format!(
            "invalid key `{id}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)"
        ));
    }
    if id.len() > MAX_KEY_BYTES {
        return Err(format!("key `{id}` is too long (max {MAX_KEY_BYTES} bytes)"));
    }
    if value.len() > MAX_VALUE_BYTES {
        return Err(format!(
            "value for key `{id}` is too long (max {MAX_VALUE_BYTES} bytes)"
        ));
    }
    if catalog.len() >= MAX_ENTRIES && !catalog.contains(id) {
        return Err(format!("too many entries (max {MAX_ENTRIES})"));
    }
    Ok(())
}

/// Heuristic used when YAML parsing fails: the first meaningful line decides
/// whether the source was meant as YAML (`key: value`) or as `key = value`.
fn looks_like_yaml(src: &str) -> bool {
    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        return match (line.find(':'), line.find('=')) {
            (Some(colon), Some(eq)) => colon < eq,
            (Some(_), None) => true,
            _ => false,
        };
    }
    false
}

/// `Ok(None)` means "not a YAML mapping, try the line format".
fn parse_yaml(src: &str) -> Result<Option<Catalog>, CatalogError> {
    let mapping = match serde_yaml::from_str::<serde_yaml::Value>(src) {
        // `key = value: text` also reads as a one-entry YAML mapping.
        Ok(serde_yaml::Value::Mapping(_)) if !looks_like_yaml(src) => return Ok(None),
        Ok(serde_yaml::Value::Mapping(mapping)) => mapping,
        Ok(_) => return Ok(None),
        Err(e) if looks_like_yaml(src) => {
            return Err(CatalogError::Yaml(format!("yaml parse error: {e}")))
        }
        Err(_) => return Ok(None),
    };

    let mut catalog = Catalog::new();
    for (k, v) in mapping {
        let Some(id) = k.as_str() else {
            return Err(CatalogError::Yaml("yaml keys must be strings".to_string()));
        };
        let Some(value) = v.as_str() else {
            return Err(CatalogError::Yaml(format!(
                "yaml value for key `{id}` must be a string"
            )));
        };
        check_entry(&catalog, id, value).map_err(CatalogError::Yaml)?;
        catalog.insert(id, value);
    }
    Ok(Some(catalog))
}

fn parse_lines(src: &str) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();
    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let syntax = |msg: String| CatalogError::Syntax { line: line_no, msg };

        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            return Err(syntax("expected `key = value`".to_string()));
        };
        let id = id.trim();
        let value = parse_value(value.trim()).map_err(syntax)?;

        check_entry(&catalog, id, &value).map_err(syntax)?;
        catalog.insert(id, value);
    }
    Ok(catalog)
}

/// Unquoted values end at a ` #` or ` //` comment. Quoted values end at their
/// closing quote, and only a comment may follow it.
fn parse_value(value: &str) -> Result<String, String> {
    let quote = match value.chars().next() {
        Some(q @ ('"' | '\'')) => q,
        _ => return Ok(strip_inline_comment(value).to_string()),
    };

    let mut out = String::with_capacity(value.len());
    let mut chars = value[1..].char_indices();
    while let Some((idx, c)) = chars.next() {
        if c == quote {
            let tail = value[1 + idx + c.len_utf8()..].trim_start();
            if !(tail.is_empty() || tail.starts_with('#') || tail.starts_with("//")) {
                return Err(format!("unexpected text after quoted value: `{tail}`"));
            }
            return Ok(out);
        }
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some((_, 'n')) => out.push('\n'),
            Some((_, 'r')) => out.push('\r'),
            Some((_, 't')) => out.push('\t'),
            Some((_, other)) => out.push(other),
            None => return Err("dangling escape".to_string()),
        }
    }
    Err(format!("unterminated {quote} quote"))
}

/// Drop a trailing ` # ...` or ` // ...` comment.
fn strip_inline_comment(value: &str) -> &str {
    let cut = [" #", " //"]
        .iter()
        .filter_map(|marker| value.find(marker))
        .min();
    match cut {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}
