//! Folio preference persistence
//!
//! Preferences (the active locale and theme) are kept in a single scoped
//! key-value store that outlives the session. Storage is best-effort:
//!
//! - [`Storage`] media are fallible and report [`StorageError`]
//! - [`Preferences`] is the adapter the rest of the system talks to; it never
//!   fails. A failed read is "no value", a failed write is a no-op, and the
//!   caller's in-memory state stays authoritative.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_store::{MemoryStorage, Preferences, UnavailableStorage};
//!
//! let prefs = Preferences::new(Arc::new(MemoryStorage::new()));
//! prefs.write("language", "bg");
//! assert_eq!(prefs.read("language").as_deref(), Some("bg"));
//!
//! // Storage that always fails degrades to "absent" / no-op.
//! let broken = Preferences::new(Arc::new(UnavailableStorage));
//! broken.write("language", "bg");
//! assert_eq!(broken.read("language"), None);
//! ```

mod error;
mod file;
mod memory;
mod preferences;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::{MemoryStorage, UnavailableStorage};
pub use preferences::Preferences;

/// A string key-value medium.
///
/// Implementations may fail; [`Preferences`] absorbs the failures.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
