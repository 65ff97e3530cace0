//! Folio Core
//!
//! Shared primitives for the folio preference layer:
//!
//! - **Route access**: the [`Router`] seam over the host's navigation, plus
//!   [`LocalePath`] for rewriting the locale segment of a path
//! - **Colors**: the [`Color`] value used by theme tokens
//! - **Change listeners**: [`Listeners`] notified after a store mutates
//!
//! # Example
//!
//! ```rust
//! use folio_core::{LocalePath, MemoryRouter, Router};
//!
//! let mut router = MemoryRouter::new("/en/projects");
//! assert_eq!(router.locale_segment().as_deref(), Some("en"));
//!
//! router.replace_locale_segment("bg");
//! assert_eq!(router.path(), &LocalePath::new("/bg/projects"));
//! assert_eq!(router.history_len(), 1);
//! ```

pub mod color;
pub mod listeners;
pub mod route;

pub use color::Color;
pub use listeners::{ListenerId, Listeners};
pub use route::{LocalePath, MemoryRouter, Router};
