//! # Folio I18n
//!
//! Language switching and localized content for the portfolio page.
//!
//! - [`LocalizationManager`] owns the current [`Locale`], rewrites every
//!   bilingual element on a switch, persists the choice and populates the
//!   about section and project cards from external content;
//! - [`ContentSource`] fetches raw content files (HTTP, local files or memory);
//! - [`ContentCache`] keeps each parsed record for the rest of the session;
//! - [`fallback`] holds the built-in about text used when content is unavailable.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_common::{Locale, Scheduler, LocalTask};
//! use folio_config::SiteConfig;
//! use folio_dom::{fixtures::portfolio_page, MemoryPreferenceStore};
//! use folio_i18n::{LocalizationManager, MemoryContentSource};
//!
//! struct Inline;
//! impl Scheduler for Inline {
//!     fn spawn(&self, _task: LocalTask) {}
//!     fn sleep(&self, _d: std::time::Duration) -> LocalTask { Box::pin(async {}) }
//! }
//!
//! let manager = LocalizationManager::new(
//!     portfolio_page(),
//!     &SiteConfig::default(),
//!     Rc::new(MemoryContentSource::new()),
//!     Rc::new(MemoryPreferenceStore::new()),
//!     Rc::new(Inline),
//! );
//! manager.set_language(Locale::Es);
//! assert_eq!(manager.current_language(), Locale::Es);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod error;
pub mod fallback;
pub mod manager;
pub mod resource;
pub mod source;

pub use cache::{ContentCache, ABOUT_FILE};
pub use error::ContentError;
pub use folio_common::Locale;
pub use manager::LocalizationManager;
pub use resource::{AboutContent, Localized, ProjectContent};
#[cfg(not(target_arch = "wasm32"))]
pub use source::FileContentSource;
pub use source::{CacheBuster, ContentSource, HttpContentSource, MemoryContentSource};
