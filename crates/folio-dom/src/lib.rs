//! # Folio DOM
//!
//! The page as the rest of Folio sees it.
//!
//! Managers never touch a concrete document: they query and mutate through
//! the [`Dom`] trait with a small closed [`Selector`] language. Two
//! implementations exist:
//!
//! - [`MemoryDocument`], an in-memory element tree used for headless
//!   rendering and tests;
//! - `browser::BrowserDocument` (only on `wasm32`), backed by `web_sys`.
//!
//! The persisted language preference goes through [`PreferenceStore`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dom;
pub mod fixtures;
pub mod memory;
pub mod selector;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use dom::Dom;
pub use memory::{ElementBuilder, MemoryDocument, NodeId};
pub use selector::Selector;
pub use storage::{MemoryPreferenceStore, PreferenceStore};
