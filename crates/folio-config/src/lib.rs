//! # Folio Config
//!
//! Type-safe configuration for Folio.
//!
//! This crate describes the DOM contract the page exposes (class and
//! attribute names), where content files live, and the timing of the
//! deferred page behaviors. Every field has a default matching the
//! published page, so an empty document is a valid configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::*;
pub use schema::*;
pub use validator::*;
