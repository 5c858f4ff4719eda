//! # Folio Site
//!
//! Page lifecycle glue for the portfolio site.
//!
//! [`Site`] wires the localization manager, the section navigator and the
//! decorative effects to page events. On `wasm32` the crate builds into the
//! browser module whose start function attaches the real event listeners.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod decor;
pub mod site;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use decor::Decor;
pub use site::{embedded_config, Site, EMBEDDED_CONFIG};
