//! # Folio Common
//!
//! Shared types, utilities, and common functionality for Folio.
//!
//! This crate provides the foundational pieces used across the workspace:
//! the error type, the locale and identifier types, logging setup and the
//! single-threaded task scheduling seam.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod runtime;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{FolioError, FolioResult};
pub use logging::{init_logging_with_writer, LoggingConfig};
pub use runtime::{LocalTask, Scheduler};
#[cfg(not(target_arch = "wasm32"))]
pub use runtime::TokioScheduler;
pub use types::*;
pub use utils::*;
