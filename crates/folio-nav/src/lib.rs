//! # Folio Nav
//!
//! Tab-based section navigation for the portfolio page.
//!
//! [`SectionNavigator`] keeps exactly one tab and its section active and
//! mirrors the choice into the location fragment. [`keyboard`] maps arrow and
//! digit keys onto tab indices.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod keyboard;
pub mod navigator;

pub use keyboard::{target_tab_index, Key, KeyAction, KeyInput};
pub use navigator::SectionNavigator;
