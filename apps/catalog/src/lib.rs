//! # Elemental Catalog
//!
//! The enumerations of a small publishing domain ([`declarations`]) and a table of
//! programmer's error messages ([`programmers`]), browsable from the `elemental` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod declarations;
pub mod error;
pub mod logging;
pub mod programmers;

pub use crate::config::{CatalogConfig, OutputFormat, load_config};
pub use crate::error::{CatalogError, CatalogErrorExt};
