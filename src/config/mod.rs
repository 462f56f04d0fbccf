//! Configuration loading and management for the compliance engine.
//!
//! This module provides functionality to load rule parameters, holiday API
//! settings and message catalogs from YAML files. Every setting has a
//! statutory default, see [`RuleSet::default`].
//!
//! # Example
//!
//! ```no_run
//! use milog_engine::config::{ConfigLoader, ExportFormat};
//!
//! let config = ConfigLoader::load("./config/milog").unwrap();
//! println!("PDF rows: {}", config.rules().max_rows(ExportFormat::Pdf));
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_LANGUAGE};
pub use types::{ExportFormat, HolidayApiConfig, PauseRule, RowLimits, RuleSet};
