//! Configuration for OCR diff report interactions
//!
//! This crate provides:
//! - Markup conventions the report renderer and the interaction layer agree on
//!   (ReportConventions)
//! - Status display scoping (StatusScope)
//! - Config file reading (TOML)

pub mod config_file;
pub mod conventions;

pub use config_file::read_config_file;
pub use conventions::{ReportConventions, StatusScope};
