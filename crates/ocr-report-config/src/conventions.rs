//! Report markup conventions
//!
//! Class and attribute names shared between the report renderer and the
//! interaction layer, loadable from a TOML file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the segment status display lives relative to a hovered diff element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusScope {
    /// The nearest ancestor containing a status box owns the display.
    #[default]
    Container,
    /// One page-wide element, looked up by id. Earlier report layouts used
    /// this; it cannot serve several diff panels independently.
    Global,
}

/// Markup conventions of a rendered report
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReportConventions {
    /// Class carried by every diff span (e.g. "diff")
    #[serde(default = "default_diff_class")]
    pub diff_class: String,

    /// Class toggled on every member of the hovered diff group
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,

    /// Attribute naming the text segment of a diff span
    #[serde(default = "default_segment_attribute")]
    pub segment_attribute: String,

    /// Class of the per-container status display
    #[serde(default = "default_status_box_class")]
    pub status_box_class: String,

    /// Id of the page-wide status display (only used with `StatusScope::Global`)
    #[serde(default = "default_status_element_id")]
    pub status_element_id: String,

    #[serde(default)]
    pub status_scope: StatusScope,
}

fn default_diff_class() -> String {
    "diff".to_string()
}

fn default_highlight_class() -> String {
    "diff-highlight".to_string()
}

fn default_segment_attribute() -> String {
    "data-segment-id".to_string()
}

fn default_status_box_class() -> String {
    "status-box".to_string()
}

fn default_status_element_id() -> String {
    "status".to_string()
}

impl Default for ReportConventions {
    fn default() -> Self {
        Self {
            diff_class: default_diff_class(),
            highlight_class: default_highlight_class(),
            segment_attribute: default_segment_attribute(),
            status_box_class: default_status_box_class(),
            status_element_id: default_status_element_id(),
            status_scope: StatusScope::default(),
        }
    }
}

impl ReportConventions {
    /// Parse conventions from TOML; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse conventions from a file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = crate::read_config_file(path)?;
        let conventions = Self::from_toml_str(&content)?;
        Ok(conventions)
    }

    /// Load conventions from `path` if given, or use defaults
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load_from_path(path) {
                Ok(conventions) => {
                    log::info!("Loaded report conventions from {}", path.display());
                    return conventions;
                }
                Err(e) => {
                    log::warn!("Failed to load report conventions: {:#}", e);
                }
            }
        }

        log::debug!("Using default report conventions");
        Self::default()
    }
}
