//! Config struct definition and default implementation.

use super::types::*;
use crate::question::Question;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for promptforge.
///
/// This struct represents the contents of `promptforge.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Export settings
    // =========================================================================
    /// File name used when exporting a generated document (must end in `.txt`).
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    // =========================================================================
    // Event log settings
    // =========================================================================
    /// NDJSON file that session events are appended to. Disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_log: Option<PathBuf>,

    // =========================================================================
    // Questions
    // =========================================================================
    /// Ordered question list. Defaults to the built-in catalog.
    #[serde(default = "default_question_set")]
    pub questions: Vec<Question>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_file_name: default_export_file_name(),
            event_log: None,
            questions: default_question_set(),
        }
    }
}
