//! Configuration constants and default value functions used by the Config struct.

use crate::question::{Question, default_questions};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "promptforge.yaml";

/// Default file name for exported documents.
pub fn default_export_file_name() -> String {
    "prompt-complexo.txt".to_string()
}

/// Default question list: the built-in catalog.
pub fn default_question_set() -> Vec<Question> {
    default_questions()
}
