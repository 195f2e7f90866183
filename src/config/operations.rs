//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{ForgeError, Result};
use crate::question::QuestionList;
use crate::synth::TemplateSynthesizer;
use std::path::{Path, PathBuf};
use std::sync::Arc;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the promptforge.yaml file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ForgeError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a command.
    ///
    /// An explicit path must exist. Without one, `promptforge.yaml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| ForgeError::UserError(format!("failed to parse config YAML: {}", e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ForgeError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `export_file_name` must be a bare, non-empty file name ending in `.txt`
    /// - `questions` must form a valid question list
    /// - `questions` must include every question the synthesizer reads
    pub fn validate(&self) -> Result<()> {
        let name = self.export_file_name.trim();
        if name.is_empty() {
            return Err(ForgeError::UserError(
                "config validation failed: export_file_name must be non-empty".to_string(),
            ));
        }
        if !name.ends_with(".txt") || name == ".txt" {
            return Err(ForgeError::UserError(format!(
                "config validation failed: export_file_name must end in '.txt' (found '{}')",
                name
            )));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ForgeError::UserError(format!(
                "config validation failed: export_file_name must be a file name, not a path (found '{}')",
                name
            )));
        }

        self.question_list().map(|_| ())
    }

    /// Build the shared question list from the configured questions.
    pub fn question_list(&self) -> Result<Arc<QuestionList>> {
        let list = QuestionList::new(self.questions.clone()).map_err(|e| {
            ForgeError::UserError(format!("config validation failed: {}", e))
        })?;
        list.ensure_covers(TemplateSynthesizer::new().required_fields())
            .map_err(|e| ForgeError::UserError(format!("config validation failed: {}", e)))?;
        Ok(Arc::new(list))
    }
}
