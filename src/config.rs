//! Printer configuration.
//!
//! Defaults reproduce the diagnostic layout: 80 columns, 4-space indents and
//! `seq` as the block operator. A YAML file may override any subset of keys.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_BLOCK_OPERATOR: &str = "seq";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrinterConfig {
    /// A packed line is closed before it reaches this many columns.
    pub width: usize,
    /// Spaces per nesting level for children on their own lines.
    pub indent: usize,
    /// Operator whose children always start on their own lines.
    pub block_operator: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent: crate::text::INDENT,
            block_operator: DEFAULT_BLOCK_OPERATOR.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl PrinterConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

/// Loads a printer configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<PrinterConfig, ConfigError> {
    let display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: display.clone(),
        source,
    })?;
    PrinterConfig::from_yaml(&text).map_err(|source| ConfigError::Yaml {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(PrinterConfig::from_yaml("").unwrap(), PrinterConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = PrinterConfig::from_yaml("width: 40\n").unwrap();
        assert_eq!(config.width, 40);
        assert_eq!(config.indent, 4);
        assert_eq!(config.block_operator, "seq");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PrinterConfig::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
