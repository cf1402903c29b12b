use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::Programs;
use crate::error::{AxiomError, Result};
use crate::normalize::FailurePolicy;

/// Settings for axiomctl, read from ~/.axiomctl/config.toml
///
/// Every field is optional in the file; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxiomConfig {
    /// What counts as a failed Axiom command
    pub failure_policy: FailurePolicy,

    /// Capture output instead of streaming it to the terminal
    pub silent: bool,

    /// Directory holding the axiom-* commands, when they are not on PATH
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_dir: Option<PathBuf>,

    /// Program name overrides
    pub programs: Programs,
}

impl AxiomConfig {
    /// Get config file path: ~/.axiomctl/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".axiomctl/config.toml")
    }

    /// Load from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|err| {
            AxiomError::config(format!("failed to read {}: {}", path.display(), err))
        })?;

        Self::parse(&content)
            .map_err(|err| AxiomError::config(format!("{} ({})", err, path.display())))
    }

    /// Parse TOML config content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| AxiomError::config(format!("invalid TOML: {}", err)))
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|err| AxiomError::config(format!("failed to serialize config: {}", err)))
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                AxiomError::config(format!("failed to create {}: {}", parent.display(), err))
            })?;
        }

        fs::write(path, self.to_toml()?).map_err(|err| {
            AxiomError::config(format!("failed to write {}: {}", path.display(), err))
        })
    }
}
