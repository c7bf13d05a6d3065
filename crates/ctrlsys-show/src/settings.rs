//! Settings file support for ctrlsys-show
//!
//! Loads optional TOML settings. Every field has a default, so a missing
//! file or a missing section behaves like the built-in configuration.

use crate::error::SettingsError;
use ctrlsys_types::VlanNumber;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSettings {
    /// Document read when no path is given on the command line
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

/// Structural checks beyond the required-element rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Reject repeated IDs in `<Ports>` or `<defVlans>`
    #[serde(default)]
    pub reject_duplicate_ids: bool,

    /// Reject IDs and VLAN numbers that are not plain integers instead of
    /// reading their leading integer
    #[serde(default)]
    pub strict_integers: bool,
}

/// Report rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Printed for ports without a default VLAN entry
    #[serde(default)]
    pub missing_vlan_default: VlanNumber,

    /// Log a warning for each port without a default VLAN entry
    #[serde(default = "default_warn_on_missing_vlan")]
    pub warn_on_missing_vlan: bool,
}

/// Complete ctrlsys-show settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtrlSysSettings {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub report: ReportSettings,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("test_config.xml")
}

fn default_warn_on_missing_vlan() -> bool {
    true
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            missing_vlan_default: VlanNumber::UNASSIGNED,
            warn_on_missing_vlan: default_warn_on_missing_vlan(),
        }
    }
}

impl CtrlSysSettings {
    /// Load settings from file, falling back to defaults if file not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| SettingsError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "settings file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.input.path.as_os_str().is_empty() {
            return Err(SettingsError::Invalid {
                field: "input.path",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
