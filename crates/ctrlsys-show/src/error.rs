//! Error types for ControlSystem configuration checks.
//!
//! Loading and schema errors are terminal: they are printed once at the
//! top level and the process exits with status 1.

use std::io;
use std::path::PathBuf;

use ctrlsys_types::{PortField, PortId};
use thiserror::Error;

/// Result type alias for ctrlsys-show operations.
pub type Result<T> = std::result::Result<T, CtrlSysError>;

/// The configuration document could not be read or parsed.
///
/// Every variant reports as "Configuration file not found", followed by
/// the path and, where there is one, the cause.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File does not exist.
    #[error("Configuration file not found: {}", .path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// File exists but reading it failed.
    #[error("Configuration file not found: {}: could not be read: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// File is not well-formed XML.
    #[error("Configuration file not found: {}: not well-formed XML: {source}", .path.display())]
    Malformed {
        /// Path that was parsed.
        path: PathBuf,
        /// The parser error, including its position.
        #[source]
        source: roxmltree::Error,
    },
}

/// The document is well-formed but does not have the required structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required section element is absent.
    #[error("XML error: <{tag}> node missing")]
    MissingNode {
        /// Tag name of the missing element.
        tag: &'static str,
    },

    /// A section holds no entries.
    #[error("XML error: no <{entry}> entries inside <{section}>")]
    NoEntries {
        /// Tag name of the section.
        section: &'static str,
        /// Tag name of the expected entries.
        entry: &'static str,
    },

    /// An entry lacks its `ID` attribute.
    #[error("XML error: <{tag}> is missing ID attribute")]
    MissingId {
        /// Tag name of the entry.
        tag: &'static str,
    },

    /// A `<Port>` lacks one of its required settings.
    #[error("XML error: <Port> missing tag <{field}>")]
    MissingPortField {
        /// The missing setting.
        field: PortField,
    },

    /// A `<defVlans>` entry has no `<vlan>` child.
    #[error("XML error: <vlan> tag missing")]
    MissingVlan,

    /// A `<vlan>` element is empty.
    #[error("XML error: <vlan> tag has no value")]
    EmptyVlan,

    /// An `ID` attribute is not an integer.
    #[error("XML error: <{tag}> ID attribute is not an integer: '{value}'")]
    InvalidId {
        /// Tag name of the entry.
        tag: &'static str,
        /// The attribute value as written.
        value: String,
    },

    /// A `<vlan>` value is not an integer.
    #[error("XML error: <vlan> value is not an integer: '{value}'")]
    InvalidVlan {
        /// The element text as written.
        value: String,
    },

    /// The same ID appears twice in a section.
    #[error("XML error: duplicate ID {id} in <{section}>")]
    DuplicateId {
        /// Tag name of the section.
        section: &'static str,
        /// The repeated ID.
        id: PortId,
    },
}

/// Settings file errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file is not valid TOML for the settings schema.
    #[error("Failed to parse settings file {}: {message}", .path.display())]
    Parse {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// Reading the settings file failed.
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Io {
        /// Settings file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// A setting has an unusable value.
    #[error("Invalid setting {field}: {message}")]
    Invalid {
        /// The offending setting.
        field: &'static str,
        /// Error message.
        message: String,
    },
}

/// Top-level error for a ctrlsys-show run.
#[derive(Debug, Error)]
pub enum CtrlSysError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[source] io::Error),
}
