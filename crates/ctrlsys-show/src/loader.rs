//! Reads a ControlSystem document from disk and parses it into a tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use roxmltree::{Document, ParsingOptions};
use tracing::debug;

use crate::error::LoadError;

/// Raw text of a configuration document and where it came from.
///
/// The parsed [`Document`] borrows from this buffer, so the source must
/// outlive every node handed out by [`ConfigSource::parse`].
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
    text: String,
}

impl ConfigSource {
    /// Read the file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound { path });
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };

        debug!(path = %path.display(), bytes = text.len(), "read configuration file");
        Ok(Self { path, text })
    }

    /// Wrap an in-memory document, labelled with `path` in errors.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Parse the buffer into a tree.
    pub fn parse(&self) -> Result<Document<'_>, LoadError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        Document::parse_with_options(&self.text, options).map_err(|source| LoadError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
