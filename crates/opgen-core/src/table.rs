//! Loading opcode tables.

use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::record::{LineError, OpcodeRecord, parse_line};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("cannot open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The raw contents of an opcode table, one record per line.
///
/// Loading is the only fallible I/O step. Once a table exists, parsing is a
/// pure function of its lines.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    source: String,
}

impl OpcodeTable {
    /// Read a table from disk.
    ///
    /// The file handle is closed before this returns, whether or not the
    /// read succeeded.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| TableError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_bytes(&bytes, &path.display().to_string());
        debug!(path = %path.display(), lines = table.line_count(), "loaded opcode table");
        Ok(table)
    }

    /// Read a table from an arbitrary reader (e.g. stdin).
    ///
    /// `name` identifies the reader in errors.
    pub fn from_reader<R: Read>(mut reader: R, name: &str) -> Result<Self, TableError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| TableError::FileAccess {
                path: PathBuf::from(name),
                source,
            })?;
        let table = Self::from_bytes(&bytes, name);
        debug!(reader = name, lines = table.line_count(), "loaded opcode table");
        Ok(table)
    }

    /// Decode raw table bytes.
    ///
    /// Descriptions are free text in whatever encoding the table was saved
    /// with. Invalid UTF-8 sequences become U+FFFD instead of failing the load.
    pub fn from_bytes(bytes: &[u8], name: &str) -> Self {
        let source = String::from_utf8_lossy(bytes);
        if let Cow::Owned(_) = source {
            warn!(table = name, "opcode table is not valid UTF-8, replacing invalid bytes");
        }
        Self::from_source(source.into_owned())
    }

    /// Build a table from in-memory text.
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Number of lines, including malformed ones.
    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }

    /// Parse every line in order.
    ///
    /// Each line yields its own result, so the caller decides whether a
    /// malformed line aborts the run or is skipped.
    pub fn records(&self) -> impl Iterator<Item = Result<OpcodeRecord, LineError>> + '_ {
        self.source
            .lines()
            .enumerate()
            .map(|(idx, text)| parse_line(idx + 1, text))
    }
}
