//! Read-only access to the stored "latest version" value

#[cfg(test)]
use mockall::automock;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::gate::error::StoreError;

/// Source of the reference version string.
///
/// The store is read-only from this crate's perspective; publishing a new
/// version happens out of band by rewriting the file.
#[cfg_attr(test, automock)]
pub trait VersionStore: Send + Sync {
    /// First line of the store with the line ending removed. No character
    /// sanitization happens here; the gate and the badge apply their own.
    fn read_latest(&self) -> Result<String, StoreError>;
}

/// Store backed by a single-line text file
pub struct FileVersionStore {
    path: PathBuf,
}

impl FileVersionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionStore for FileVersionStore {
    fn read_latest(&self) -> Result<String, StoreError> {
        let file = File::open(&self.path)?;
        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
