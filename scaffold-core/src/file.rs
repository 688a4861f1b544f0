use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get how this file is written
    fn mode(&self) -> WriteMode;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.mode() {
            WriteMode::CreateNew => {
                if path.exists() {
                    debug!(path = %path.display(), "file exists, skipping");
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
            WriteMode::AppendExisting => {
                if path.exists() {
                    append_file(&path, &self.render())?;
                    Ok(WriteResult::Appended)
                } else {
                    debug!(path = %path.display(), "append target missing");
                    Ok(WriteResult::Missing)
                }
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing file");
    fs::write(path, content).map_err(|e| Error::write(path, e))
}

fn append_file(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "appending to file");
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::append(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::append(path, e))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created
    Written,
    /// File was skipped (already exists)
    Skipped,
    /// Content was appended to an existing file
    Appended,
    /// Nothing to append to
    Missing,
}

/// How a generated file lands on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Only create if the file doesn't exist (stubs)
    CreateNew,
    /// Append to the end of a file that must already exist
    AppendExisting,
}
