//! Where test files and class sources live relative to the working directory.
//!
//! Tests sit in a `test/` directory next to the class sources. Running from
//! inside that `test/` directory is also supported, in which case the sources
//! are looked up one level above.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Error, Result};

/// Name of the directory holding generated tests.
pub const TEST_DIR_NAME: &str = "test";

/// Resolved directories for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    test_dir: PathBuf,
    base_dir: PathBuf,
    in_test_dir: bool,
}

/// How the test directory was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestDir {
    /// Working directory is already the test directory
    InPlace(PathBuf),
    /// Test directory was created
    Created(PathBuf),
    /// Test directory already existed
    Existing(PathBuf),
}

impl TestDir {
    pub fn path(&self) -> &Path {
        match self {
            Self::InPlace(path) | Self::Created(path) | Self::Existing(path) => path,
        }
    }
}

impl Layout {
    /// Resolve directories from the working directory. Does not touch the filesystem.
    pub fn resolve(working_dir: impl Into<PathBuf>) -> Self {
        let working_dir = working_dir.into();
        let in_test_dir = working_dir
            .file_name()
            .is_some_and(|name| name == TEST_DIR_NAME);

        let layout = if in_test_dir {
            let base_dir = working_dir
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| working_dir.clone());
            Self {
                test_dir: working_dir,
                base_dir,
                in_test_dir,
            }
        } else {
            Self {
                test_dir: working_dir.join(TEST_DIR_NAME),
                base_dir: working_dir,
                in_test_dir,
            }
        };

        debug!(
            test_dir = %layout.test_dir.display(),
            base_dir = %layout.base_dir.display(),
            in_test_dir,
            "resolved layout"
        );
        layout
    }

    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    /// Directory holding the class sources.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn in_test_dir(&self) -> bool {
        self.in_test_dir
    }

    /// Make sure the test directory exists.
    ///
    /// Only "already exists" is tolerated; any other failure is an error.
    pub fn ensure_test_dir(&self) -> Result<TestDir> {
        if self.in_test_dir {
            return Ok(TestDir::InPlace(self.test_dir.clone()));
        }

        match fs::create_dir(&self.test_dir) {
            Ok(()) => {
                debug!(path = %self.test_dir.display(), "created test directory");
                Ok(TestDir::Created(self.test_dir.clone()))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Ok(TestDir::Existing(self.test_dir.clone()))
            }
            Err(e) => Err(Error::create_dir(&self.test_dir, e)),
        }
    }
}
