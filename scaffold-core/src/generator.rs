use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    ClassName, GeneratedFile, IncludeGuard, Layout, Result, TestClassFile, TestDir, WriteResult,
};

/// Outcome of creating the test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFileResult {
    pub test_dir: TestDir,
    pub path: PathBuf,
    pub write: WriteResult,
}

impl TestFileResult {
    /// Whether a new test file was written (`false` if it already existed).
    pub fn created(&self) -> bool {
        self.write == WriteResult::Written
    }
}

/// Outcome of wiring the include guard into the class source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeResult {
    pub path: PathBuf,
    pub write: WriteResult,
}

impl IncludeResult {
    /// Whether the include guard was appended (`false` if the source was not found).
    pub fn appended(&self) -> bool {
        self.write == WriteResult::Appended
    }
}

/// Outcome of a full scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldResult {
    pub test_file: TestFileResult,
    /// `None` when the test file already existed and wiring was skipped.
    pub include: Option<IncludeResult>,
}

/// Creates test skeletons and wires them into class sources.
pub struct ScaffoldGenerator {
    layout: Layout,
}

impl ScaffoldGenerator {
    /// Create a generator rooted at the given working directory.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            layout: Layout::resolve(working_dir),
        }
    }

    /// Write `test_<ClassName>.cpp` into the test directory unless it exists.
    pub fn create_test_file(&self, class_name: &ClassName) -> Result<TestFileResult> {
        let test_dir = self.layout.ensure_test_dir()?;
        let file = TestClassFile::new(class_name.clone());
        let path = file.path(test_dir.path());
        let write = file.write(test_dir.path())?;

        debug!(class = %class_name, path = %path.display(), ?write, "test file");
        Ok(TestFileResult {
            test_dir,
            path,
            write,
        })
    }

    /// Append the include guard to the class source file if it exists.
    pub fn add_test_include(&self, class_name: &ClassName) -> Result<IncludeResult> {
        let base = self.layout.base_dir();
        let file = IncludeGuard::new(class_name.clone());
        let path = file.path(base);
        let write = file.write(base)?;

        debug!(class = %class_name, path = %path.display(), ?write, "include guard");
        Ok(IncludeResult { path, write })
    }

    /// Create the test file and, only if it was newly created, wire it in.
    ///
    /// Re-running for an already scaffolded class therefore never appends a
    /// second include guard.
    pub fn run(&self, class_name: &ClassName) -> Result<ScaffoldResult> {
        let test_file = self.create_test_file(class_name)?;

        let include = if test_file.created() {
            Some(self.add_test_include(class_name)?)
        } else {
            info!(class = %class_name, "test file exists, skipping include");
            None
        };

        Ok(ScaffoldResult { test_file, include })
    }
}
