//! Scaffold report data structures.

use std::path::PathBuf;

use scaffold_core::{RUN_UNIT_TESTS_FLAG, TestDir};

use super::output::{Output, Report};

/// What happened to the test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestFileStatus {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// What happened to the class source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeStatus {
    Appended(PathBuf),
    NotFound(PathBuf),
}

/// Report data from scaffolding one class.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Test directory and whether it had to be created.
    pub test_dir: TestDir,
    pub test_file: TestFileStatus,
    /// `None` when wiring was skipped because the test file already existed.
    pub include: Option<IncludeStatus>,
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.test_dir {
            TestDir::Created(path) => out.status(&format!("Creating dir {}", path.display())),
            TestDir::Existing(path) => out.status(&format!("Using dir {}", path.display())),
            TestDir::InPlace(_) => {}
        }

        match &self.test_file {
            TestFileStatus::Created(path) => {
                out.status(&format!("Creating file {}", path.display()));
            }
            TestFileStatus::AlreadyExists(path) => {
                out.status(&format!(
                    "Test file {} already exists -- not creating it.",
                    path.display()
                ));
            }
        }

        match &self.include {
            Some(IncludeStatus::Appended(path)) => {
                out.status(&format!(
                    "Adding include of the unit tests to {}",
                    path.display()
                ));
                out.note(&format!(
                    "the tests are only compiled when `{}` is defined",
                    RUN_UNIT_TESTS_FLAG
                ));
            }
            Some(IncludeStatus::NotFound(path)) => {
                out.error(&format!("{} not found", path.display()));
            }
            None => {}
        }
    }
}
