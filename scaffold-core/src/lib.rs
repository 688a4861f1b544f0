//! Core of the unit-test scaffolder.
//!
//! Derives where a class's test file and source file live, renders the fixed
//! `SubTest` templates and writes them to disk.

mod error;
mod file;
mod generator;
mod layout;
mod naming;
mod templates;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, WriteMode, WriteResult};
pub use generator::{IncludeResult, ScaffoldGenerator, ScaffoldResult, TestFileResult};
pub use layout::{Layout, TEST_DIR_NAME, TestDir};
pub use naming::{ClassName, lower_first};
pub use templates::{
    IncludeGuard, RUN_UNIT_TESTS_FLAG, TestClassFile, render_include_guard, render_test_class,
};
