//! Fixed templates for the generated test class and the include guard.
//!
//! Both texts must match the existing `SubTest` convention byte for byte, so
//! they live in template files and only the `{ClassName}` placeholder is
//! substituted.

use std::path::{Path, PathBuf};

use crate::{ClassName, GeneratedFile, WriteMode};

const PLACEHOLDER: &str = "{ClassName}";

const TEST_CLASS_TEMPLATE: &str = include_str!("../templates/test_class.cpp");
const INCLUDE_GUARD_TEMPLATE: &str = include_str!("../templates/include_guard.cpp");

/// Preprocessor flag that enables compiling the included unit tests.
pub const RUN_UNIT_TESTS_FLAG: &str = "qRunUnitTests";

/// Render the `Test_<ClassName>` skeleton.
pub fn render_test_class(class_name: &ClassName) -> String {
    TEST_CLASS_TEMPLATE.replace(PLACEHOLDER, class_name.as_str())
}

/// Render the conditional include of `test/test_<ClassName>.cpp`.
pub fn render_include_guard(class_name: &ClassName) -> String {
    INCLUDE_GUARD_TEMPLATE.replace(PLACEHOLDER, class_name.as_str())
}

/// The `test_<ClassName>.cpp` file, placed in the test directory.
pub struct TestClassFile {
    pub class_name: ClassName,
}

impl TestClassFile {
    pub fn new(class_name: ClassName) -> Self {
        Self { class_name }
    }
}

impl GeneratedFile for TestClassFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.class_name.test_file_name())
    }

    fn mode(&self) -> WriteMode {
        WriteMode::CreateNew
    }

    fn render(&self) -> String {
        render_test_class(&self.class_name)
    }
}

/// Include guard appended to the class source file.
pub struct IncludeGuard {
    pub class_name: ClassName,
}

impl IncludeGuard {
    pub fn new(class_name: ClassName) -> Self {
        Self { class_name }
    }
}

impl GeneratedFile for IncludeGuard {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.class_name.implementation_file_name())
    }

    fn mode(&self) -> WriteMode {
        WriteMode::AppendExisting
    }

    fn render(&self) -> String {
        render_include_guard(&self.class_name)
    }
}
