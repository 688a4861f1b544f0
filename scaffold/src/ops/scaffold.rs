//! Scaffold operation - create a test skeleton and wire it into the class source.

use std::path::Path;

use scaffold_core::{ClassName, ScaffoldGenerator};

use crate::reports::{IncludeStatus, ScaffoldReport, TestFileStatus};

/// Options for the scaffold operation.
pub struct ScaffoldOptions<'a> {
    /// Directory the tool was invoked from.
    pub working_dir: &'a Path,
    /// Class to scaffold a test for.
    pub class_name: &'a ClassName,
}

/// Execute the scaffold operation.
///
/// A missing class source is reported, not returned as an error.
pub fn scaffold(opts: ScaffoldOptions) -> scaffold_core::Result<ScaffoldReport> {
    let generator = ScaffoldGenerator::new(opts.working_dir);
    let result = generator.run(opts.class_name)?;

    let test_file = if result.test_file.created() {
        TestFileStatus::Created(result.test_file.path)
    } else {
        TestFileStatus::AlreadyExists(result.test_file.path)
    };

    let include = result.include.map(|include| {
        if include.appended() {
            IncludeStatus::Appended(include.path)
        } else {
            IncludeStatus::NotFound(include.path)
        }
    });

    Ok(ScaffoldReport {
        test_dir: result.test_file.test_dir,
        test_file,
        include,
    })
}
