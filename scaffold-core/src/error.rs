use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for scaffold operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("class name must not be empty")]
    #[diagnostic(
        code(scaffold::empty_class_name),
        help("pass the PascalCase name of the class to test, e.g. `scaffold-test MyClass`")
    )]
    EmptyClassName,

    #[error("`{name}` is not a valid class name")]
    #[diagnostic(
        code(scaffold::invalid_class_name),
        help(
            "class names must start with a letter or `_` and contain only ASCII letters, digits and `_`"
        )
    )]
    InvalidClassName { name: String },

    #[error("failed to create test directory `{}`", .path.display())]
    #[diagnostic(code(scaffold::create_dir))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{}`", .path.display())]
    #[diagnostic(code(scaffold::write))]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to `{}`", .path.display())]
    #[diagnostic(code(scaffold::append))]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Self::CreateDir {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Self::Write {
            path: path.into(),
            source,
        })
    }

    pub(crate) fn append(path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Self::Append {
            path: path.into(),
            source,
        })
    }
}
