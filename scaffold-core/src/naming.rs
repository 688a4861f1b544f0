//! Class name validation and the file names derived from it.

use std::{fmt, str::FromStr};

use crate::Error;

/// Lowercase only the first character (e.g., "FooBar" -> "fooBar")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Name of the class a test is scaffolded for.
///
/// Always a non-empty C++ identifier, since it is substituted into class
/// names and file names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `test_<ClassName>.cpp`
    pub fn test_file_name(&self) -> String {
        format!("test_{}.cpp", self.0)
    }

    /// Source file of the class under test, e.g. `fooBar.cpp` for `FooBar`.
    pub fn implementation_file_name(&self) -> String {
        format!("{}.cpp", lower_first(&self.0))
    }

    /// Include path of the test file, relative to the implementation file.
    pub fn include_path(&self) -> String {
        format!("test/{}", self.test_file_name())
    }
}

impl FromStr for ClassName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return Err(Error::EmptyClassName);
        };

        let valid = (first.is_ascii_alphabetic() || first == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(Error::InvalidClassName { name: s.to_string() });
        }

        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ClassName {
        s.parse().unwrap()
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("FooBar"), "fooBar");
        assert_eq!(lower_first("X"), "x");
        assert_eq!(lower_first("fooBar"), "fooBar");
        assert_eq!(lower_first("HTTPClient"), "hTTPClient");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_derived_file_names() {
        let class = name("FooBar");
        assert_eq!(class.test_file_name(), "test_FooBar.cpp");
        assert_eq!(class.implementation_file_name(), "fooBar.cpp");
        assert_eq!(class.include_path(), "test/test_FooBar.cpp");

        assert_eq!(name("X").implementation_file_name(), "x.cpp");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            "".parse::<ClassName>(),
            Err(Error::EmptyClassName)
        ));
    }

    #[test]
    fn test_non_identifier_rejected() {
        for bad in ["1Widget", "My Class", "../Widget", "Foo-Bar", "Foo.cpp"] {
            match bad.parse::<ClassName>() {
                Err(Error::InvalidClassName { name }) => assert_eq!(name, bad),
                other => panic!("expected InvalidClassName for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_identifiers_accepted() {
        for good in ["Widget", "_Private", "Foo_Bar2", "x"] {
            assert_eq!(name(good).as_str(), good);
        }
    }
}
