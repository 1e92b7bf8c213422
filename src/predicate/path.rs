//! Path predicates
//!
//! Syntactic checks only - nothing here touches the filesystem beyond
//! resolving the current directory for the absolute-path comparison. The
//! existence checks live in [`crate::fs`].
//!
//! A missing (`None`) path is defined as valid and as absolute; empty or
//! whitespace-only input is invalid. Which characters are reserved is
//! platform-dependent and deliberately deferred to the host.

use std::ffi::OsStr;

use super::combinators::{Predicate, TryPredicate};
use crate::error::{GuardError, Polarity};

#[cfg(windows)]
fn is_invalid_path_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|') || (c as u32) < 32
}

#[cfg(not(windows))]
fn is_invalid_path_char(c: char) -> bool {
    c == '\0'
}

#[cfg(windows)]
fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/') || (c as u32) < 32
}

#[cfg(not(windows))]
fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '\0' | '/')
}

pub(crate) fn is_valid_path_str(value: &str) -> bool {
    if value.trim().is_empty() {
        false
    } else {
        !value.chars().any(is_invalid_path_char)
    }
}

fn is_valid_file_name_str(value: &str) -> bool {
    if value.trim().is_empty() {
        false
    } else {
        !value.chars().any(is_invalid_file_name_char)
    }
}

/// Predicate that checks a string is a syntactically valid file path.
///
/// `None` is valid; empty or whitespace-only is invalid; otherwise valid
/// iff no character belongs to the platform's reserved path set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidFilePath;

/// Predicate that checks a string is a syntactically valid directory path.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidDirectoryPath;

/// Predicate that checks a string is a syntactically valid file name.
///
/// File names reserve more characters than paths (path separators among
/// them).
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidFileName;

macro_rules! impl_path_validity {
    ($struct:ident, $check:ident, $phrase:literal) => {
        impl Predicate<str> for $struct {
            #[inline]
            fn test(&self, value: &str) -> bool {
                $check(value)
            }

            fn phrase(&self) -> String {
                String::from($phrase)
            }
        }

        impl Predicate<String> for $struct {
            #[inline]
            fn test(&self, value: &String) -> bool {
                $check(value)
            }

            fn phrase(&self) -> String {
                String::from($phrase)
            }
        }

        impl Predicate<&str> for $struct {
            #[inline]
            fn test(&self, value: &&str) -> bool {
                $check(value)
            }

            fn phrase(&self) -> String {
                String::from($phrase)
            }
        }

        impl Predicate<Option<String>> for $struct {
            // A missing path is valid.
            #[inline]
            fn test(&self, value: &Option<String>) -> bool {
                value.as_ref().is_none_or(|v| $check(v))
            }

            fn phrase(&self) -> String {
                String::from($phrase)
            }
        }

        impl Predicate<Option<&str>> for $struct {
            #[inline]
            fn test(&self, value: &Option<&str>) -> bool {
                value.is_none_or($check)
            }

            fn phrase(&self) -> String {
                String::from($phrase)
            }
        }
    };
}

impl_path_validity!(ValidFilePath, is_valid_path_str, "be a valid file path");
impl_path_validity!(
    ValidDirectoryPath,
    is_valid_path_str,
    "be a valid directory path"
);
impl_path_validity!(ValidFileName, is_valid_file_name_str, "be a valid file name");

/// Create a predicate that checks for a syntactically valid file path.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(valid_file_path().test("logs/app.log"));
/// assert!(!valid_file_path().test("   "));
/// assert!(!valid_file_path().test("nul\0char"));
/// // A missing path is valid:
/// assert!(valid_file_path().test(&None::<&str>));
/// ```
pub fn valid_file_path() -> ValidFilePath {
    ValidFilePath
}

/// Create a predicate that checks for a syntactically valid directory path.
pub fn valid_directory_path() -> ValidDirectoryPath {
    ValidDirectoryPath
}

/// Create a predicate that checks for a syntactically valid file name.
///
/// # Example
///
/// ```rust
/// use breakwater::predicate::*;
///
/// assert!(valid_file_name().test("app.log"));
/// assert!(!valid_file_name().test("logs/app.log"));
/// ```
pub fn valid_file_name() -> ValidFileName {
    ValidFileName
}

#[derive(Clone, Copy, Debug)]
enum PathKind {
    File,
    Directory,
}

impl PathKind {
    fn validity_message(self) -> &'static str {
        match self {
            PathKind::File => "Value must be a valid file path.",
            PathKind::Directory => "Value must be a valid directory path.",
        }
    }
}

/// Syntactic absoluteness: the input equals its platform-resolved full path.
///
/// Relative paths resolve against the current directory; no existence check
/// is performed. Invalid path syntax is an `InvalidArgument`, which is why
/// the absolute-path predicates are [`TryPredicate`]s.
fn is_absolute_path_str(value: &str, kind: PathKind) -> Result<bool, GuardError> {
    if !is_valid_path_str(value) {
        return Err(GuardError::invalid_argument(kind.validity_message()));
    }

    let resolved = std::path::absolute(value)
        .map_err(|_| GuardError::invalid_argument(kind.validity_message()))?;

    Ok(resolved.as_os_str() == OsStr::new(value))
}

/// Predicate that checks a string is an absolute file path.
///
/// `None` is absolute; a syntactically invalid path fails with
/// `InvalidArgument`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsoluteFilePath;

/// Predicate that checks a string is an absolute directory path.
#[derive(Clone, Copy, Debug, Default)]
pub struct AbsoluteDirectoryPath;

macro_rules! impl_absolute_path {
    ($struct:ident, $kind:expr, $phrase:literal) => {
        impl TryPredicate<str> for $struct {
            fn try_test(&self, value: &str) -> Result<bool, GuardError> {
                is_absolute_path_str(value, $kind)
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(format!(
                    "Value {} {}.",
                    polarity.verb(),
                    $phrase
                ))
            }
        }

        impl TryPredicate<String> for $struct {
            fn try_test(&self, value: &String) -> Result<bool, GuardError> {
                is_absolute_path_str(value, $kind)
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(format!(
                    "Value {} {}.",
                    polarity.verb(),
                    $phrase
                ))
            }
        }

        impl TryPredicate<&str> for $struct {
            fn try_test(&self, value: &&str) -> Result<bool, GuardError> {
                is_absolute_path_str(value, $kind)
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(format!(
                    "Value {} {}.",
                    polarity.verb(),
                    $phrase
                ))
            }
        }

        impl TryPredicate<Option<String>> for $struct {
            // A missing path is absolute.
            fn try_test(&self, value: &Option<String>) -> Result<bool, GuardError> {
                match value {
                    Some(v) => is_absolute_path_str(v, $kind),
                    None => Ok(true),
                }
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(format!(
                    "Value {} {}.",
                    polarity.verb(),
                    $phrase
                ))
            }
        }

        impl TryPredicate<Option<&str>> for $struct {
            fn try_test(&self, value: &Option<&str>) -> Result<bool, GuardError> {
                match value {
                    Some(v) => is_absolute_path_str(v, $kind),
                    None => Ok(true),
                }
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(format!(
                    "Value {} {}.",
                    polarity.verb(),
                    $phrase
                ))
            }
        }
    };
}

impl_absolute_path!(
    AbsoluteFilePath,
    PathKind::File,
    "be an absolute file path"
);
impl_absolute_path!(
    AbsoluteDirectoryPath,
    PathKind::Directory,
    "be an absolute directory path"
);

/// Create a predicate that checks for an absolute file path.
///
/// # Example
///
/// ```rust
/// use breakwater::prelude::*;
///
/// # #[cfg(unix)] {
/// assert_eq!("/etc/hosts".must(absolute_file_path()), Ok("/etc/hosts"));
/// assert!(".".must(absolute_file_path()).is_err());
/// # }
/// ```
pub fn absolute_file_path() -> AbsoluteFilePath {
    AbsoluteFilePath
}

/// Create a predicate that checks for an absolute directory path.
pub fn absolute_directory_path() -> AbsoluteDirectoryPath {
    AbsoluteDirectoryPath
}
