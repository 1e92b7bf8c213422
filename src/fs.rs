//! Filesystem predicates
//!
//! The one place external state leaks into the predicate layer: existence
//! and empty-directory checks issue blocking, read-only filesystem queries.
//! Inputs must be syntactically valid paths first - an existence check on
//! an invalid path is an `InvalidArgument`, not `false` - which is why
//! everything here is a [`TryPredicate`].
//!
//! # Example
//!
//! ```rust
//! use breakwater::prelude::*;
//!
//! assert_eq!("no/such/file".cannot(file_exists()), Ok("no/such/file"));
//! assert!("   ".cannot(file_exists()).is_err()); // invalid path syntax
//! ```

use std::fs;
use std::path::Path;

use crate::error::{GuardError, Polarity};
use crate::predicate::path::is_valid_path_str;
use crate::predicate::TryPredicate;

/// Whether a file exists at `value`.
///
/// `None` means no path, so nothing exists there (`Ok(false)`). A
/// syntactically invalid path fails with `InvalidArgument`.
pub fn file_exists_at(value: Option<&str>) -> Result<bool, GuardError> {
    match value {
        None => Ok(false),
        Some(v) => {
            if !is_valid_path_str(v) {
                Err(GuardError::invalid_argument(
                    "Value must be a valid file path.",
                ))
            } else {
                Ok(Path::new(v).is_file())
            }
        }
    }
}

/// Whether a directory exists at `value`.
///
/// Same contract as [`file_exists_at`].
pub fn directory_exists_at(value: Option<&str>) -> Result<bool, GuardError> {
    match value {
        None => Ok(false),
        Some(v) => {
            if !is_valid_path_str(v) {
                Err(GuardError::invalid_argument(
                    "Value must be a valid directory path.",
                ))
            } else {
                Ok(Path::new(v).is_dir())
            }
        }
    }
}

/// Whether the directory at `value` has zero entries.
///
/// `None` is vacuously empty, and so is a directory that does not exist.
pub fn is_empty_directory_at(value: Option<&str>) -> Result<bool, GuardError> {
    match value {
        None => Ok(true),
        Some(v) => {
            if !is_valid_path_str(v) {
                return Err(GuardError::invalid_argument(
                    "Value must be a valid directory path.",
                ));
            }

            match fs::read_dir(v) {
                Ok(mut entries) => Ok(entries.next().is_none()),
                // Nothing there, so nothing in it.
                Err(_) => Ok(true),
            }
        }
    }
}

/// Predicate that checks whether a file exists at the path.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileExists;

/// Predicate that checks whether a directory exists at the path.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryExists;

/// Predicate that checks whether the directory at the path is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyDirectory;

macro_rules! impl_fs_predicate {
    ($struct:ident, $check:ident, $must:literal, $cannot:literal) => {
        impl TryPredicate<str> for $struct {
            fn try_test(&self, value: &str) -> Result<bool, GuardError> {
                $check(Some(value))
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(match polarity {
                    Polarity::Must => $must,
                    Polarity::Cannot => $cannot,
                })
            }
        }

        impl TryPredicate<String> for $struct {
            fn try_test(&self, value: &String) -> Result<bool, GuardError> {
                $check(Some(value))
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(match polarity {
                    Polarity::Must => $must,
                    Polarity::Cannot => $cannot,
                })
            }
        }

        impl TryPredicate<&str> for $struct {
            fn try_test(&self, value: &&str) -> Result<bool, GuardError> {
                $check(Some(value))
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(match polarity {
                    Polarity::Must => $must,
                    Polarity::Cannot => $cannot,
                })
            }
        }

        impl TryPredicate<Option<String>> for $struct {
            fn try_test(&self, value: &Option<String>) -> Result<bool, GuardError> {
                $check(value.as_deref())
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(match polarity {
                    Polarity::Must => $must,
                    Polarity::Cannot => $cannot,
                })
            }
        }

        impl TryPredicate<Option<&str>> for $struct {
            fn try_test(&self, value: &Option<&str>) -> Result<bool, GuardError> {
                $check(*value)
            }

            fn error(&self, polarity: Polarity) -> GuardError {
                GuardError::invalid_argument(match polarity {
                    Polarity::Must => $must,
                    Polarity::Cannot => $cannot,
                })
            }
        }
    };
}

impl_fs_predicate!(
    FileExists,
    file_exists_at,
    "File must exist.",
    "File cannot exist."
);
impl_fs_predicate!(
    DirectoryExists,
    directory_exists_at,
    "Directory must exist.",
    "Directory cannot exist."
);
impl_fs_predicate!(
    EmptyDirectory,
    is_empty_directory_at,
    "Value must be an empty directory.",
    "Value cannot be an empty directory."
);

/// Create a predicate that checks for file existence.
pub fn file_exists() -> FileExists {
    FileExists
}

/// Create a predicate that checks for directory existence.
pub fn directory_exists() -> DirectoryExists {
    DirectoryExists
}

/// Create a predicate that checks for an empty (or absent) directory.
pub fn empty_directory() -> EmptyDirectory {
    EmptyDirectory
}
