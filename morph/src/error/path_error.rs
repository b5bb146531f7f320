/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::invalid_operation::*;
use super::parse_error::*;

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while reading or editing a path
///
#[derive(Clone, PartialEq, Debug)]
pub enum PathError {
    /// The path data was malformed
    Parse(ParseError),

    /// The requested edit is not possible on the path in its current state
    InvalidOperation(InvalidOperation),

    /// A subpath or command index was outside the valid range
    IndexOutOfRange { index: usize, len: usize },
}

impl PathError {
    ///
    /// Returns an error if `index` is not a valid index into a list of length `len`
    ///
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), PathError> {
        if index < len {
            Ok(())
        } else {
            Err(PathError::IndexOutOfRange { index, len })
        }
    }
}

impl From<ParseError> for PathError {
    fn from(error: ParseError) -> PathError {
        PathError::Parse(error)
    }
}

impl From<InvalidOperation> for PathError {
    fn from(error: InvalidOperation) -> PathError {
        PathError::InvalidOperation(error)
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Parse(error) => write!(f, "{}", error),
            PathError::InvalidOperation(operation) => write!(f, "invalid operation: {}", operation),
            PathError::IndexOutOfRange { index, len } => write!(f, "index {} is out of range (length {})", index, len),
        }
    }
}

impl Error for PathError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PathError::Parse(error) => Some(error),
            _ => None,
        }
    }
}
