/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// The reason that path data could not be parsed
///
#[derive(Clone, PartialEq, Debug)]
pub enum ParseErrorKind {
    /// A letter that is not a path command
    UnknownCommand(char),

    /// Something that should have been a number but wasn't
    InvalidNumber,

    /// An arc flag that was not '0' or '1'
    InvalidFlag,

    /// A command was followed by a number of arguments that doesn't fit it
    WrongArgumentCount { command: char, count: usize },

    /// The path data did not start with a move command
    MissingMoveTo,
}

///
/// Error produced while parsing path data
///
#[derive(Clone, PartialEq, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,

    /// Byte offset into the path data where the problem was found
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::UnknownCommand(letter) => write!(f, "unknown path command '{}'", letter)?,
            ParseErrorKind::InvalidNumber => write!(f, "invalid number")?,
            ParseErrorKind::InvalidFlag => write!(f, "arc flags must be 0 or 1")?,
            ParseErrorKind::WrongArgumentCount { command, count } => {
                write!(f, "'{}' cannot take {} arguments", command, count)?
            }
            ParseErrorKind::MissingMoveTo => write!(f, "path data must start with a move command")?,
        }

        write!(f, " at position {}", self.position)
    }
}

impl Error for ParseError {}
