/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::command::*;

use std::fmt;

///
/// An edit that is not possible in the current state of a path
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum InvalidOperation {
    /// Tried to unsplit a command whose end point was not created by a split
    NotSplitPoint,

    /// The two paths do not have the same structure
    NotMorphable,

    /// The operation needs a closed subpath
    OpenSubPath,

    /// The operation needs an open subpath
    ClosedSubPath,

    /// The transform would collapse the path onto a line or a point
    SingularTransform,

    /// Move commands cannot be split
    CannotSplitCommand,

    /// Move commands cannot be converted, and commands can only be converted to lines or curves
    CannotConvert,

    /// Converting to the requested kind would change the shape of the command
    LossyConversion,

    /// Split positions must lie strictly between 0 and 1
    InvalidSplitValue,

    /// A filled subpath must be split between two different commands, the first one before the second
    InvalidSplitRange,

    /// A command was created with the wrong number of points for its kind
    InvalidArity { kind: CommandKind, count: usize },

    /// A subpath must start with its only move command, and can only end with a close command
    MalformedSubPath,

    /// The command is not a segment created by splitting a filled subpath
    NotFilledSplitSegment,

    /// One of the halves of a split filled subpath has been deleted or split again, so they can't be rejoined
    IncompleteFilledSplit,

    /// A collapsing subpath needs at least one command
    EmptyCollapsingSubPath,
}

impl fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidOperation::NotSplitPoint => write!(f, "command was not created by a split"),
            InvalidOperation::NotMorphable => write!(f, "paths are not morphable"),
            InvalidOperation::OpenSubPath => write!(f, "subpath is not closed"),
            InvalidOperation::ClosedSubPath => write!(f, "subpath is closed"),
            InvalidOperation::SingularTransform => write!(f, "transform is singular"),
            InvalidOperation::CannotSplitCommand => write!(f, "move commands cannot be split"),
            InvalidOperation::CannotConvert => write!(f, "command cannot be converted to that kind"),
            InvalidOperation::LossyConversion => write!(f, "conversion would change the shape of the command"),
            InvalidOperation::InvalidSplitValue => write!(f, "split positions must be between 0 and 1"),
            InvalidOperation::InvalidSplitRange => write!(f, "invalid pair of commands to split between"),
            InvalidOperation::InvalidArity { kind, count } => write!(f, "{:?} command cannot have {} points", kind, count),
            InvalidOperation::MalformedSubPath => write!(f, "malformed subpath"),
            InvalidOperation::NotFilledSplitSegment => write!(f, "command is not a filled split segment"),
            InvalidOperation::IncompleteFilledSplit => write!(f, "both halves of the split subpath are needed to rejoin it"),
            InvalidOperation::EmptyCollapsingSubPath => write!(f, "collapsing subpaths need at least one command"),
        }
    }
}
