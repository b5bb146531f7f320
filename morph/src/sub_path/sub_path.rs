/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::command::*;
use crate::error::*;

use flo_morph_curves::bezier::*;
use flo_morph_curves::*;

///
/// A single contour of a path: a move command followed by drawing commands
///
/// A subpath is closed when it finishes where it started, whether or not it ends with a close command.
/// Collapsing subpaths are placeholders that exist only so that two paths have the same structure: they
/// are hidden while they have no area.
///
#[derive(Clone, Debug)]
pub struct SubPath {
    commands: Vec<Command>,
    collapsing: bool,
}

impl SubPath {
    ///
    /// Creates a subpath from a list of commands
    ///
    /// The first command must be the only move command, and only the last command may be a close command.
    ///
    pub fn new(commands: Vec<Command>) -> Result<SubPath, PathError> {
        let well_formed = match commands.split_first() {
            Some((first, rest)) => {
                first.kind() == CommandKind::Move
                    && rest.iter().all(|command| command.kind() != CommandKind::Move)
                    && rest.iter().rev().skip(1).all(|command| command.kind() != CommandKind::Close)
            }

            None => false,
        };

        if well_formed {
            Ok(SubPath::from_commands(commands, false))
        } else {
            Err(InvalidOperation::MalformedSubPath.into())
        }
    }

    pub(crate) fn from_commands(commands: Vec<Command>, collapsing: bool) -> SubPath {
        SubPath { commands, collapsing }
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    ///
    /// The point this subpath starts at
    ///
    #[inline]
    pub fn start_point(&self) -> Coord2 {
        self.commands
            .first()
            .and_then(|command| command.end_point())
            .unwrap_or_else(Coord2::origin)
    }

    ///
    /// The point this subpath finishes at
    ///
    pub fn end_point(&self) -> Coord2 {
        self.commands
            .iter()
            .rev()
            .find_map(|command| match command.kind() {
                CommandKind::Close => Some(self.start_point()),
                _ => command.end_point(),
            })
            .unwrap_or_else(Coord2::origin)
    }

    ///
    /// True if this subpath draws something and finishes where it started
    ///
    pub fn is_closed(&self) -> bool {
        self.commands.len() > 1 && self.end_point().is_near_to(&self.start_point(), SMALL_DISTANCE)
    }

    #[inline]
    pub fn is_collapsing(&self) -> bool {
        self.collapsing
    }

    ///
    /// Hidden subpaths are not drawn and are skipped by hit testing
    ///
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.collapsing
    }

    ///
    /// The segments drawn by this subpath, along with the index of the command that draws each one
    ///
    pub fn segments(&self) -> impl '_ + Iterator<Item = (usize, Segment)> {
        let start = self.start_point();
        let mut current = start;

        self.commands.iter().enumerate().filter_map(move |(idx, command)| {
            let segment = match command.kind() {
                CommandKind::Move => None,
                CommandKind::Close => Some(Segment::Line(current, start)),
                _ => Segment::from_points(current, command.points()),
            };

            if let Some(segment) = &segment {
                current = segment.end_point();
            } else if let Some(end_point) = command.end_point() {
                current = end_point;
            }

            segment.map(|segment| (idx, segment))
        })
    }
}

impl PartialEq for SubPath {
    fn eq(&self, other: &SubPath) -> bool {
        self.commands == other.commands
    }
}
