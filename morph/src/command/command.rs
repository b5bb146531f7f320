/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::command_id::*;
use crate::error::*;

use flo_morph_curves::bezier::*;
use flo_morph_curves::*;

use smallvec::*;

///
/// The kinds of command that can appear in a path
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CommandKind {
    /// Starts a new subpath (1 point)
    Move,

    /// A straight line to a point (1 point)
    Line,

    /// A quadratic bezier curve (control point, end point)
    Quadratic,

    /// A cubic bezier curve (2 control points, end point)
    Cubic,

    /// A straight line back to the start of the subpath (no points)
    Close,
}

impl CommandKind {
    ///
    /// The number of points that a command of this kind carries
    ///
    #[inline]
    pub fn num_points(&self) -> usize {
        match self {
            CommandKind::Move => 1,
            CommandKind::Line => 1,
            CommandKind::Quadratic => 2,
            CommandKind::Cubic => 3,
            CommandKind::Close => 0,
        }
    }

    ///
    /// The letter used for this command in path data
    ///
    #[inline]
    pub fn letter(&self) -> char {
        match self {
            CommandKind::Move => 'M',
            CommandKind::Line => 'L',
            CommandKind::Quadratic => 'Q',
            CommandKind::Cubic => 'C',
            CommandKind::Close => 'Z',
        }
    }

    ///
    /// The order of the segment drawn by a command of this kind (move commands draw nothing)
    ///
    #[inline]
    pub fn order(&self) -> Option<SegmentOrder> {
        match self {
            CommandKind::Move => None,
            CommandKind::Line | CommandKind::Close => Some(SegmentOrder::Linear),
            CommandKind::Quadratic => Some(SegmentOrder::Quadratic),
            CommandKind::Cubic => Some(SegmentOrder::Cubic),
        }
    }

    ///
    /// The drawing command that draws a segment of the specified order
    ///
    #[inline]
    pub fn for_order(order: SegmentOrder) -> CommandKind {
        match order {
            SegmentOrder::Linear => CommandKind::Line,
            SegmentOrder::Quadratic => CommandKind::Quadratic,
            SegmentOrder::Cubic => CommandKind::Cubic,
        }
    }
}

///
/// A single path command with absolute coordinates
///
/// The points of a command do not include its start point, which is the end point of the command before it.
/// Two commands are equal if they have the same kind and the same points: their IDs are not compared.
///
#[derive(Clone, Debug)]
pub struct Command {
    kind: CommandKind,
    points: SmallVec<[Coord2; 3]>,
    id: CommandId,

    /// The end point of this command was created by splitting a command in two
    split_point: bool,
}

impl Command {
    ///
    /// Creates a new command with a new ID
    ///
    /// The number of points must match the kind of command (see `CommandKind::num_points()`)
    ///
    pub fn new(kind: CommandKind, points: impl IntoIterator<Item = Coord2>) -> Result<Command, PathError> {
        let points = points.into_iter().collect::<SmallVec<[Coord2; 3]>>();

        if points.len() != kind.num_points() {
            return Err(InvalidOperation::InvalidArity {
                kind,
                count: points.len(),
            }
            .into());
        }

        Ok(Command::with_id(kind, points, CommandId::new(), false))
    }

    ///
    /// Creates a command with a known ID (the points must already match the kind)
    ///
    pub(crate) fn with_id(kind: CommandKind, points: SmallVec<[Coord2; 3]>, id: CommandId, split_point: bool) -> Command {
        extra_check!(points.len() == kind.num_points(), "{:?} command with {} points", kind, points.len());

        Command {
            kind,
            points,
            id,
            split_point,
        }
    }

    pub(crate) fn move_to(point: Coord2, id: CommandId) -> Command {
        Command::with_id(CommandKind::Move, smallvec![point], id, false)
    }

    ///
    /// Creates the command that draws a segment (the start point of the segment is discarded)
    ///
    pub(crate) fn from_segment(segment: &Segment, id: CommandId, split_point: bool) -> Command {
        Command::with_id(
            CommandKind::for_order(segment.order()),
            segment.following_points(),
            id,
            split_point,
        )
    }

    #[inline]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    #[inline]
    pub fn id(&self) -> CommandId {
        self.id
    }

    ///
    /// True if the end point of this command was created by a split (and so the command can be unsplit)
    ///
    #[inline]
    pub fn is_split_point(&self) -> bool {
        self.split_point
    }

    ///
    /// The point where this command finishes, or `None` for a close command (which finishes at the start of its subpath)
    ///
    #[inline]
    pub fn end_point(&self) -> Option<Coord2> {
        self.points.last().copied()
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Command) -> bool {
        self.kind == other.kind && self.points == other.points
    }
}
