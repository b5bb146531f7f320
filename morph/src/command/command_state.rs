/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::command::*;
use super::command_id::*;
use crate::error::*;

use flo_morph_curves::bezier::*;
use flo_morph_curves::*;

use smallvec::*;

///
/// One of the pieces that a command has been split into
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Fragment {
    /// Position along the original segment where this fragment ends (the last fragment always ends at 1.0)
    end_t: f64,

    /// The kind of command used to draw this fragment
    kind: CommandKind,

    /// The ID of the command generated for this fragment
    id: CommandId,
}

impl Fragment {
    #[inline]
    pub fn end_t(&self) -> f64 {
        self.end_t
    }

    #[inline]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[inline]
    pub fn id(&self) -> CommandId {
        self.id
    }
}

///
/// The editing history of a single command
///
/// The original geometry of the command is never changed by an edit. Splitting a command adds boundaries
/// between fragments and converting it changes the kind used to draw a fragment, so every edit can be undone
/// exactly by removing the boundary again or by restoring the original kind.
///
#[derive(Clone, PartialEq, Debug)]
pub struct CommandState {
    /// ID of the command this state was created from
    id: CommandId,

    /// Kind of the command this state was created from
    kind: CommandKind,

    /// The geometry of the original command (a zero-length line for a move command)
    segment: Segment,

    /// The fragments of the command, in order along the segment
    fragments: SmallVec<[Fragment; 1]>,

    /// This command is the chord added by splitting a filled subpath
    chord: bool,
}

impl CommandState {
    ///
    /// Creates the state for an unedited command
    ///
    pub(crate) fn new(kind: CommandKind, segment: Segment, id: CommandId) -> CommandState {
        CommandState {
            id,
            kind,
            segment,
            fragments: smallvec![Fragment { end_t: 1.0, kind, id }],
            chord: false,
        }
    }

    pub(crate) fn new_move(point: Coord2, id: CommandId) -> CommandState {
        CommandState::new(CommandKind::Move, Segment::Line(point, point), id)
    }

    ///
    /// Creates the line that joins the two halves of a filled subpath that has been split
    ///
    pub(crate) fn new_chord(from: Coord2, to: Coord2) -> CommandState {
        CommandState {
            chord: true,
            ..CommandState::new(CommandKind::Line, Segment::Line(from, to), CommandId::new())
        }
    }

    ///
    /// The ID of the command this state was created from
    ///
    #[inline]
    pub fn id(&self) -> CommandId {
        self.id
    }

    ///
    /// The kind of the command this state was created from
    ///
    #[inline]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    ///
    /// The geometry of the original command
    ///
    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    ///
    /// True if this is the chord that closes one half of a split filled subpath
    ///
    #[inline]
    pub fn is_chord(&self) -> bool {
        self.chord
    }

    #[inline]
    pub fn is_split(&self) -> bool {
        self.fragments.len() > 1
    }

    ///
    /// True if any fragment is drawn with a different kind of command to the one it was created with
    ///
    pub fn is_converted(&self) -> bool {
        (0..self.fragments.len()).any(|idx| self.fragments[idx].kind != self.default_kind(idx))
    }

    ///
    /// The command this state was created from
    ///
    pub fn original_command(&self) -> Command {
        match self.kind {
            CommandKind::Move => Command::move_to(self.segment.end_point(), self.id),
            CommandKind::Close => Command::with_id(CommandKind::Close, smallvec![], self.id, false),
            _ => Command::from_segment(&self.segment, self.id, false),
        }
    }

    ///
    /// The start and end positions of a fragment along the original segment
    ///
    pub fn fragment_range(&self, index: usize) -> (f64, f64) {
        let start = if index == 0 { 0.0 } else { self.fragments[index - 1].end_t };

        (start, self.fragments[index].end_t)
    }

    ///
    /// The part of the original segment covered by a fragment
    ///
    pub fn fragment_segment(&self, index: usize) -> Segment {
        match self.fragment_range(index) {
            (start, end) if start <= 0.0 && end >= 1.0 => self.segment,
            (start, end) => self.segment.section(start, end),
        }
    }

    ///
    /// The kind of command a fragment is drawn with when it has not been converted
    ///
    /// Only the final fragment of a close command closes the subpath: the fragments before it are lines.
    ///
    pub(crate) fn default_kind(&self, index: usize) -> CommandKind {
        if self.kind == CommandKind::Close && index + 1 < self.fragments.len() {
            CommandKind::Line
        } else {
            self.kind
        }
    }

    ///
    /// Returns this command as it was before it was split or converted
    ///
    pub(crate) fn revert(&self) -> CommandState {
        CommandState {
            id: self.id,
            kind: self.kind,
            segment: self.segment,
            fragments: smallvec![Fragment {
                end_t: 1.0,
                kind: self.kind,
                id: self.id,
            }],
            chord: self.chord,
        }
    }

    ///
    /// Splits a fragment at a set of (sorted) positions along the original segment
    ///
    /// The new pieces are inserted before the existing fragment, which keeps its ID and kind. Returns the new
    /// state along with the number of fragments that were added.
    ///
    pub(crate) fn split_fragment(&self, index: usize, positions: &[f64]) -> (CommandState, usize) {
        let (start, end) = self.fragment_range(index);
        let kind = match self.fragments[index].kind {
            CommandKind::Close => CommandKind::Line,
            other => other,
        };

        let new_fragments = positions
            .iter()
            .copied()
            .filter(|t| *t > start && *t < end)
            .map(|end_t| Fragment {
                end_t,
                kind,
                id: CommandId::new(),
            })
            .collect::<SmallVec<[Fragment; 4]>>();
        let num_added = new_fragments.len();

        let mut fragments = self.fragments.clone();
        fragments.insert_many(index, new_fragments);

        (CommandState { fragments, ..self.clone() }, num_added)
    }

    ///
    /// Removes the boundary between a fragment and the one after it
    ///
    /// The merged fragment keeps the ID and kind of the later fragment.
    ///
    pub(crate) fn merge_fragments(&self, first_index: usize) -> CommandState {
        extra_check!(first_index + 1 < self.fragments.len(), "No fragment follows fragment {}", first_index);

        let mut fragments = self.fragments.clone();
        fragments.remove(first_index);

        CommandState { fragments, ..self.clone() }
    }

    ///
    /// Changes the kind of command used to draw a fragment
    ///
    /// A fragment can only be converted to a kind that draws exactly the same shape, so a line can become a
    /// curve but a curve cannot become a line.
    ///
    pub(crate) fn convert_fragment(&self, index: usize, kind: CommandKind) -> Result<CommandState, InvalidOperation> {
        let order = match (self.kind, kind) {
            (CommandKind::Move, _) => return Err(InvalidOperation::CannotConvert),
            (_, CommandKind::Line) | (_, CommandKind::Quadratic) | (_, CommandKind::Cubic) => kind.order(),
            _ => return Err(InvalidOperation::CannotConvert),
        };

        if order < Some(self.segment.order()) {
            return Err(InvalidOperation::LossyConversion);
        }

        let mut fragments = self.fragments.clone();
        fragments[index].kind = kind;

        Ok(CommandState { fragments, ..self.clone() })
    }

    ///
    /// Restores the original kind of every fragment, leaving the split positions alone
    ///
    pub(crate) fn unconvert(&self) -> CommandState {
        let fragments = (0..self.fragments.len())
            .map(|idx| Fragment {
                kind: self.default_kind(idx),
                ..self.fragments[idx]
            })
            .collect();

        CommandState { fragments, ..self.clone() }
    }

    ///
    /// Makes this the command that closes its subpath
    ///
    /// Fragments that were converted to curves stay converted.
    ///
    pub(crate) fn close(&self) -> CommandState {
        if self.segment.order() != SegmentOrder::Linear {
            return self.clone();
        }

        let mut fragments = self.fragments.clone();
        if let Some(last) = fragments.last_mut() {
            if last.kind == CommandKind::Line {
                last.kind = CommandKind::Close;
            }
        }

        CommandState {
            kind: CommandKind::Close,
            fragments,
            ..self.clone()
        }
    }

    pub(crate) fn map_points(&self, map: impl Fn(Coord2) -> Coord2) -> CommandState {
        CommandState {
            segment: self.segment.map_points(map),
            ..self.clone()
        }
    }

    ///
    /// Creates a new command state from a run of fragments, as they are drawn
    ///
    /// `kinds` supplies the kind of each fragment in drawing order (which runs from `last` back to `first`
    /// when `reversed` is set). The new state's geometry is just the section covered by the run.
    ///
    pub(crate) fn slice(&self, first: usize, last: usize, reversed: bool, kinds: &[CommandKind]) -> CommandState {
        extra_check!(first <= last && kinds.len() == last - first + 1, "Invalid command slice");

        let (start, _) = self.fragment_range(first);
        let (_, end) = self.fragment_range(last);
        let span = end - start;

        let section = self.segment.section(start, end);
        let segment = if reversed { section.reverse() } else { section };

        let drawn = if reversed {
            (first..=last).rev().collect::<SmallVec<[usize; 4]>>()
        } else {
            (first..=last).collect::<SmallVec<[usize; 4]>>()
        };

        let fragments = drawn
            .iter()
            .zip(kinds.iter())
            .enumerate()
            .map(|(pos, (fragment_idx, kind))| {
                let end_t = if pos + 1 == drawn.len() {
                    1.0
                } else if reversed {
                    (end - self.fragment_range(*fragment_idx).0) / span
                } else {
                    (self.fragments[*fragment_idx].end_t - start) / span
                };

                Fragment {
                    end_t,
                    kind: *kind,
                    id: self.fragments[*fragment_idx].id,
                }
            })
            .collect::<SmallVec<[Fragment; 1]>>();

        let id = fragments.last().map(|fragment| fragment.id).unwrap_or_else(CommandId::new);

        CommandState {
            id,
            kind: CommandKind::for_order(segment.order()),
            segment,
            fragments,
            chord: false,
        }
    }
}
