/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sub_path_state::*;
use crate::command::*;
use crate::sub_path::*;

use flo_morph_curves::bezier::*;
use flo_morph_curves::*;

use smallvec::*;

///
/// A drawing command as it appears in the resolved subpath, along with where it came from
///
#[derive(Clone, Debug)]
pub(crate) struct DisplayCommand {
    /// Index of the command state that this was generated from
    pub cs_index: usize,

    /// Index of the fragment within the command state
    pub fragment: usize,

    /// The fragment is being drawn backwards
    pub reversed: bool,

    pub kind: CommandKind,

    /// The geometry that is drawn, in drawing order
    pub segment: Segment,

    pub id: CommandId,

    /// The end point of this command is a boundary between two fragments
    pub split_point: bool,

    /// Position of this command before the start of the subpath was shifted
    pub pre_shift_index: usize,
}

///
/// The commands drawn by a subpath state
///
#[derive(Clone, Debug)]
pub(crate) struct DisplayList {
    pub start_point: Coord2,

    /// ID of the move command (`None` if the state has no commands at all)
    pub move_id: Option<CommandId>,

    /// The drawing commands, excluding the initial move
    pub commands: Vec<DisplayCommand>,

    /// The last command ends where the first one starts
    pub closed: bool,
}

impl DisplayCommand {
    ///
    /// Generates the command that draws this fragment
    ///
    pub fn command(&self) -> Command {
        let order = self.kind.order().unwrap_or(SegmentOrder::Linear);
        let segment = self.segment.elevate(order).unwrap_or(self.segment);

        match (self.kind, segment.order()) {
            (CommandKind::Close, SegmentOrder::Linear) => Command::with_id(CommandKind::Close, smallvec![], self.id, self.split_point),
            _ => Command::from_segment(&segment, self.id, self.split_point),
        }
    }
}

impl DisplayList {
    ///
    /// The point where a drawing command ends
    ///
    #[inline]
    pub fn end_point(&self, index: usize) -> Coord2 {
        self.commands[index].segment.end_point()
    }

    pub fn to_sub_path(&self, collapsing: bool) -> SubPath {
        let move_id = match self.move_id {
            Some(move_id) => move_id,
            None => return SubPath::from_commands(vec![], collapsing),
        };

        let commands = Some(Command::move_to(self.start_point, move_id))
            .into_iter()
            .chain(self.commands.iter().map(|command| command.command()))
            .collect();

        SubPath::from_commands(commands, collapsing)
    }
}

///
/// After reordering the commands of a subpath that was closed by a close command, makes sure that only
/// the last command is a close command
///
fn relabel_close(commands: &mut [DisplayCommand]) {
    let last = commands.len().saturating_sub(1);

    for (idx, command) in commands.iter_mut().enumerate() {
        if idx != last && command.kind == CommandKind::Close {
            command.kind = CommandKind::Line;
        } else if idx == last && command.kind == CommandKind::Line && command.segment.order() == SegmentOrder::Linear {
            command.kind = CommandKind::Close;
        }
    }
}

impl SubPathState {
    ///
    /// Works out the commands drawn by this state
    ///
    /// The fragments of every command state are laid out in order, then reversed if the subpath is drawn
    /// backwards, then rotated so that the subpath starts at the end of the drawing command given by the
    /// shift offset.
    ///
    pub(crate) fn display_list(&self) -> DisplayList {
        let command_states = self.command_states();

        let (mut start_point, move_id) = match command_states.first() {
            Some(move_state) => (move_state.segment().end_point(), Some(move_state.id())),
            None => (Coord2::origin(), None),
        };

        let mut commands = vec![];
        for (cs_index, command_state) in command_states.iter().enumerate().skip(1) {
            let num_fragments = command_state.fragments().len();

            for (fragment_index, fragment) in command_state.fragments().iter().enumerate() {
                commands.push(DisplayCommand {
                    cs_index,
                    fragment: fragment_index,
                    reversed: false,
                    kind: fragment.kind(),
                    segment: command_state.fragment_segment(fragment_index),
                    id: fragment.id(),
                    split_point: fragment_index + 1 < num_fragments,
                    pre_shift_index: 0,
                });
            }
        }

        let ends_with_close = commands.last().map(|command| command.kind == CommandKind::Close).unwrap_or(false);
        let closed = commands
            .last()
            .map(|command| command.segment.end_point().is_near_to(&start_point, SMALL_DISTANCE))
            .unwrap_or(false);

        if self.is_reversed() {
            if let Some(last) = commands.last() {
                start_point = last.segment.end_point();
            }

            commands.reverse();
            for command in commands.iter_mut() {
                command.reversed = true;
                command.segment = command.segment.reverse();
                command.split_point = command.fragment > 0;
            }

            if ends_with_close {
                relabel_close(&mut commands);
            }
        }

        for (idx, command) in commands.iter_mut().enumerate() {
            command.pre_shift_index = idx;
        }

        let num_commands = commands.len();
        if closed && num_commands > 1 && self.shift_offset() % num_commands != 0 {
            commands.rotate_left(self.shift_offset() % num_commands);
            start_point = commands[0].segment.start_point();

            if ends_with_close {
                relabel_close(&mut commands);
            }
        }

        DisplayList {
            start_point,
            move_id,
            commands,
            closed,
        }
    }
}
