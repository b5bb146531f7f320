/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path_mutator::*;
use crate::command::*;
use crate::error::*;
use crate::sub_path_state::*;

use flo_morph_curves::bezier::*;
use flo_morph_curves::*;

use log::*;
use smallvec::*;

use std::sync::Arc;

///
/// Creates the command state for a run of consecutive fragments of the same command
///
fn slice_run(run: &[&DisplayCommand], parent: &SubPathState) -> CommandState {
    let first = run[0];
    let last = run[run.len() - 1];
    let (first_fragment, last_fragment) = if first.reversed {
        (last.fragment, first.fragment)
    } else {
        (first.fragment, last.fragment)
    };

    // Only a chord closes the subpaths created by a split
    let kinds = run
        .iter()
        .map(|command| match command.kind {
            CommandKind::Close => CommandKind::Line,
            kind => kind,
        })
        .collect::<SmallVec<[CommandKind; 4]>>();

    parent.command_states()[first.cs_index].slice(first_fragment, last_fragment, first.reversed, &kinds)
}

///
/// Creates the command states that draw some of the commands of an existing subpath state
///
/// Runs of fragments that come from the same command are kept together in a single command state, so a
/// split inside the run can still be undone in the new subpath.
///
fn sliced_command_states<'a>(commands: impl Iterator<Item = &'a DisplayCommand>, parent: &SubPathState) -> Vec<CommandState> {
    let mut command_states = vec![];
    let mut run: Vec<&DisplayCommand> = vec![];

    for command in commands {
        let continues_run = match run.last() {
            None => true,
            Some(previous) => {
                previous.cs_index == command.cs_index
                    && previous.reversed == command.reversed
                    && if command.reversed {
                        previous.fragment == command.fragment + 1
                    } else {
                        previous.fragment + 1 == command.fragment
                    }
            }
        };

        if !continues_run {
            command_states.push(slice_run(&run, parent));
            run.clear();
        }

        run.push(command);
    }

    if !run.is_empty() {
        command_states.push(slice_run(&run, parent));
    }

    command_states
}

///
/// Creates a new subpath state that draws some of the commands of an existing one
///
fn child_state<'a>(
    start_point: Coord2,
    commands: impl Iterator<Item = &'a DisplayCommand>,
    parent: &SubPathState,
    chord: Option<(Coord2, Coord2)>,
) -> Arc<SubPathState> {
    let mut command_states = vec![CommandState::new_move(start_point, CommandId::new())];
    command_states.extend(sliced_command_states(commands, parent));

    if let Some((from, to)) = chord {
        command_states.push(CommandState::new_chord(from, to));
    }

    Arc::new(SubPathState::from_command_states(command_states))
}

///
/// The commands drawn by one half of a split filled subpath, leaving out its chord
///
/// The commands run in the direction the half was created with, so the first one starts where the chord ends.
///
fn commands_without_chord(half: &SubPathState) -> Vec<DisplayCommand> {
    let display = half.display_list();
    let commands = &display.commands;
    let num_commands = commands.len();
    let is_chord = |command: &DisplayCommand| half.command_states()[command.cs_index].is_chord();

    // The chord is drawn as a single run of commands (it might have been split)
    let after_chord = (0..num_commands)
        .find(|idx| is_chord(&commands[*idx]) && !is_chord(&commands[(idx + 1) % num_commands]))
        .map(|idx| idx + 1)
        .unwrap_or(0);

    let mut without_chord = (0..num_commands)
        .map(|offset| &commands[(after_chord + offset) % num_commands])
        .filter(|command| !is_chord(*command))
        .cloned()
        .collect::<Vec<_>>();

    if half.is_reversed() {
        without_chord.reverse();
        for command in without_chord.iter_mut() {
            command.reversed = !command.reversed;
            command.segment = command.segment.reverse();
        }
    }

    without_chord
}

///
/// Joins the two halves of a split filled subpath back into a single subpath
///
/// Edits made to the halves since the split are kept. The rejoined subpath starts at the same point as the
/// subpath that was split, and if neither half was changed the result is the subpath from before the split.
///
fn rejoin_filled_halves(parent: &SubPathState) -> Result<SubPathState, PathError> {
    let halves = parent.split_sub_paths();
    if halves.len() != 2 || !halves.iter().all(|half| half.is_leaf()) {
        return Err(InvalidOperation::IncompleteFilledSplit.into());
    }

    let parent_display = parent.display_list();
    let mut command_states = halves
        .iter()
        .flat_map(|half| sliced_command_states(commands_without_chord(half).iter(), half))
        .collect::<Vec<_>>();

    // The last command of the original subpath still ends at its start point (a split keeps the ID of the last piece)
    if let Some(last_command) = parent_display.commands.last() {
        let last_position = command_states.iter().position(|command_state| {
            command_state.fragments().last().map(|fragment| fragment.id()) == Some(last_command.id)
        });

        if let Some(last_position) = last_position {
            command_states.rotate_left(last_position + 1);

            if last_command.kind == CommandKind::Close {
                if let Some(close) = command_states.last_mut() {
                    *close = close.close();
                }
            }
        }
    }

    let start_point = command_states
        .last()
        .map(|command_state| command_state.segment().end_point())
        .unwrap_or(parent_display.start_point);
    let move_id = parent_display.move_id.unwrap_or_else(CommandId::new);
    command_states.insert(0, CommandState::new_move(start_point, move_id));

    let rejoined = SubPathState::from_command_states(command_states)
        .mutate()
        .set_id(parent.id())
        .set_collapsing(parent.is_collapsing())
        .build();

    if rejoined.sub_path() == parent.sub_path() {
        Ok(parent.mutate().set_split_sub_paths(SplitKind::Filled, vec![]).build())
    } else {
        Ok(rejoined)
    }
}

impl PathMutator {
    ///
    /// Reverses the direction of a subpath
    ///
    /// The subpath still starts at the same point. Reversing a subpath twice restores it exactly.
    ///
    pub fn reverse_sub_path(&mut self, sub_path: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;

        let num_commands = state.num_drawing_commands();
        let shift_offset = if num_commands == 0 {
            0
        } else {
            (num_commands - state.shift_offset() % num_commands) % num_commands
        };

        debug!("Reversing subpath {}", sub_path);

        let reversed = state.mutate().reverse().set_shift_offset(shift_offset).build();
        self.replace(&tree_path, reversed);
        Ok(self)
    }

    fn shift_sub_path(&mut self, sub_path: usize, forward: bool) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        if !display.closed {
            return Err(InvalidOperation::OpenSubPath.into());
        }

        let num_commands = display.commands.len();
        let shift_offset = state.shift_offset();
        let shift_offset = if forward {
            (shift_offset + 1) % num_commands
        } else {
            (shift_offset + num_commands - 1) % num_commands
        };

        debug!("Shifting subpath {} to start after command {}", sub_path, shift_offset);

        let shifted = state.mutate().set_shift_offset(shift_offset).build();
        self.replace(&tree_path, shifted);
        Ok(self)
    }

    ///
    /// Moves the start of a closed subpath forward to the end of its first drawing command
    ///
    pub fn shift_sub_path_forward(&mut self, sub_path: usize) -> Result<&mut Self, PathError> {
        self.shift_sub_path(sub_path, true)
    }

    ///
    /// Moves the start of a closed subpath back to the start of its last drawing command
    ///
    pub fn shift_sub_path_back(&mut self, sub_path: usize) -> Result<&mut Self, PathError> {
        self.shift_sub_path(sub_path, false)
    }

    ///
    /// Cuts an open subpath in two at the end of a command
    ///
    /// The first new subpath draws the commands up to and including `command`, and the second starts where
    /// that command ends and draws the rest.
    ///
    pub fn split_stroked_sub_path(&mut self, sub_path: usize, command: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        if display.closed {
            return Err(InvalidOperation::ClosedSubPath.into());
        }
        if command == 0 {
            return Err(InvalidOperation::CannotSplitCommand.into());
        }

        // The last command has nothing after it to split off
        PathError::check_index(command, display.commands.len())?;

        debug!("Splitting stroked subpath {} after command {}", sub_path, command);

        let first = child_state(display.start_point, display.commands[..command].iter(), &state, None);
        let second = child_state(
            display.end_point(command - 1),
            display.commands[command..].iter(),
            &state,
            None,
        );

        let split = state
            .mutate()
            .set_split_sub_paths(SplitKind::Stroked, vec![first, second])
            .build();
        self.replace(&tree_path, split);
        Ok(self)
    }

    ///
    /// Divides a closed subpath into two closed subpaths along a chord between the end points of two commands
    ///
    /// The first new subpath draws the commands after `start` up to `end`, and the second draws the rest of the
    /// outline. Each is closed with a straight line along the chord.
    ///
    pub fn split_filled_sub_path(&mut self, sub_path: usize, start: usize, end: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        if !display.closed {
            return Err(InvalidOperation::OpenSubPath.into());
        }

        PathError::check_index(end, display.commands.len() + 1)?;
        if start == 0 || start >= end {
            return Err(InvalidOperation::InvalidSplitRange.into());
        }

        // A chord alongside a single straight edge would leave one of the halves with no area
        let is_straight = |command: &DisplayCommand| command.segment.order() == SegmentOrder::Linear;
        let num_commands = display.commands.len();
        let straight_inside = end - start == 1 && is_straight(&display.commands[start]);
        let straight_outside = num_commands - end + start == 1 && is_straight(&display.commands[end % num_commands]);

        if straight_inside || straight_outside {
            return Err(InvalidOperation::InvalidSplitRange.into());
        }

        debug!("Splitting filled subpath {} between commands {} and {}", sub_path, start, end);

        let start_point = display.end_point(start - 1);
        let end_point = display.end_point(end - 1);

        let first = child_state(
            start_point,
            display.commands[start..end].iter(),
            &state,
            Some((end_point, start_point)),
        );
        let second = child_state(
            end_point,
            display.commands[end..].iter().chain(display.commands[..start].iter()),
            &state,
            Some((start_point, end_point)),
        );

        let split = state
            .mutate()
            .set_split_sub_paths(SplitKind::Filled, vec![first, second])
            .build();
        self.replace(&tree_path, split);
        Ok(self)
    }

    ///
    /// Removes the chord created by `split_filled_sub_path()`, joining the two halves back together
    ///
    /// Any edits made to the halves are carried over to the rejoined subpath.
    ///
    pub fn delete_filled_sub_path_segment(&mut self, sub_path: usize, command: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        PathError::check_index(command, display.commands.len() + 1)?;

        let is_chord = command > 0 && state.command_states()[display.commands[command - 1].cs_index].is_chord();
        let parent_path = &tree_path[..tree_path.len() - 1];
        let parent = state_at_tree_path(self.states(), parent_path);

        let parent = match parent {
            Some(parent) if is_chord && parent.split_kind() == Some(SplitKind::Filled) => Arc::clone(parent),
            _ => return Err(InvalidOperation::NotFilledSplitSegment.into()),
        };

        debug!("Rejoining filled subpath {} at command {}", sub_path, command);

        let rejoined = rejoin_filled_halves(&parent)?;
        self.replace(parent_path, rejoined);
        Ok(self)
    }

    ///
    /// Deletes an open subpath
    ///
    pub fn delete_stroked_sub_path(&mut self, sub_path: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;

        if state.display_list().closed {
            return Err(InvalidOperation::ClosedSubPath.into());
        }

        debug!("Deleting stroked subpath {}", sub_path);

        self.remove(&tree_path);
        Ok(self)
    }

    ///
    /// Deletes a closed subpath
    ///
    pub fn delete_filled_sub_path(&mut self, sub_path: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;

        if !state.display_list().closed {
            return Err(InvalidOperation::OpenSubPath.into());
        }

        debug!("Deleting filled subpath {}", sub_path);

        self.remove(&tree_path);
        Ok(self)
    }
}
