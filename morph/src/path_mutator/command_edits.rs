/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path_mutator::*;
use crate::command::*;
use crate::error::*;
use crate::sub_path_state::*;

use flo_morph_curves::*;

use itertools::*;
use log::*;

use std::cmp::Ordering;

///
/// Finds the drawing command at an index in a subpath (where index 0 is the move command)
///
fn drawing_command(display: &DisplayList, command: usize) -> Result<Option<&DisplayCommand>, PathError> {
    PathError::check_index(command, display.commands.len() + 1)?;

    Ok(command.checked_sub(1).map(|idx| &display.commands[idx]))
}

impl PathMutator {
    ///
    /// Splits a command into several commands at positions along it
    ///
    /// Each position must be strictly between 0 and 1. The new commands draw exactly the same shape as the
    /// original command, and `unsplit_command()` can join them back together.
    ///
    pub fn split_command(&mut self, sub_path: usize, command: usize, positions: &[f64]) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        let drawn = match drawing_command(&display, command)? {
            Some(drawn) => drawn,
            None => return Err(InvalidOperation::CannotSplitCommand.into()),
        };

        if positions.is_empty() || positions.iter().any(|t| !(*t > 0.0 && *t < 1.0)) {
            return Err(InvalidOperation::InvalidSplitValue.into());
        }

        // Positions are relative to the command as drawn: convert them to positions along the original command
        let command_state = &state.command_states()[drawn.cs_index];
        let (start, end) = command_state.fragment_range(drawn.fragment);
        let split_positions = positions
            .iter()
            .map(|t| {
                if drawn.reversed {
                    end - t * (end - start)
                } else {
                    start + t * (end - start)
                }
            })
            .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .dedup_by(|a, b| (a - b).abs() < SMALL_T_DISTANCE)
            .collect::<Vec<_>>();

        let (split_state, num_added) = command_state.split_fragment(drawn.fragment, &split_positions);

        // New commands that appear before the start of a shifted subpath move its start along
        let mut shift_offset = state.shift_offset();
        if drawn.pre_shift_index < shift_offset {
            shift_offset += num_added;
        }

        debug!("Splitting command {} of subpath {} at {:?}", command, sub_path, positions);

        let split = state
            .mutate()
            .set_command_state(drawn.cs_index, split_state)?
            .set_shift_offset(shift_offset)
            .build();
        self.replace(&tree_path, split);
        Ok(self)
    }

    ///
    /// Splits a command into two halves
    ///
    pub fn split_command_in_half(&mut self, sub_path: usize, command: usize) -> Result<&mut Self, PathError> {
        self.split_command(sub_path, command, &[0.5])
    }

    ///
    /// Joins a command that was created by a split to the command that follows it
    ///
    /// This is the exact inverse of `split_command()`: the joined command has the control points of the command
    /// before it was split.
    ///
    pub fn unsplit_command(&mut self, sub_path: usize, command: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        let drawn = match drawing_command(&display, command)? {
            Some(drawn) if drawn.split_point => drawn,
            _ => return Err(InvalidOperation::NotSplitPoint.into()),
        };

        // When reversed, the command that follows is the fragment before this one
        let first_fragment = if drawn.reversed { drawn.fragment - 1 } else { drawn.fragment };
        let merged = state.command_states()[drawn.cs_index].merge_fragments(first_fragment);

        let mut shift_offset = state.shift_offset();
        if drawn.pre_shift_index < shift_offset {
            shift_offset -= 1;
        }

        debug!("Unsplitting command {} of subpath {}", command, sub_path);

        let unsplit = state
            .mutate()
            .set_command_state(drawn.cs_index, merged)?
            .set_shift_offset(shift_offset)
            .build();
        self.replace(&tree_path, unsplit);
        Ok(self)
    }

    ///
    /// Unsplits a list of `(sub_path, command)` pairs
    ///
    /// The commands are all identified by their indexes before any of them are unsplit. If any of the commands
    /// can't be unsplit, none of them are.
    ///
    pub fn unsplit_commands(&mut self, commands: &[(usize, usize)]) -> Result<&mut Self, PathError> {
        let original_states = self.states().to_vec();

        // Unsplitting a command only changes the indexes of the commands after it
        let in_order = commands
            .iter()
            .copied()
            .sorted_by(|(sub_a, cmd_a), (sub_b, cmd_b)| sub_a.cmp(sub_b).then(cmd_b.cmp(cmd_a)))
            .dedup();

        for (sub_path, command) in in_order {
            if let Err(err) = self.unsplit_command(sub_path, command) {
                self.restore_states(original_states);
                return Err(err);
            }
        }

        Ok(self)
    }

    ///
    /// Changes the kind of command used to draw a command
    ///
    /// Only conversions that keep exactly the same shape are possible: lines can become quadratic or cubic
    /// curves, and quadratic curves can become cubic curves.
    ///
    pub fn convert_command(&mut self, sub_path: usize, command: usize, kind: CommandKind) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;
        let display = state.display_list();

        let drawn = match drawing_command(&display, command)? {
            Some(drawn) => drawn,
            None => return Err(InvalidOperation::CannotConvert.into()),
        };

        let converted = state.command_states()[drawn.cs_index].convert_fragment(drawn.fragment, kind)?;

        debug!("Converting command {} of subpath {} to {:?}", command, sub_path, kind);

        let converted = state.mutate().set_command_state(drawn.cs_index, converted)?.build();
        self.replace(&tree_path, converted);
        Ok(self)
    }

    ///
    /// Restores the original kind of every command in a subpath
    ///
    pub fn unconvert_sub_path(&mut self, sub_path: usize) -> Result<&mut Self, PathError> {
        let (tree_path, state) = self.leaf(sub_path)?;

        debug!("Unconverting subpath {}", sub_path);

        let command_states = state
            .command_states()
            .iter()
            .map(|command_state| command_state.unconvert())
            .collect();
        let unconverted = state.mutate().set_command_states(command_states).build();

        self.replace(&tree_path, unconverted);
        Ok(self)
    }
}
