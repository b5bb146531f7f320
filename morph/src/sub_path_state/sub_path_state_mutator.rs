/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sub_path_id::*;
use super::sub_path_state::*;
use crate::command::*;
use crate::error::*;

use log::*;
use once_cell::sync::OnceCell;

use std::sync::Arc;

///
/// Builds a new `SubPathState` from an existing one
///
/// ```
/// # use flo_morph::*;
/// #
/// let path        = Path::parse("M 0 0 L 10 0 L 10 10 Z").unwrap();
/// let state       = &path.sub_path_states()[0];
///
/// let reversed    = state.mutate().reverse().build();
/// assert!(reversed.is_reversed());
/// assert!(reversed.id() == state.id());
/// ```
///
#[derive(Clone, Debug)]
pub struct SubPathStateMutator {
    id: SubPathId,
    command_states: Arc<Vec<CommandState>>,
    is_reversed: bool,
    shift_offset: usize,
    collapsing: bool,
    node: SubPathNode,
}

impl SubPathStateMutator {
    pub(crate) fn new(state: &SubPathState) -> SubPathStateMutator {
        SubPathStateMutator {
            id: state.id,
            command_states: Arc::clone(&state.command_states),
            is_reversed: state.is_reversed,
            shift_offset: state.shift_offset,
            collapsing: state.collapsing,
            node: state.node.clone(),
        }
    }

    pub fn set_command_states(mut self, command_states: Vec<CommandState>) -> Self {
        self.command_states = Arc::new(command_states);
        self
    }

    pub fn set_command_state(mut self, index: usize, command_state: CommandState) -> Result<Self, PathError> {
        PathError::check_index(index, self.command_states.len())?;

        Arc::make_mut(&mut self.command_states)[index] = command_state;
        Ok(self)
    }

    ///
    /// Toggles the direction of the subpath
    ///
    pub fn reverse(mut self) -> Self {
        self.is_reversed = !self.is_reversed;
        self
    }

    pub fn set_is_reversed(mut self, is_reversed: bool) -> Self {
        self.is_reversed = is_reversed;
        self
    }

    pub fn set_shift_offset(mut self, shift_offset: usize) -> Self {
        self.shift_offset = shift_offset;
        self
    }

    pub fn set_collapsing(mut self, collapsing: bool) -> Self {
        self.collapsing = collapsing;
        self
    }

    ///
    /// Sets the subpaths that this one is split into (an empty list makes this a leaf again)
    ///
    pub fn set_split_sub_paths(mut self, kind: SplitKind, children: Vec<Arc<SubPathState>>) -> Self {
        self.node = if children.is_empty() {
            SubPathNode::Leaf
        } else {
            SubPathNode::Split { kind, children }
        };
        self
    }

    pub fn set_id(mut self, id: SubPathId) -> Self {
        self.id = id;
        self
    }

    ///
    /// Removes every edit: commands are unsplit and unconverted, the direction and start point are restored and
    /// any split subpaths are rejoined
    ///
    pub fn revert(mut self) -> Self {
        self.command_states = Arc::new(self.command_states.iter().map(|command_state| command_state.revert()).collect());
        self.is_reversed = false;
        self.shift_offset = 0;
        self.node = SubPathNode::Leaf;
        self
    }

    pub fn build(self) -> SubPathState {
        let num_drawing_commands = self
            .command_states
            .iter()
            .skip(1)
            .map(|command_state| command_state.fragments().len())
            .sum::<usize>();
        let shift_offset = if num_drawing_commands == 0 {
            0
        } else {
            self.shift_offset % num_drawing_commands
        };

        trace!(
            "Building subpath state {:?} ({} commands, reversed: {}, shift: {})",
            self.id,
            num_drawing_commands,
            self.is_reversed,
            shift_offset
        );

        SubPathState {
            id: self.id,
            command_states: self.command_states,
            is_reversed: self.is_reversed,
            shift_offset,
            collapsing: self.collapsing,
            node: self.node,
            resolved: OnceCell::new(),
        }
    }
}
