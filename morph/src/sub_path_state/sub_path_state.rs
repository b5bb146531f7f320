/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sub_path_id::*;
use super::sub_path_state_mutator::*;
use crate::command::*;
use crate::sub_path::*;

use flo_morph_curves::*;

use once_cell::sync::OnceCell;

use std::sync::Arc;

///
/// The ways that a subpath can be split into several subpaths
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SplitKind {
    /// An open subpath cut in two at one of its points
    Stroked,

    /// A closed subpath divided into two closed subpaths by a chord between two of its points
    Filled,
}

///
/// Whether a subpath state is drawn directly or has been split into other subpaths
///
#[derive(Clone, Debug)]
pub enum SubPathNode {
    Leaf,
    Split {
        kind: SplitKind,
        children: Vec<Arc<SubPathState>>,
    },
}

///
/// The editing state of a single subpath
///
/// Split subpaths keep the command states they had before they were split, so reverting a split subpath
/// returns it to its original shape.
///
#[derive(Clone, Debug)]
pub struct SubPathState {
    pub(super) id: SubPathId,
    pub(super) command_states: Arc<Vec<CommandState>>,
    pub(super) is_reversed: bool,
    pub(super) shift_offset: usize,
    pub(super) collapsing: bool,
    pub(super) node: SubPathNode,

    /// The subpath drawn by this state, generated on first use
    pub(super) resolved: OnceCell<Arc<SubPath>>,
}

impl SubPathState {
    ///
    /// Creates an unedited state for a subpath
    ///
    /// Split points are not carried over from the commands of the subpath: the new state has no editing history.
    ///
    pub fn from_sub_path(sub_path: &SubPath) -> SubPathState {
        let commands = sub_path.commands();
        let mut command_states = Vec::with_capacity(commands.len());

        if let Some(first) = commands.first() {
            command_states.push(CommandState::new_move(sub_path.start_point(), first.id()));
        }

        for (idx, segment) in sub_path.segments() {
            let command = &commands[idx];
            command_states.push(CommandState::new(command.kind(), segment, command.id()));
        }

        SubPathState {
            id: SubPathId::new(),
            command_states: Arc::new(command_states),
            is_reversed: false,
            shift_offset: 0,
            collapsing: sub_path.is_collapsing(),
            node: SubPathNode::Leaf,
            resolved: OnceCell::new(),
        }
    }

    ///
    /// Creates a new unedited leaf from a list of command states (the first must be the state of a move command)
    ///
    pub(crate) fn from_command_states(command_states: Vec<CommandState>) -> SubPathState {
        SubPathState {
            id: SubPathId::new(),
            command_states: Arc::new(command_states),
            is_reversed: false,
            shift_offset: 0,
            collapsing: false,
            node: SubPathNode::Leaf,
            resolved: OnceCell::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> SubPathId {
        self.id
    }

    ///
    /// The command states of this subpath (the first is always the state of the move command)
    ///
    #[inline]
    pub fn command_states(&self) -> &[CommandState] {
        &self.command_states
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.is_reversed
    }

    ///
    /// The number of drawing commands the start of a closed subpath has been moved forward by
    ///
    #[inline]
    pub fn shift_offset(&self) -> usize {
        self.shift_offset
    }

    #[inline]
    pub fn is_collapsing(&self) -> bool {
        self.collapsing
    }

    #[inline]
    pub fn node(&self) -> &SubPathNode {
        &self.node
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, SubPathNode::Leaf)
    }

    pub fn split_kind(&self) -> Option<SplitKind> {
        match &self.node {
            SubPathNode::Leaf => None,
            SubPathNode::Split { kind, .. } => Some(*kind),
        }
    }

    ///
    /// The subpaths this one has been split into (empty for a leaf)
    ///
    pub fn split_sub_paths(&self) -> &[Arc<SubPathState>] {
        match &self.node {
            SubPathNode::Leaf => &[],
            SubPathNode::Split { children, .. } => children,
        }
    }

    ///
    /// The number of drawing commands (every command after the move) produced by this state
    ///
    pub fn num_drawing_commands(&self) -> usize {
        self.command_states
            .iter()
            .skip(1)
            .map(|command_state| command_state.fragments().len())
            .sum()
    }

    ///
    /// The subpath drawn by this state
    ///
    /// For a state that has been split, this is the subpath as it was before the split.
    ///
    pub fn sub_path(&self) -> Arc<SubPath> {
        Arc::clone(
            self.resolved
                .get_or_init(|| Arc::new(self.display_list().to_sub_path(self.collapsing))),
        )
    }

    ///
    /// Starts editing this state
    ///
    pub fn mutate(&self) -> SubPathStateMutator {
        SubPathStateMutator::new(self)
    }

    ///
    /// Returns this subpath as it was before it was edited
    ///
    pub fn revert(&self) -> SubPathState {
        self.mutate().revert().build()
    }

    ///
    /// Moves every point of this state and of the subpaths it was split into
    ///
    pub(crate) fn map_points(&self, map: &dyn Fn(Coord2) -> Coord2) -> SubPathState {
        let command_states = self
            .command_states
            .iter()
            .map(|command_state| command_state.map_points(map))
            .collect::<Vec<_>>();

        let node = match &self.node {
            SubPathNode::Leaf => SubPathNode::Leaf,
            SubPathNode::Split { kind, children } => SubPathNode::Split {
                kind: *kind,
                children: children.iter().map(|child| Arc::new(child.map_points(map))).collect(),
            },
        };

        SubPathState {
            command_states: Arc::new(command_states),
            node,
            resolved: OnceCell::new(),
            ..self.clone()
        }
    }

    ///
    /// Replaces the children of a split state
    ///
    pub(crate) fn with_split_children(&self, children: Vec<Arc<SubPathState>>) -> SubPathState {
        match self.split_kind() {
            Some(kind) => self.mutate().set_split_sub_paths(kind, children).build(),
            None => self.clone(),
        }
    }
}
