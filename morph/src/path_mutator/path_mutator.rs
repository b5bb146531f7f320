/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::command::*;
use crate::error::*;
use crate::path::*;
use crate::sub_path::*;
use crate::sub_path_state::*;

use flo_homography::*;
use flo_morph_curves::*;

use log::*;

use std::iter;
use std::sync::Arc;

///
/// Stages a series of edits to a path
///
/// The mutator works on a copy of the path's subpath states, so the path it was created from is never
/// changed. Only the states along the route to an edited subpath are replaced: every other state (and the
/// subpath it draws) is shared with the original path.
///
#[derive(Clone, Debug)]
pub struct PathMutator {
    states: Vec<Arc<SubPathState>>,
}

impl PathMutator {
    pub(crate) fn new(path: &Path) -> PathMutator {
        PathMutator {
            states: path.sub_path_states().to_vec(),
        }
    }

    ///
    /// The number of subpaths in the path being built
    ///
    pub fn num_sub_paths(&self) -> usize {
        flatten_sub_path_states(&self.states).len()
    }

    #[inline]
    pub(super) fn states(&self) -> &[Arc<SubPathState>] {
        &self.states
    }

    #[inline]
    pub(super) fn restore_states(&mut self, states: Vec<Arc<SubPathState>>) {
        self.states = states;
    }

    ///
    /// Finds the state for a subpath, along with its route through the state forest
    ///
    pub(super) fn leaf(&self, sub_path: usize) -> Result<(Vec<usize>, Arc<SubPathState>), PathError> {
        let state = leaf_tree_path(&self.states, sub_path).and_then(|tree_path| {
            let state = state_at_tree_path(&self.states, &tree_path).cloned();
            state.map(|state| (tree_path, state))
        });

        match state {
            Some(state) => Ok(state),
            None => Err(PathError::IndexOutOfRange {
                index: sub_path,
                len: self.num_sub_paths(),
            }),
        }
    }

    #[inline]
    pub(super) fn replace(&mut self, tree_path: &[usize], state: SubPathState) {
        replace_at_tree_path(&mut self.states, tree_path, Some(Arc::new(state)));
    }

    #[inline]
    pub(super) fn remove(&mut self, tree_path: &[usize]) {
        replace_at_tree_path(&mut self.states, tree_path, None);
    }

    ///
    /// Removes every edit from every subpath (including splits of whole subpaths)
    ///
    pub fn revert(&mut self) -> &mut Self {
        debug!("Reverting {} subpaths", self.states.len());

        self.states = self.states.iter().map(|state| Arc::new(state.revert())).collect();
        self
    }

    ///
    /// Applies an affine transform to every point of the path
    ///
    /// Transforms that would flatten the path (with a determinant of 0) are rejected, as they can't be undone.
    ///
    pub fn transform(&mut self, transform: &Transform2D) -> Result<&mut Self, PathError> {
        if transform.is_singular() {
            return Err(InvalidOperation::SingularTransform.into());
        }

        debug!("Transforming path by {:?}", transform);

        self.map_points(&|point| transform.transform_point(&point));
        Ok(self)
    }

    ///
    /// Applies a perspective transform to every control point of the path
    ///
    pub fn distort(&mut self, homography: &Homography) -> &mut Self {
        debug!("Distorting path by {:?}", homography.matrix());

        self.map_points(&|Coord2(x, y)| {
            let (x, y) = homography.distort((x, y));
            Coord2(x, y)
        });
        self
    }

    fn map_points(&mut self, map: &dyn Fn(Coord2) -> Coord2) {
        self.states = self.states.iter().map(|state| Arc::new(state.map_points(map))).collect();
    }

    ///
    /// Moves one of the top-level subpaths to a new position
    ///
    /// Subpaths that have been split move with all of their parts, so these indexes are positions in
    /// `Path::sub_path_states()` rather than in `Path::sub_paths()`.
    ///
    pub fn move_sub_path(&mut self, from: usize, to: usize) -> Result<&mut Self, PathError> {
        PathError::check_index(from, self.states.len())?;
        PathError::check_index(to, self.states.len())?;

        debug!("Moving subpath {} to {}", from, to);

        let state = self.states.remove(from);
        self.states.insert(to, state);
        Ok(self)
    }

    ///
    /// Adds a hidden subpath with all of its points at the same place
    ///
    /// The new subpath has a move command followed by `num_commands - 1` lines, so it can be morphed with a
    /// subpath of the same length that grows out of the point.
    ///
    pub fn add_collapsing_sub_path(&mut self, center: Coord2, num_commands: usize) -> Result<&mut Self, PathError> {
        if num_commands == 0 {
            return Err(InvalidOperation::EmptyCollapsingSubPath.into());
        }

        debug!("Adding collapsing subpath with {} commands at {:?}", num_commands, center);

        let commands = iter::once(CommandKind::Move)
            .chain(iter::repeat(CommandKind::Line).take(num_commands - 1))
            .map(|kind| Command::new(kind, iter::once(center)))
            .collect::<Result<Vec<_>, _>>()?;

        let state = SubPathState::from_sub_path(&SubPath::new(commands)?).mutate().set_collapsing(true).build();
        self.states.push(Arc::new(state));
        Ok(self)
    }

    ///
    /// Removes every collapsing subpath
    ///
    pub fn delete_collapsing_sub_paths(&mut self) -> &mut Self {
        debug!("Deleting collapsing subpaths");

        self.states.retain(|state| !state.is_collapsing());
        self
    }

    ///
    /// Finishes editing and returns the new path
    ///
    pub fn build(self) -> Path {
        let path = Path::from_states(self.states);
        trace!("Built path with {} subpaths", path.sub_paths().len());

        path
    }
}
