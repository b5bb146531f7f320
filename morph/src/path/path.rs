/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::error::*;
use crate::path_mutator::*;
use crate::sub_path::*;
use crate::sub_path_state::*;

use flo_morph_curves::*;

use log::*;

use std::sync::Arc;

///
/// An immutable vector path made up of subpaths
///
/// Cloning a path is cheap: the subpaths are shared. Two paths are equal when they draw the same commands,
/// regardless of how those commands were produced.
///
#[derive(Clone, Debug, Default)]
pub struct Path {
    /// The editing state of each subpath (split subpaths form trees)
    states: Vec<Arc<SubPathState>>,

    /// The subpaths drawn by the leaves of the state forest
    sub_paths: Vec<Arc<SubPath>>,
}

impl Path {
    ///
    /// Creates a path with no subpaths
    ///
    pub fn new() -> Path {
        Path::default()
    }

    ///
    /// Creates a path from a forest of subpath states
    ///
    pub fn from_states(states: Vec<Arc<SubPathState>>) -> Path {
        let sub_paths = flatten_sub_path_states(&states)
            .iter()
            .map(|leaf| leaf.sub_path())
            .collect::<Vec<_>>();

        trace!("Path with {} subpaths from {} subpath states", sub_paths.len(), states.len());

        Path { states, sub_paths }
    }

    ///
    /// Creates a path with no editing history from a list of subpaths
    ///
    pub fn from_sub_paths(sub_paths: impl IntoIterator<Item = SubPath>) -> Path {
        let states = sub_paths
            .into_iter()
            .map(|sub_path| Arc::new(SubPathState::from_sub_path(&sub_path)))
            .collect();

        Path::from_states(states)
    }

    ///
    /// The subpaths that make up this path, in drawing order
    ///
    #[inline]
    pub fn sub_paths(&self) -> &[Arc<SubPath>] {
        &self.sub_paths
    }

    #[inline]
    pub fn sub_path(&self, index: usize) -> Option<&SubPath> {
        self.sub_paths.get(index).map(|sub_path| &**sub_path)
    }

    ///
    /// The top-level subpath states of this path
    ///
    /// A subpath that has been split appears here once, with the subpaths it was split into as its children.
    ///
    #[inline]
    pub fn sub_path_states(&self) -> &[Arc<SubPathState>] {
        &self.states
    }

    ///
    /// The state for each subpath returned by `sub_paths()`
    ///
    pub fn leaf_states(&self) -> Vec<Arc<SubPathState>> {
        flatten_sub_path_states(&self.states)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sub_paths.is_empty()
    }

    ///
    /// The total length of every visible subpath
    ///
    pub fn path_length(&self) -> f64 {
        self.sub_paths
            .iter()
            .filter(|sub_path| !sub_path.is_hidden())
            .map(|sub_path| sub_path.path_length())
            .sum()
    }

    ///
    /// Returns a copy of this path with every point transformed
    ///
    pub fn transform(&self, transform: &Transform2D) -> Result<Path, PathError> {
        let mut mutator = self.mutate();
        mutator.transform(transform)?;

        Ok(mutator.build())
    }

    ///
    /// Starts editing this path
    ///
    pub fn mutate(&self) -> PathMutator {
        PathMutator::new(self)
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Path) -> bool {
        self.sub_paths == other.sub_paths
    }
}
