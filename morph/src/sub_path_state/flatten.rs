/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sub_path_state::*;

use std::sync::Arc;

///
/// Returns the leaves of a forest of subpath states, in the order they are drawn
///
/// Split states are replaced by the subpaths they were split into, recursively.
///
pub fn flatten_sub_path_states(states: &[Arc<SubPathState>]) -> Vec<Arc<SubPathState>> {
    let mut leaves = vec![];
    collect_leaves(states, &mut leaves);
    leaves
}

fn collect_leaves(states: &[Arc<SubPathState>], leaves: &mut Vec<Arc<SubPathState>>) {
    for state in states.iter() {
        if state.is_leaf() {
            leaves.push(Arc::clone(state));
        } else {
            collect_leaves(state.split_sub_paths(), leaves);
        }
    }
}

///
/// Finds the route through the forest (a list of child indexes) to the leaf with the specified index
///
pub(crate) fn leaf_tree_path(states: &[Arc<SubPathState>], leaf_index: usize) -> Option<Vec<usize>> {
    let mut remaining = leaf_index;
    let mut tree_path = vec![];

    if find_leaf(states, &mut remaining, &mut tree_path) {
        Some(tree_path)
    } else {
        None
    }
}

fn find_leaf(states: &[Arc<SubPathState>], remaining: &mut usize, tree_path: &mut Vec<usize>) -> bool {
    for (idx, state) in states.iter().enumerate() {
        tree_path.push(idx);

        if state.is_leaf() {
            if *remaining == 0 {
                return true;
            }
            *remaining -= 1;
        } else if find_leaf(state.split_sub_paths(), remaining, tree_path) {
            return true;
        }

        tree_path.pop();
    }

    false
}

///
/// Retrieves the state at the end of a route through the forest
///
pub(crate) fn state_at_tree_path<'a>(states: &'a [Arc<SubPathState>], tree_path: &[usize]) -> Option<&'a Arc<SubPathState>> {
    let (first, rest) = tree_path.split_first()?;
    let state = states.get(*first)?;

    if rest.is_empty() {
        Some(state)
    } else {
        state_at_tree_path(state.split_sub_paths(), rest)
    }
}

///
/// Replaces (or removes, if the replacement is `None`) the state at the end of a route through the forest
///
/// The states along the route are rebuilt, and any split state that is left with no children is removed.
/// Everything off the route is shared with the original forest.
///
pub(crate) fn replace_at_tree_path(states: &mut Vec<Arc<SubPathState>>, tree_path: &[usize], replacement: Option<Arc<SubPathState>>) {
    let (first, rest) = match tree_path.split_first() {
        Some(split) => split,
        None => return,
    };
    let first = *first;

    if first >= states.len() {
        return;
    }

    if rest.is_empty() {
        match replacement {
            Some(replacement) => states[first] = replacement,
            None => {
                states.remove(first);
            }
        }
    } else {
        let mut children = states[first].split_sub_paths().to_vec();
        replace_at_tree_path(&mut children, rest, replacement);

        if children.is_empty() {
            states.remove(first);
        } else {
            states[first] = Arc::new(states[first].with_split_children(children));
        }
    }
}
