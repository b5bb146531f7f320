/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Subpath editing state
//!
//! A `SubPathState` remembers how a subpath was edited: the `CommandState`s of its commands, whether it is
//! drawn in reverse, which command it starts from, and the subpaths it has been split into. The commands
//! that are actually drawn are worked out from this state when they are first needed.
//!
//! Split subpaths form a tree. Only the leaves of the tree are drawn: `flatten_sub_path_states()` returns them
//! in the order that they appear in a path.
//!

mod display;
mod flatten;
mod sub_path_id;
mod sub_path_state;
mod sub_path_state_mutator;

pub(crate) use self::display::*;
pub use self::flatten::*;
pub use self::sub_path_id::*;
pub use self::sub_path_state::*;
pub use self::sub_path_state_mutator::*;
