/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Path commands
//!
//! A `Command` is one instruction of path data (move, line, quadratic, cubic or close) with absolute
//! coordinates. A `CommandState` is the editable record behind a command: the geometry it was originally
//! created with, plus the fragments it has been split into and the kinds those fragments were converted to.
//!

mod command;
mod command_id;
mod command_state;

pub use self::command::*;
pub use self::command_id::*;
pub use self::command_state::*;
