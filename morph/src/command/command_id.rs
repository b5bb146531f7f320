/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use uuid::Uuid;

///
/// Uniquely identifies a command within a path
///
/// Identifiers survive edits: a command keeps its ID when its subpath is reversed or shifted, and the last piece
/// of a split command keeps the ID of the command that was split. This makes it possible to track which
/// command is which across the frames of an animation.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct CommandId(Uuid);

impl CommandId {
    ///
    /// Creates a unique new command ID
    ///
    pub fn new() -> CommandId {
        CommandId(Uuid::new_v4())
    }
}

impl Default for CommandId {
    fn default() -> Self {
        CommandId::new()
    }
}
