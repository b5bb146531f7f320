/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use uuid::Uuid;

///
/// Identifies a subpath state
///
/// Every subpath created by parsing, splitting or adding a collapsing subpath gets a new ID. Edits that only
/// change how a subpath is drawn (reversing, shifting, splitting commands) keep the ID.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct SubPathId(Uuid);

impl SubPathId {
    pub fn new() -> SubPathId {
        SubPathId(Uuid::new_v4())
    }
}

impl Default for SubPathId {
    fn default() -> Self {
        SubPathId::new()
    }
}
