/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for straight lines
//!

mod nearest;
mod to_curve;

pub use self::nearest::*;
pub use self::to_curve::*;
