/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Paths
//!
//! A `Path` is an immutable list of subpaths, along with the editing state that produced them. Paths can be
//! read from and written to path data, blended with other paths that have the same structure, and edited
//! using a `PathMutator`.
//!

mod interpolate;
mod parse;
mod path;
mod path_string;

pub use self::hit_test::*;
pub use self::path::*;
