/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Coord2` is the 2D coordinate type used throughout the path engine, and `Transform2D` describes the
//! affine transforms that can be applied to a path without changing its structure.
//!

mod coord2;
mod transform;

pub use self::coord2::*;
pub use self::transform::*;
