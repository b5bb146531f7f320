/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_morph_curves
//!
//! The geometry kernel used by `flo_morph`. This describes the individual pieces that a vector path is made
//! from and the classical operations that an editor needs to perform on them:
//!
//! ```
//! # use flo_morph_curves::*;
//! # use flo_morph_curves::bezier::*;
//! #
//! let curve           = Segment::Cubic(Coord2(0.0, 0.0), Coord2(0.0, 10.0), Coord2(10.0, 10.0), Coord2(10.0, 0.0));
//!
//! let (left, right)   = curve.subdivide(0.5);
//! let nearest         = curve.nearest_point(&Coord2(5.0, 9.0));
//! let length          = curve.length();
//! ```
//!
//! Segments are always absolute: each one carries its own start point. Elliptical arcs are never stored
//! directly: the `arc` module turns them into a series of cubic segments.
//!

#[macro_use]
mod extra_check;

mod consts;

pub mod arc;
pub mod bezier;
pub mod geo;
pub mod line;

pub use self::consts::*;
pub use self::geo::*;
