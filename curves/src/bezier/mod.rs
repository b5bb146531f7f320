/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for describing, querying and manipulating path segments
//!
//! ```
//! # use flo_morph_curves::*;
//! # use flo_morph_curves::bezier::*;
//! #
//! let quad            = Segment::Quadratic(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
//!
//! let mid_point       = quad.point_at_pos(0.5);
//! let middle_section  = quad.section(0.25, 0.75);
//! let as_cubic        = quad.elevate(SegmentOrder::Cubic);
//! ```
//!
//! A `Segment` is a line, a quadratic bezier curve or a cubic bezier curve with an absolute start point.
//! Subdivision always uses de Casteljau's algorithm, so the point where a segment is divided is bit-for-bit
//! the same as the point returned by `point_at_pos()` for the same `t` value.
//!

mod flatten;
mod length;
mod nearest_point;
mod segment;
mod subdivide;

pub use self::nearest_point::*;
pub use self::segment::*;
pub use self::subdivide::*;

pub use super::geo::*;
