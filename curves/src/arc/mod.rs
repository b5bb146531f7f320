/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Describing elliptical arcs
//!
//! The `arc` module converts the endpoint-parameterised elliptical arcs used by path data into bezier
//! curves. Arcs are never kept as arcs: the path engine only ever sees the cubic curves produced here.
//!

mod svg_arc;

pub use self::svg_arc::*;
