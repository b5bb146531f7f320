/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;

///
/// Finds the `t` value of the point on the line segment from `start` to `end` that is closest to `point`
///
/// The result is clamped to the range 0..=1. A line with no length always returns 0.
///
pub fn nearest_pos_on_line(point: &Coord2, start: &Coord2, end: &Coord2) -> f64 {
    let direction = *end - *start;
    let length_squared = direction.dot(&direction);

    if length_squared <= 0.0 {
        0.0
    } else {
        let t = (*point - *start).dot(&direction) / length_squared;
        t.max(0.0).min(1.0)
    }
}
