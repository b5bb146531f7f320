/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::bezier::*;

///
/// Changes a line to a cubic bezier curve that traces exactly the same points at the same speed
///
pub fn line_to_cubic(start: Coord2, end: Coord2) -> Segment {
    let (cp1, cp2) = (start.lerp(&end, 1.0 / 3.0), start.lerp(&end, 2.0 / 3.0));

    Segment::Cubic(start, cp1, cp2, end)
}
