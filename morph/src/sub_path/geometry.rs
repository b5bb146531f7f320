/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::sub_path::*;
use crate::consts::*;

use flo_morph_curves::*;

use itertools::*;

///
/// The point on a subpath that is nearest to a target point
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SubPathPoint {
    /// Index of the command that draws the segment containing the point
    pub command: usize,

    /// Position along that segment
    pub t: f64,

    pub point: Coord2,
    pub distance: f64,
}

impl SubPath {
    ///
    /// The total length of the segments in this subpath
    ///
    pub fn path_length(&self) -> f64 {
        self.segments().map(|(_, segment)| segment.length()).sum()
    }

    ///
    /// Finds the point that is a particular distance along this subpath
    ///
    /// Distances past the end of the subpath return its end point. Returns `None` for a subpath that draws nothing.
    ///
    pub fn point_at_length(&self, distance: f64) -> Option<Coord2> {
        let mut remaining = distance.max(0.0);
        let mut last_point = None;

        for (_, segment) in self.segments() {
            let length = segment.length();

            if remaining <= length {
                return Some(segment.point_at_pos(segment.pos_for_length(remaining)));
            }

            remaining -= length;
            last_point = Some(segment.end_point());
        }

        last_point
    }

    ///
    /// Finds the point on the outline of this subpath that is closest to a target point
    ///
    pub fn nearest_point(&self, target: &Coord2) -> Option<SubPathPoint> {
        self.segments()
            .map(|(command, segment)| {
                let nearest = segment.nearest_point(target);

                SubPathPoint {
                    command,
                    t: nearest.t,
                    point: nearest.point,
                    distance: nearest.distance,
                }
            })
            .fold(None, |closest: Option<SubPathPoint>, candidate| match closest {
                Some(closest) if closest.distance <= candidate.distance => Some(closest),
                _ => Some(candidate),
            })
    }

    ///
    /// True if a point is inside the area filled by this subpath (using the even-odd rule)
    ///
    /// Open subpaths are filled as if they were closed with a straight line.
    ///
    pub fn contains_point(&self, point: &Coord2) -> bool {
        let mut outline = vec![self.start_point()];
        for (_, segment) in self.segments() {
            outline.extend(segment.flatten(HIT_TEST_TOLERANCE));
        }

        if outline.len() < 3 {
            return false;
        }

        // Count crossings of a ray running in the +x direction
        let Coord2(x, y) = *point;
        let crossings = outline
            .iter()
            .circular_tuple_windows()
            .filter(|(p1, p2)| {
                if (p1.y() > y) == (p2.y() > y) {
                    false
                } else {
                    let cross_x = p1.x() + (y - p1.y()) * (p2.x() - p1.x()) / (p2.y() - p1.y());
                    x < cross_x
                }
            })
            .count();

        crossings % 2 == 1
    }
}
