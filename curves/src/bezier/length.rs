/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::consts::*;
use super::segment::*;

use itertools::*;

/// Maximum number of times a curve is subdivided while measuring it
const MAX_LENGTH_DEPTH: usize = 16;

/// Number of bisection steps used when finding the position at a particular distance along a segment
const POS_FOR_LENGTH_ITERATIONS: usize = 32;

impl Segment {
    ///
    /// Measures the length of this segment
    ///
    /// Lines are measured exactly. Curves are subdivided until the control polygon and the chord agree to within `SMALL_DISTANCE`.
    ///
    pub fn length(&self) -> f64 {
        match self {
            Segment::Line(p0, p1) => p0.distance_to(p1),
            curve => curve_length(curve, 0),
        }
    }

    ///
    /// Finds the `t` value at which the length of the segment from its start reaches `distance`
    ///
    /// Distances beyond the end of the segment return 1.0, and negative distances return 0.0.
    ///
    pub fn pos_for_length(&self, distance: f64) -> f64 {
        if distance <= 0.0 {
            return 0.0;
        }

        let total = self.length();
        if distance >= total {
            return 1.0;
        }

        if let Segment::Line(..) = self {
            return distance / total;
        }

        let (mut low, mut high) = (0.0, 1.0);
        for _ in 0..POS_FOR_LENGTH_ITERATIONS {
            let mid = (low + high) * 0.5;

            if self.section(0.0, mid).length() < distance {
                low = mid;
            } else {
                high = mid;
            }
        }

        (low + high) * 0.5
    }
}

///
/// Length of the polygon formed by the points of a segment
///
fn polygon_length(segment: &Segment) -> f64 {
    segment.points().iter().tuple_windows().map(|(p1, p2)| p1.distance_to(p2)).sum()
}

fn curve_length(segment: &Segment, depth: usize) -> f64 {
    let chord = segment.start_point().distance_to(&segment.end_point());
    let polygon = polygon_length(segment);

    if polygon - chord <= SMALL_DISTANCE || depth >= MAX_LENGTH_DEPTH {
        // For a flat enough curve, the arc length lies between the chord and the control polygon
        (polygon + chord) * 0.5
    } else {
        let (left, right) = segment.subdivide(0.5);
        curve_length(&left, depth + 1) + curve_length(&right, depth + 1)
    }
}
