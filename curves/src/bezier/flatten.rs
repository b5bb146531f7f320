/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;
use super::segment::*;

use itertools::*;

/// Upper limit on the number of lines a single curve is flattened into
const MAX_FLATTEN_STEPS: usize = 256;

impl Segment {
    ///
    /// Approximates this segment with straight lines, returning the points following the start point
    ///
    /// The last point returned is always exactly the end point of the segment.
    ///
    pub fn flatten(&self, tolerance: f64) -> Vec<Coord2> {
        let steps = match self {
            Segment::Line(..) => 1,
            curve => {
                // The deviation from the chord shrinks with the square of the number of steps
                let polygon: f64 = curve.points().iter().tuple_windows().map(|(p1, p2)| p1.distance_to(p2)).sum();
                let steps = (polygon / tolerance.max(f64::EPSILON)).sqrt().ceil() as usize;

                steps.max(1).min(MAX_FLATTEN_STEPS)
            }
        };

        (1..=steps)
            .map(|step| {
                if step == steps {
                    self.end_point()
                } else {
                    self.point_at_pos((step as f64) / (steps as f64))
                }
            })
            .collect()
    }
}
