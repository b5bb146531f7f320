/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;
use super::super::line::*;
use super::segment::*;

use roots::find_roots_cubic;

/// Number of evenly spaced samples used to find a starting point on a cubic curve
const NEAREST_POINT_SAMPLES: usize = 32;

/// Number of Newton-Raphson refinement steps
const NEAREST_POINT_ITERATIONS: usize = 8;

///
/// The result of projecting a point onto a segment
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NearestPoint {
    /// Position along the segment
    pub t: f64,

    /// The closest point on the segment
    pub point: Coord2,

    /// The distance from the target point to `point`
    pub distance: f64,
}

impl NearestPoint {
    fn at(segment: &Segment, t: f64, target: &Coord2) -> NearestPoint {
        let point = segment.point_at_pos(t);

        NearestPoint {
            t,
            point,
            distance: point.distance_to(target),
        }
    }

    fn closest(self, other: NearestPoint) -> NearestPoint {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
}

impl Segment {
    ///
    /// Finds the point on this segment that is closest to the specified point
    ///
    pub fn nearest_point(&self, target: &Coord2) -> NearestPoint {
        match self {
            Segment::Line(p0, p1) => NearestPoint::at(self, nearest_pos_on_line(target, p0, p1), target),
            Segment::Quadratic(p0, p1, p2) => nearest_point_quadratic(self, p0, p1, p2, target),
            Segment::Cubic(p0, p1, p2, p3) => nearest_point_cubic(self, p0, p1, p2, p3, target),
        }
    }
}

///
/// The closest point on a quadratic curve is a root of a cubic polynomial, which can be solved directly
///
fn nearest_point_quadratic(segment: &Segment, p0: &Coord2, p1: &Coord2, p2: &Coord2, target: &Coord2) -> NearestPoint {
    // B(t) - target = m + 2ta + t^2b
    let a = *p1 - *p0;
    let b = *p2 - *p1 * 2.0 + *p0;
    let m = *p0 - *target;

    // (B(t) - target) . B'(t) = 0
    let roots = find_roots_cubic(b.dot(&b), 3.0 * a.dot(&b), 2.0 * a.dot(&a) + m.dot(&b), m.dot(&a));

    roots
        .as_ref()
        .iter()
        .filter(|t| **t > 0.0 && **t < 1.0)
        .map(|t| NearestPoint::at(segment, *t, target))
        .fold(
            NearestPoint::at(segment, 0.0, target).closest(NearestPoint::at(segment, 1.0, target)),
            NearestPoint::closest,
        )
}

///
/// For cubic curves, the polynomial is quintic, so sample the curve and refine the best sample with Newton-Raphson
///
fn nearest_point_cubic(
    segment: &Segment,
    p0: &Coord2,
    p1: &Coord2,
    p2: &Coord2,
    p3: &Coord2,
    target: &Coord2,
) -> NearestPoint {
    let mut best = (0..=NEAREST_POINT_SAMPLES)
        .map(|idx| NearestPoint::at(segment, (idx as f64) / (NEAREST_POINT_SAMPLES as f64), target))
        .fold(NearestPoint::at(segment, 0.0, target), NearestPoint::closest);

    // Derivative weights
    let d1 = (*p1 - *p0) * 3.0;
    let d2 = (*p2 - *p1) * 3.0;
    let d3 = (*p3 - *p2) * 3.0;

    // Second derivative weights
    let dd1 = (d2 - d1) * 2.0;
    let dd2 = (d3 - d2) * 2.0;

    let mut t = best.t;
    for _ in 0..NEAREST_POINT_ITERATIONS {
        let s = 1.0 - t;
        let offset = segment.point_at_pos(t) - *target;
        let derivative = d1 * (s * s) + d2 * (2.0 * s * t) + d3 * (t * t);
        let second_derivative = dd1 * s + dd2 * t;

        let numerator = offset.dot(&derivative);
        let denominator = derivative.dot(&derivative) + offset.dot(&second_derivative);

        if denominator.abs() < f64::EPSILON {
            break;
        }

        t = (t - numerator / denominator).max(0.0).min(1.0);
        best = best.closest(NearestPoint::at(segment, t, target));
    }

    best
}
