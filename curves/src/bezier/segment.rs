/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;
use super::super::line::*;
use super::subdivide::*;

use smallvec::*;

///
/// The order of a segment (the number of control points after the start point)
///
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum SegmentOrder {
    Linear = 1,
    Quadratic = 2,
    Cubic = 3,
}

///
/// A single piece of a path: a line, a quadratic bezier or a cubic bezier, including its start point
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Segment {
    /// A straight line from the first point to the second
    Line(Coord2, Coord2),

    /// Quadratic bezier: start point, control point, end point
    Quadratic(Coord2, Coord2, Coord2),

    /// Cubic bezier: start point, two control points, end point
    Cubic(Coord2, Coord2, Coord2, Coord2),
}

impl Segment {
    ///
    /// Creates a segment from a start point and the points that follow it (1 point for a line, 2 for a quadratic, 3 for a cubic)
    ///
    pub fn from_points(start: Coord2, points: &[Coord2]) -> Option<Segment> {
        match points {
            [end] => Some(Segment::Line(start, *end)),
            [cp, end] => Some(Segment::Quadratic(start, *cp, *end)),
            [cp1, cp2, end] => Some(Segment::Cubic(start, *cp1, *cp2, *end)),
            _ => None,
        }
    }

    #[inline]
    pub fn order(&self) -> SegmentOrder {
        match self {
            Segment::Line(..) => SegmentOrder::Linear,
            Segment::Quadratic(..) => SegmentOrder::Quadratic,
            Segment::Cubic(..) => SegmentOrder::Cubic,
        }
    }

    #[inline]
    pub fn start_point(&self) -> Coord2 {
        match self {
            Segment::Line(p, _) => *p,
            Segment::Quadratic(p, _, _) => *p,
            Segment::Cubic(p, _, _, _) => *p,
        }
    }

    #[inline]
    pub fn end_point(&self) -> Coord2 {
        match self {
            Segment::Line(_, p) => *p,
            Segment::Quadratic(_, _, p) => *p,
            Segment::Cubic(_, _, _, p) => *p,
        }
    }

    ///
    /// All of the points of this segment, including the start point
    ///
    pub fn points(&self) -> SmallVec<[Coord2; 4]> {
        match self {
            Segment::Line(p0, p1) => smallvec![*p0, *p1],
            Segment::Quadratic(p0, p1, p2) => smallvec![*p0, *p1, *p2],
            Segment::Cubic(p0, p1, p2, p3) => smallvec![*p0, *p1, *p2, *p3],
        }
    }

    ///
    /// The points following the start point (the control points and the end point)
    ///
    pub fn following_points(&self) -> SmallVec<[Coord2; 3]> {
        match self {
            Segment::Line(_, p1) => smallvec![*p1],
            Segment::Quadratic(_, p1, p2) => smallvec![*p1, *p2],
            Segment::Cubic(_, p1, p2, p3) => smallvec![*p1, *p2, *p3],
        }
    }

    ///
    /// Finds the point at the specified position along this segment
    ///
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        match self {
            Segment::Line(p0, p1) => p0.lerp(p1, t),
            Segment::Quadratic(p0, p1, p2) => de_casteljau3(t, *p0, *p1, *p2),
            Segment::Cubic(p0, p1, p2, p3) => de_casteljau4(t, *p0, *p1, *p2, *p3),
        }
    }

    ///
    /// Divides this segment in two at the specified `t` value
    ///
    /// The end point of the first half and the start point of the second half are both exactly `point_at_pos(t)`.
    ///
    pub fn subdivide(&self, t: f64) -> (Segment, Segment) {
        match self {
            Segment::Line(p0, p1) => {
                let mid = p0.lerp(p1, t);
                (Segment::Line(*p0, mid), Segment::Line(mid, *p1))
            }

            Segment::Quadratic(p0, p1, p2) => {
                let ((a0, a1, a2), (b0, b1, b2)) = subdivide3(t, *p0, *p1, *p2);
                (Segment::Quadratic(a0, a1, a2), Segment::Quadratic(b0, b1, b2))
            }

            Segment::Cubic(p0, p1, p2, p3) => {
                let ((a0, a1, a2, a3), (b0, b1, b2, b3)) = subdivide4(t, *p0, *p1, *p2, *p3);
                (Segment::Cubic(a0, a1, a2, a3), Segment::Cubic(b0, b1, b2, b3))
            }
        }
    }

    ///
    /// Returns the part of this segment that lies between `t1` and `t2`
    ///
    /// The end point of the section is exactly `point_at_pos(t2)` (and exactly the original end point when `t2` is 1)
    ///
    pub fn section(&self, t1: f64, t2: f64) -> Segment {
        extra_check!(t1 <= t2, "Section runs backwards ({} > {})", t1, t2);

        // Divide at t2 first so the end point comes straight from de Casteljau
        let upper = if t2 >= 1.0 { *self } else { self.subdivide(t2).0 };

        if t1 <= 0.0 || t2 <= 0.0 {
            upper
        } else {
            upper.subdivide(t1 / t2.min(1.0)).1
        }
    }

    ///
    /// Returns the same segment travelling in the opposite direction
    ///
    pub fn reverse(&self) -> Segment {
        match self {
            Segment::Line(p0, p1) => Segment::Line(*p1, *p0),
            Segment::Quadratic(p0, p1, p2) => Segment::Quadratic(*p2, *p1, *p0),
            Segment::Cubic(p0, p1, p2, p3) => Segment::Cubic(*p3, *p2, *p1, *p0),
        }
    }

    ///
    /// Expresses this segment with a higher order without changing its shape
    ///
    /// Returns `None` if the requested order is lower than the order of this segment, as that cannot be done exactly.
    ///
    pub fn elevate(&self, order: SegmentOrder) -> Option<Segment> {
        if order < self.order() {
            return None;
        }

        match (self, order) {
            (Segment::Line(p0, p1), SegmentOrder::Quadratic) => Some(Segment::Quadratic(*p0, p0.lerp(p1, 0.5), *p1)),
            (Segment::Line(p0, p1), SegmentOrder::Cubic) => Some(line_to_cubic(*p0, *p1)),
            (Segment::Quadratic(p0, p1, p2), SegmentOrder::Cubic) => {
                let cp1 = *p0 + (*p1 - *p0) * (2.0 / 3.0);
                let cp2 = *p2 + (*p1 - *p2) * (2.0 / 3.0);

                Some(Segment::Cubic(*p0, cp1, cp2, *p2))
            }
            _ => Some(*self),
        }
    }

    ///
    /// Creates a new segment of the same order by mapping every point through a function
    ///
    pub fn map_points(&self, mut map: impl FnMut(Coord2) -> Coord2) -> Segment {
        match self {
            Segment::Line(p0, p1) => Segment::Line(map(*p0), map(*p1)),
            Segment::Quadratic(p0, p1, p2) => Segment::Quadratic(map(*p0), map(*p1), map(*p2)),
            Segment::Cubic(p0, p1, p2, p3) => Segment::Cubic(map(*p0), map(*p1), map(*p2), map(*p3)),
        }
    }

    #[inline]
    pub fn transform(&self, transform: &Transform2D) -> Segment {
        self.map_points(|point| transform.transform_point(&point))
    }

    ///
    /// True if every point of this segment lies within `max_distance` of the start point
    ///
    pub fn is_point(&self, max_distance: f64) -> bool {
        let start = self.start_point();
        self.points().iter().all(|point| point.is_near_to(&start, max_distance))
    }
}
