/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;
use crate::consts::*;

use std::ops::Mul;

///
/// An affine transformation matrix
///
/// Only the first two rows are stored: the third row of an affine transform is always `[0, 0, 1]`.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform2D(pub [[f64; 3]; 2]);

impl Default for Transform2D {
    fn default() -> Transform2D {
        Transform2D::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
    }

    pub fn translate(dx: f64, dy: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, dx], [0.0, 1.0, dy]])
    }

    pub fn scale(sx: f64, sy: f64) -> Transform2D {
        Transform2D([[sx, 0.0, 0.0], [0.0, sy, 0.0]])
    }

    ///
    /// Creates a rotation about the origin, specified in radians (positive values rotate from the x axis towards the y axis)
    ///
    pub fn rotate(radians: f64) -> Transform2D {
        let (sin, cos) = radians.sin_cos();
        Transform2D([[cos, -sin, 0.0], [sin, cos, 0.0]])
    }

    pub fn rotate_degrees(degrees: f64) -> Transform2D {
        Transform2D::rotate(degrees.to_radians())
    }

    ///
    /// Creates a transform from the six values used by the SVG `matrix(a b c d e f)` syntax
    ///
    pub fn from_svg_matrix(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Transform2D {
        Transform2D([[a, c, e], [b, d, f]])
    }

    ///
    /// Returns the transform that applies this transform followed by `next`
    ///
    pub fn then(&self, next: &Transform2D) -> Transform2D {
        let Transform2D([[a1, b1, c1], [d1, e1, f1]]) = *self;
        let Transform2D([[a2, b2, c2], [d2, e2, f2]]) = *next;

        Transform2D([
            [a2 * a1 + b2 * d1, a2 * b1 + b2 * e1, a2 * c1 + b2 * f1 + c2],
            [d2 * a1 + e2 * d1, d2 * b1 + e2 * e1, d2 * c1 + e2 * f1 + f2],
        ])
    }

    pub fn determinant(&self) -> f64 {
        let Transform2D([[a, b, _], [d, e, _]]) = *self;
        a * e - b * d
    }

    ///
    /// True if this transform collapses the plane onto a line or a point
    ///
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() < SINGULAR_DETERMINANT
    }

    ///
    /// Returns the inverse of this transform, or `None` if it is singular
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        if self.is_singular() {
            return None;
        }

        let Transform2D([[a, b, c], [d, e, f]]) = *self;
        let det = self.determinant();

        let ia = e / det;
        let ib = -b / det;
        let id = -d / det;
        let ie = a / det;

        Some(Transform2D([[ia, ib, -(ia * c + ib * f)], [id, ie, -(id * c + ie * f)]]))
    }

    #[inline]
    pub fn transform_point(&self, point: &Coord2) -> Coord2 {
        let Transform2D([[a, b, c], [d, e, f]]) = *self;
        let Coord2(x, y) = *point;

        Coord2(a * x + b * y + c, d * x + e * y + f)
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    ///
    /// Matrix product: `a * b` applies `b` first, then `a`
    ///
    fn mul(self, rhs: Transform2D) -> Transform2D {
        rhs.then(&self)
    }
}
