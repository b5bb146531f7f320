/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Add, Mul, Neg, Sub};

///
/// Represents a 2D point
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    ///
    /// The z component of the cross product of two vectors
    ///
    #[inline]
    pub fn cross(&self, target: &Coord2) -> f64 {
        self.0 * target.1 - self.1 * target.0
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        (*self - *target).magnitude()
    }

    ///
    /// True if this point is within `max_distance` of another point
    ///
    #[inline]
    pub fn is_near_to(&self, target: &Coord2, max_distance: f64) -> bool {
        self.distance_to(target) <= max_distance
    }

    ///
    /// Linearly interpolates between this point and another one
    ///
    /// This is written so that a `t` of exactly 0 or exactly 1 returns one of the two points unchanged.
    ///
    #[inline]
    pub fn lerp(&self, target: &Coord2, t: f64) -> Coord2 {
        let s = 1.0 - t;
        Coord2(self.0 * s + target.0 * t, self.1 * s + target.1 * t)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(coord: Coord2) -> (f64, f64) {
        (coord.0, coord.1)
    }
}
