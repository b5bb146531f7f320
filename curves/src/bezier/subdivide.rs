/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::geo::*;

///
/// Evaluates a quadratic bezier curve at the specified `t` value using de Casteljau's algorithm
///
#[inline]
pub fn de_casteljau3(t: f64, w1: Coord2, w2: Coord2, w3: Coord2) -> Coord2 {
    let wn1 = w1.lerp(&w2, t);
    let wn2 = w2.lerp(&w3, t);

    wn1.lerp(&wn2, t)
}

///
/// Evaluates a cubic bezier curve at the specified `t` value using de Casteljau's algorithm
///
#[inline]
pub fn de_casteljau4(t: f64, w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> Coord2 {
    let wn1 = w1.lerp(&w2, t);
    let wn2 = w2.lerp(&w3, t);
    let wn3 = w3.lerp(&w4, t);

    let wnn1 = wn1.lerp(&wn2, t);
    let wnn2 = wn2.lerp(&wn3, t);

    wnn1.lerp(&wnn2, t)
}

///
/// Subdivides a quadratic bezier curve at `t`, returning the control points of the two halves
///
pub fn subdivide3(
    t: f64,
    w1: Coord2,
    w2: Coord2,
    w3: Coord2,
) -> ((Coord2, Coord2, Coord2), (Coord2, Coord2, Coord2)) {
    let wn1 = w1.lerp(&w2, t);
    let wn2 = w2.lerp(&w3, t);
    let p = wn1.lerp(&wn2, t);

    ((w1, wn1, p), (p, wn2, w3))
}

///
/// Subdivides a cubic bezier curve at `t`, returning the control points of the two halves
///
pub fn subdivide4(
    t: f64,
    w1: Coord2,
    w2: Coord2,
    w3: Coord2,
    w4: Coord2,
) -> ((Coord2, Coord2, Coord2, Coord2), (Coord2, Coord2, Coord2, Coord2)) {
    // First set of weights
    let wn1 = w1.lerp(&w2, t);
    let wn2 = w2.lerp(&w3, t);
    let wn3 = w3.lerp(&w4, t);

    // Second set
    let wnn1 = wn1.lerp(&wn2, t);
    let wnn2 = wn2.lerp(&wn3, t);

    // Point on the curve
    let p = wnn1.lerp(&wnn2, t);

    ((w1, wn1, wnn1, p), (p, wnn2, wn3, w4))
}
