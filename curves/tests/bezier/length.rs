/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_morph_curves::bezier::*;

use std::f64::consts::PI;

#[test]
fn line_length() {
    let line = Segment::Line(Coord2(0.0, 0.0), Coord2(3.0, 4.0));

    assert!((line.length() - 5.0).abs() < 1e-12);
}

#[test]
fn straight_cubic_length() {
    let cubic = Segment::Line(Coord2(0.0, 0.0), Coord2(30.0, 40.0))
        .elevate(SegmentOrder::Cubic)
        .unwrap();

    assert!((cubic.length() - 50.0).abs() < 0.01);
}

#[test]
fn quarter_circle_length() {
    // Standard approximation of a quarter circle of radius 100
    let k = 100.0 * 0.5522847498;
    let arc = Segment::Cubic(Coord2(100.0, 0.0), Coord2(100.0, k), Coord2(k, 100.0), Coord2(0.0, 100.0));

    assert!((arc.length() - PI * 50.0).abs() < 0.1, "{}", arc.length());
}

#[test]
fn pos_for_length_on_line() {
    let line = Segment::Line(Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    assert!((line.pos_for_length(2.5) - 0.25).abs() < 1e-12);
    assert!(line.pos_for_length(-1.0) == 0.0);
    assert!(line.pos_for_length(20.0) == 1.0);
}

#[test]
fn pos_for_length_on_curve() {
    let curve = Segment::Quadratic(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let half = curve.length() / 2.0;
    let t = curve.pos_for_length(half);

    // The curve is symmetrical so half the length is at the middle
    assert!((t - 0.5).abs() < 0.001, "{}", t);
}
