/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_morph_curves::bezier::*;

#[test]
fn subdivide_line_at_midpoint() {
    let line = Segment::Line(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let (left, right) = line.subdivide(0.5);

    assert!(left == Segment::Line(Coord2(0.0, 0.0), Coord2(5.0, 5.0)));
    assert!(right == Segment::Line(Coord2(5.0, 5.0), Coord2(10.0, 10.0)));
}

#[test]
fn subdivided_cubic_meets_at_point_on_curve() {
    let curve = Segment::Cubic(Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, 5.0), Coord2(4.0, 2.0));

    for t in [0.1, 0.25, 0.33, 0.5, 0.7, 0.9] {
        let (left, right) = curve.subdivide(t);
        let expected = curve.point_at_pos(t);

        // Exactly the same point, not just a close one
        assert!(left.end_point() == expected);
        assert!(right.start_point() == expected);
        assert!(left.start_point() == curve.start_point());
        assert!(right.end_point() == curve.end_point());
    }
}

#[test]
fn subdivided_cubic_traces_same_curve() {
    let curve = Segment::Cubic(Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, 5.0), Coord2(4.0, 2.0));
    let (left, right) = curve.subdivide(0.4);

    for step in 0..=10 {
        let t = (step as f64) / 10.0;

        assert!(left.point_at_pos(t).is_near_to(&curve.point_at_pos(t * 0.4), 1e-9));
        assert!(right.point_at_pos(t).is_near_to(&curve.point_at_pos(0.4 + t * 0.6), 1e-9));
    }
}

#[test]
fn subdivided_quadratic_traces_same_curve() {
    let curve = Segment::Quadratic(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let (left, right) = curve.subdivide(0.5);

    assert!(left.end_point() == Coord2(5.0, 5.0));
    assert!(left.point_at_pos(0.5).is_near_to(&curve.point_at_pos(0.25), 1e-9));
    assert!(right.point_at_pos(0.5).is_near_to(&curve.point_at_pos(0.75), 1e-9));
}

#[test]
fn reverse_twice_is_identity() {
    let curve = Segment::Cubic(Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, 5.0), Coord2(4.0, 2.0));

    assert!(curve.reverse().start_point() == curve.end_point());
    assert!(curve.reverse().reverse() == curve);
    assert!(curve.reverse().point_at_pos(0.3).is_near_to(&curve.point_at_pos(0.7), 1e-9));
}
