/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_morph_curves::bezier::*;

#[test]
fn nearest_point_on_line() {
    let line = Segment::Line(Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let nearest = line.nearest_point(&Coord2(3.0, 4.0));

    assert!((nearest.t - 0.3).abs() < 1e-12);
    assert!(nearest.point.is_near_to(&Coord2(3.0, 0.0), 1e-12));
    assert!((nearest.distance - 4.0).abs() < 1e-12);
}

#[test]
fn nearest_point_beyond_line_end() {
    let line = Segment::Line(Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let nearest = line.nearest_point(&Coord2(15.0, 0.0));

    assert!(nearest.t == 1.0);
    assert!((nearest.distance - 5.0).abs() < 1e-12);
}

#[test]
fn nearest_point_on_quadratic() {
    let curve = Segment::Quadratic(Coord2(0.0, 0.0), Coord2(5.0, 10.0), Coord2(10.0, 0.0));
    let nearest = curve.nearest_point(&Coord2(5.0, 10.0));

    // Apex of the curve is at t = 0.5, (5, 5)
    assert!((nearest.t - 0.5).abs() < 1e-6);
    assert!(nearest.point.is_near_to(&Coord2(5.0, 5.0), 1e-6));
}

#[test]
fn nearest_point_on_cubic_matches_point_on_curve() {
    let curve = Segment::Cubic(Coord2(10.0, 100.0), Coord2(90.0, 30.0), Coord2(40.0, 140.0), Coord2(220.0, 220.0));

    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        let point = curve.point_at_pos(t);
        let nearest = curve.nearest_point(&point);

        assert!(nearest.distance < 0.001, "t={} distance={}", t, nearest.distance);
    }
}

#[test]
fn nearest_point_off_cubic_is_no_further_than_samples() {
    let curve = Segment::Cubic(Coord2(10.0, 100.0), Coord2(90.0, 30.0), Coord2(40.0, 140.0), Coord2(220.0, 220.0));
    let target = Coord2(100.0, 60.0);
    let nearest = curve.nearest_point(&target);

    for step in 0..=1000 {
        let t = (step as f64) / 1000.0;
        assert!(nearest.distance <= curve.point_at_pos(t).distance_to(&target) + 1e-6);
    }
}
