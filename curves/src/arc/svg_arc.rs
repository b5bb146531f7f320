/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::super::bezier::*;

use std::f64::consts::{FRAC_PI_2, PI};

/// Maximum number of cubic curves generated for a single arc (each covers at most 90 degrees)
const MAX_ARC_CURVES: usize = 4;

///
/// An elliptical arc described the way path data describes it: by its end points, radii and flags
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SvgArc {
    pub start: Coord2,
    pub radii: (f64, f64),

    /// Rotation of the ellipse's x axis, in degrees
    pub x_axis_rotation: f64,

    /// Use the arc that sweeps through more than 180 degrees
    pub large_arc: bool,

    /// Draw the arc in the positive-angle direction
    pub sweep: bool,
    pub end: Coord2,
}

///
/// The centre parameterisation of an arc
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct CenterArc {
    center: Coord2,
    radii: (f64, f64),
    rotation: f64,
    start_angle: f64,
    sweep_angle: f64,
}

impl SvgArc {
    ///
    /// Converts this arc into the segments that approximate it
    ///
    /// An arc whose end points coincide produces no segments. An arc with a zero radius is a straight line.
    /// Otherwise the result is between 1 and 4 cubic curves, the last of which ends exactly at `self.end`.
    ///
    pub fn to_segments(&self) -> Vec<Segment> {
        if self.start == self.end {
            return vec![];
        }

        let center_arc = match self.center_parameterization() {
            Some(center_arc) => center_arc,
            None => return vec![Segment::Line(self.start, self.end)],
        };

        let num_curves = ((center_arc.sweep_angle.abs() / FRAC_PI_2) - 1e-9).ceil().max(1.0) as usize;
        let num_curves = num_curves.min(MAX_ARC_CURVES);
        let step = center_arc.sweep_angle / (num_curves as f64);

        // Length of the tangent handles for a unit circle arc of 'step' radians
        let handle = 4.0 / 3.0 * (step / 4.0).tan();

        let (sin_rot, cos_rot) = center_arc.rotation.sin_cos();
        let (rx, ry) = center_arc.radii;
        let center = center_arc.center;
        let place = |Coord2(x, y): Coord2| {
            let (x, y) = (x * rx, y * ry);
            Coord2(x * cos_rot - y * sin_rot + center.0, x * sin_rot + y * cos_rot + center.1)
        };

        let mut segments = Vec::with_capacity(num_curves);
        let mut last_point = self.start;

        for idx in 0..num_curves {
            let angle1 = center_arc.start_angle + step * (idx as f64);
            let angle2 = angle1 + step;
            let (sin1, cos1) = angle1.sin_cos();
            let (sin2, cos2) = angle2.sin_cos();

            // Bezier approximation of the unit circle, then scaled, rotated and translated into place
            let cp1 = place(Coord2(cos1 - handle * sin1, sin1 + handle * cos1));
            let cp2 = place(Coord2(cos2 + handle * sin2, sin2 - handle * cos2));
            let end = if idx == num_curves - 1 {
                // Snap to the requested end point so floating point drift never leaves a gap
                self.end
            } else {
                place(Coord2(cos2, sin2))
            };

            segments.push(Segment::Cubic(last_point, cp1, cp2, end));
            last_point = end;
        }

        segments
    }

    ///
    /// Solves for the centre of the ellipse (following the SVG implementation notes, section B.2.4)
    ///
    fn center_parameterization(&self) -> Option<CenterArc> {
        let (mut rx, mut ry) = (self.radii.0.abs(), self.radii.1.abs());
        if rx == 0.0 || ry == 0.0 {
            return None;
        }

        let rotation = (self.x_axis_rotation % 360.0).to_radians();
        let (sin_rot, cos_rot) = rotation.sin_cos();

        // Move the start point into the ellipse's frame, relative to the midpoint of the chord
        let half_dx = (self.start.0 - self.end.0) / 2.0;
        let half_dy = (self.start.1 - self.end.1) / 2.0;
        let x1 = cos_rot * half_dx + sin_rot * half_dy;
        let y1 = -sin_rot * half_dx + cos_rot * half_dy;

        // Radii that are too small to reach both points are scaled up until they just do
        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // The flags choose which of the two possible centres to use
        let rx_sq = rx * rx;
        let ry_sq = ry * ry;
        let numerator = rx_sq * ry_sq - rx_sq * y1 * y1 - ry_sq * x1 * x1;
        let denominator = rx_sq * y1 * y1 + ry_sq * x1 * x1;
        let sign = if self.large_arc == self.sweep { -1.0 } else { 1.0 };
        let coefficient = sign * (numerator / denominator).max(0.0).sqrt();

        let cx1 = coefficient * (rx * y1 / ry);
        let cy1 = coefficient * -(ry * x1 / rx);

        let center = Coord2(
            cos_rot * cx1 - sin_rot * cy1 + (self.start.0 + self.end.0) / 2.0,
            sin_rot * cx1 + cos_rot * cy1 + (self.start.1 + self.end.1) / 2.0,
        );

        // Angles on the unit circle
        let u = Coord2((x1 - cx1) / rx, (y1 - cy1) / ry);
        let v = Coord2((-x1 - cx1) / rx, (-y1 - cy1) / ry);

        let start_angle = u.1.atan2(u.0);
        let mut sweep_angle = u.cross(&v).atan2(u.dot(&v));

        if !self.sweep && sweep_angle > 0.0 {
            sweep_angle -= 2.0 * PI;
        } else if self.sweep && sweep_angle < 0.0 {
            sweep_angle += 2.0 * PI;
        }

        Some(CenterArc {
            center,
            radii: (rx, ry),
            rotation,
            start_angle,
            sweep_angle,
        })
    }
}
