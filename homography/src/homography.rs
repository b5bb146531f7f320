/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;
use super::lu::*;

/// Values of w closer to 0 than this are treated as being on the horizon line
const HORIZON: f64 = 1e-12;

///
/// A 2D perspective transform
///
/// Maps `(x, y)` to `((h11 x + h12 y + h13) / w, (h21 x + h22 y + h23) / w)` where `w = h31 x + h32 y + h33`.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Homography {
    matrix: [[f64; 3]; 3],
}

impl Homography {
    ///
    /// A homography that leaves every point where it is
    ///
    pub fn identity() -> Homography {
        Homography {
            matrix: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    ///
    /// Creates a homography from a 3x3 matrix (rows first)
    ///
    pub fn from_matrix(matrix: [[f64; 3]; 3]) -> Homography {
        Homography { matrix }
    }

    ///
    /// Finds the homography that maps each of the source points onto the corresponding target point
    ///
    /// Fails if the correspondences are degenerate (for example, if three of the source points lie on a line).
    ///
    pub fn from_correspondences(source: [(f64, f64); 4], target: [(f64, f64); 4]) -> Result<Homography, HomographyError> {
        // With h33 fixed at 1, each correspondence gives two linear equations in the remaining 8 unknowns
        let mut system = [[0.0; 8]; 8];
        let mut values = [0.0; 8];

        for (idx, ((x, y), (tx, ty))) in source.iter().zip(target.iter()).enumerate() {
            let (x, y, tx, ty) = (*x, *y, *tx, *ty);

            system[idx * 2] = [x, y, 1.0, 0.0, 0.0, 0.0, -x * tx, -y * tx];
            system[idx * 2 + 1] = [0.0, 0.0, 0.0, x, y, 1.0, -x * ty, -y * ty];
            values[idx * 2] = tx;
            values[idx * 2 + 1] = ty;
        }

        let h = LuDecomposition::new(system)?.solve(&values);
        if h.iter().any(|value| !value.is_finite()) {
            return Err(HomographyError::Singular);
        }

        Ok(Homography {
            matrix: [[h[0], h[1], h[2]], [h[3], h[4], h[5]], [h[6], h[7], 1.0]],
        })
    }

    #[inline]
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        self.matrix
    }

    ///
    /// Maps a point through this transform
    ///
    /// Points on the horizon line (where the projective divisor is 0) map to infinity.
    ///
    pub fn distort(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let [[h11, h12, h13], [h21, h22, h23], [h31, h32, h33]] = self.matrix;

        let w = h31 * x + h32 * y + h33;
        let px = h11 * x + h12 * y + h13;
        let py = h21 * x + h22 * y + h23;

        if w.abs() < HORIZON {
            (px.signum() * f64::INFINITY, py.signum() * f64::INFINITY)
        } else {
            (px / w, py / w)
        }
    }

    ///
    /// Returns the homography that reverses this one
    ///
    pub fn invert(&self) -> Result<Homography, HomographyError> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.matrix;

        // Adjugate of the matrix
        let adjugate = [
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ];
        let determinant = a * adjugate[0][0] + b * adjugate[1][0] + c * adjugate[2][0];

        if determinant.abs() < HORIZON {
            return Err(HomographyError::Singular);
        }

        // Any non-zero multiple of a homography is the same transform: normalise so the last entry is 1 where possible
        let scale = if adjugate[2][2].abs() > HORIZON { adjugate[2][2] } else { determinant };
        let mut matrix = adjugate;
        for row in matrix.iter_mut() {
            for value in row.iter_mut() {
                *value /= scale;
            }
        }

        Ok(Homography { matrix })
    }
}
