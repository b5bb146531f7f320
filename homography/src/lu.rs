/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::error::*;

/// Pivots smaller than this (relative to the largest coefficient in the matrix) indicate a singular matrix
const SINGULAR_PIVOT: f64 = 1e-12;

///
/// The LU decomposition of a square matrix, computed with partial pivoting
///
#[derive(Clone, PartialEq, Debug)]
pub struct LuDecomposition<const N: usize> {
    /// L (below the diagonal, with an implied unit diagonal) and U (on and above the diagonal) stored together
    lu: [[f64; N]; N],

    /// Row of the original matrix that ended up in each row of the decomposition
    permutation: [usize; N],
}

impl<const N: usize> LuDecomposition<N> {
    ///
    /// Decomposes a matrix, failing if it is singular
    ///
    pub fn new(matrix: [[f64; N]; N]) -> Result<LuDecomposition<N>, HomographyError> {
        let mut lu = matrix;
        let mut permutation = [0; N];
        for (idx, row) in permutation.iter_mut().enumerate() {
            *row = idx;
        }

        let scale = matrix
            .iter()
            .flat_map(|row| row.iter())
            .fold(0.0f64, |max, value| max.max(value.abs()));
        if scale == 0.0 {
            return Err(HomographyError::Singular);
        }

        for col in 0..N {
            // Partial pivoting: bring the row with the largest value in this column up to the diagonal
            let pivot_row = (col..N)
                .max_by(|a, b| lu[*a][col].abs().total_cmp(&lu[*b][col].abs()))
                .unwrap_or(col);

            if lu[pivot_row][col].abs() < SINGULAR_PIVOT * scale {
                return Err(HomographyError::Singular);
            }

            lu.swap(col, pivot_row);
            permutation.swap(col, pivot_row);

            let pivot = lu[col][col];
            for row in (col + 1)..N {
                let factor = lu[row][col] / pivot;
                lu[row][col] = factor;

                for inner in (col + 1)..N {
                    lu[row][inner] -= factor * lu[col][inner];
                }
            }
        }

        Ok(LuDecomposition { lu, permutation })
    }

    ///
    /// Solves `Ax = b` for `x`, where `A` is the decomposed matrix
    ///
    pub fn solve(&self, b: &[f64; N]) -> [f64; N] {
        // Forward substitution with the permuted right-hand side (L has a unit diagonal)
        let mut y = [0.0; N];
        for row in 0..N {
            let sum: f64 = (0..row).map(|col| self.lu[row][col] * y[col]).sum();
            y[row] = b[self.permutation[row]] - sum;
        }

        // Back substitution
        let mut x = [0.0; N];
        for row in (0..N).rev() {
            let sum: f64 = ((row + 1)..N).map(|col| self.lu[row][col] * x[col]).sum();
            x[row] = (y[row] - sum) / self.lu[row][row];
        }

        x
    }
}
