/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Number of decimal places written by `Path::path_string()`
pub const PATH_PRECISION: u32 = 3;

/// Tolerance used when flattening curves for hit testing
pub const HIT_TEST_TOLERANCE: f64 = flo_morph_curves::CLOSE_DISTANCE;
