/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

///
/// Errors that can occur while solving for a homography
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum HomographyError {
    /// The system has no unique solution (for instance, three of the points are collinear)
    Singular,
}

impl fmt::Display for HomographyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomographyError::Singular => write!(f, "the point correspondences do not define a unique perspective transform"),
        }
    }
}

impl Error for HomographyError {}
