/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_homography
//!
//! Finds the 2D perspective transform (homography) that maps four source points onto four destination points.
//!
//! ```
//! # use flo_homography::*;
//! #
//! let square      = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
//! let trapezium   = [(0.0, 0.0), (4.0, 0.0), (3.0, 2.0), (1.0, 2.0)];
//!
//! let homography  = Homography::from_correspondences(square, trapezium).unwrap();
//! let corner      = homography.distort((1.0, 1.0));
//! ```
//!
//! A homography has eight free parameters, so the four correspondences give an 8x8 linear system. This is
//! solved by LU decomposition with partial pivoting; the solver is exposed as `LuDecomposition` for
//! use with other square systems.
//!

mod error;
mod homography;
mod lu;

pub use self::error::*;
pub use self::homography::*;
pub use self::lu::*;
