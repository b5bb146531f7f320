/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_morph
//!
//! Immutable vector paths that can be edited while staying *morphable*: two paths are morphable when
//! they have the same structure, so that their control points can be blended frame by frame to animate
//! one shape into the other.
//!
//! ```
//! # use flo_morph::*;
//! #
//! let start       = Path::parse("M 0 0 L 10 10 L 20 20").unwrap();
//! let end         = Path::parse("M 0 0 C 5 0 10 5 10 10 L 20 20").unwrap();
//!
//! // The paths use different commands for the first segment, so they can't be blended yet
//! assert!(!start.is_morphable_with(&end));
//!
//! let mut mutator = start.mutate();
//! mutator.convert_command(0, 1, CommandKind::Cubic).unwrap();
//! let start       = mutator.build();
//!
//! let halfway     = Path::interpolate(&start, &end, 0.5).unwrap();
//! assert!(halfway.path_string() == "M 0 0 C 4.167 1.667 8.333 5.833 10 10 L 20 20");
//! ```
//!
//! A `Path` never changes once built. Edits are staged on a `PathMutator` and committed with `build()`,
//! which returns a new path sharing every untouched subpath with the original. Each subpath keeps a
//! `SubPathState` that records how it was edited (reversed, shifted, split or converted), which is what
//! makes every edit exactly reversible.
//!

mod command;
mod consts;
mod error;
mod path;
mod path_mutator;
mod sub_path;
mod sub_path_state;

pub use self::command::*;
pub use self::consts::*;
pub use self::error::*;
pub use self::path::*;
pub use self::path_mutator::*;
pub use self::sub_path::*;
pub use self::sub_path_state::*;

pub use flo_homography::Homography;
pub use flo_morph_curves::{Coord2, Transform2D};
