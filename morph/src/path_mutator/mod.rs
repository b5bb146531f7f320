/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Editing paths
//!
//! ```
//! # use flo_morph::*;
//! #
//! let path        = Path::parse("M 0 0 L 10 10 L 20 20").unwrap();
//!
//! let mut mutator = path.mutate();
//! mutator.reverse_sub_path(0).unwrap();
//! let reversed    = mutator.build();
//!
//! assert!(reversed.path_string() == "M 20 20 L 10 10 L 0 0");
//! ```
//!
//! Subpaths are addressed by their index in `Path::sub_paths()` and commands by their index within a subpath
//! (so command 0 is always the move command). Edits take effect immediately on the mutator, so the indexes
//! used by later edits refer to the mutated path.
//!

mod command_edits;
mod path_mutator;
mod sub_path_edits;

pub use self::path_mutator::*;
