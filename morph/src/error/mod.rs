/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod invalid_operation;
mod parse_error;
mod path_error;

pub use self::invalid_operation::*;
pub use self::parse_error::*;
pub use self::path_error::*;
