/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use crate::command::*;
use crate::consts::*;
use crate::sub_path::*;

use itertools::*;

use std::fmt;

///
/// Formats a number with at most `precision` decimal places, without trailing zeros
///
/// Halves are rounded away from zero, and negative values that round to zero are written as '0'.
///
pub(crate) fn format_number(value: f64, precision: u32) -> String {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    let text = format!("{:.*}", precision as usize, rounded);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

impl Command {
    ///
    /// Writes this command as path data (like 'L 10 10')
    ///
    pub fn to_path_string(&self, precision: u32) -> String {
        Some(self.kind().letter().to_string())
            .into_iter()
            .chain(
                self.points()
                    .iter()
                    .flat_map(|point| [point.x(), point.y()])
                    .map(|value| format_number(value, precision)),
            )
            .join(" ")
    }
}

impl SubPath {
    pub fn to_path_string(&self, precision: u32) -> String {
        self.commands().iter().map(|command| command.to_path_string(precision)).join(" ")
    }
}

impl Path {
    ///
    /// Writes this path as path data, with absolute coordinates rounded to 3 decimal places
    ///
    /// ```
    /// # use flo_morph::*;
    /// #
    /// let path = Path::parse("m 0 0 l 5 5 h 1.00004 z").unwrap();
    /// assert!(path.path_string() == "M 0 0 L 5 5 L 6 5 Z");
    /// ```
    ///
    pub fn path_string(&self) -> String {
        self.to_path_string_with_precision(PATH_PRECISION)
    }

    pub fn to_path_string_with_precision(&self, precision: u32) -> String {
        self.sub_paths().iter().map(|sub_path| sub_path.to_path_string(precision)).join(" ")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}
