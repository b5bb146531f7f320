/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use crate::command::*;
use crate::error::*;
use crate::sub_path::*;

use log::*;

impl SubPath {
    ///
    /// True if this subpath has the same commands in the same order as another
    ///
    pub fn is_morphable_with(&self, other: &SubPath) -> bool {
        self.commands().len() == other.commands().len()
            && self
                .commands()
                .iter()
                .zip(other.commands().iter())
                .all(|(a, b)| a.kind() == b.kind())
    }

    ///
    /// Blends the points of two morphable subpaths
    ///
    fn interpolate(start: &SubPath, end: &SubPath, fraction: f64) -> SubPath {
        let commands = start
            .commands()
            .iter()
            .zip(end.commands().iter())
            .map(|(start_command, end_command)| {
                let points = start_command
                    .points()
                    .iter()
                    .zip(end_command.points().iter())
                    .map(|(p1, p2)| p1.lerp(p2, fraction))
                    .collect();

                Command::with_id(start_command.kind(), points, start_command.id(), false)
            })
            .collect();

        SubPath::from_commands(commands, start.is_collapsing() && end.is_collapsing())
    }
}

impl Path {
    ///
    /// True if this path can be blended with another path
    ///
    /// Paths are morphable when they have the same number of subpaths and the corresponding subpaths have the
    /// same kinds of command in the same order.
    ///
    pub fn is_morphable_with(&self, other: &Path) -> bool {
        self.sub_paths().len() == other.sub_paths().len()
            && self
                .sub_paths()
                .iter()
                .zip(other.sub_paths().iter())
                .all(|(a, b)| a.is_morphable_with(b))
    }

    ///
    /// Creates a path part way between two morphable paths
    ///
    /// A fraction of 0 returns the start path and 1 returns the end path. The command IDs of the result are
    /// taken from the start path, and the result has no editing history.
    ///
    pub fn interpolate(start: &Path, end: &Path, fraction: f64) -> Result<Path, PathError> {
        if !start.is_morphable_with(end) {
            return Err(InvalidOperation::NotMorphable.into());
        }

        if fraction == 0.0 {
            return Ok(start.clone());
        } else if fraction == 1.0 {
            return Ok(end.clone());
        }

        let sub_paths = start
            .sub_paths()
            .iter()
            .zip(end.sub_paths().iter())
            .map(|(start_sub_path, end_sub_path)| SubPath::interpolate(start_sub_path, end_sub_path, fraction))
            .collect::<Vec<_>>();

        Ok(Path::from_sub_paths(sub_paths))
    }

    ///
    /// As for `interpolate()`, except that the start path is returned if the paths are not morphable
    ///
    pub fn interpolate_or_start(start: &Path, end: &Path, fraction: f64) -> Path {
        match Path::interpolate(start, end, fraction) {
            Ok(path) => path,
            Err(err) => {
                warn!("Cannot interpolate paths: {}", err);
                start.clone()
            }
        }
    }
}
