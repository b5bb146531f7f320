/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_morph::*;

#[test]
fn reverse_lines() {
    let reversed = edited("M 0 0 L 10 10 L 20 20", |path| {
        path.reverse_sub_path(0)?;
        Ok(())
    });

    assert!(reversed == Ok("M 20 20 L 10 10 L 0 0".to_string()));
}

#[test]
fn reverse_swaps_control_points() {
    let reversed = edited("M 0 0 C 0 10 10 10 10 0 L 20 0", |path| {
        path.reverse_sub_path(0)?;
        Ok(())
    });

    assert!(reversed == Ok("M 20 0 L 10 0 C 10 10 0 10 0 0".to_string()));
}

#[test]
fn reverse_keeps_close_at_end() {
    let reversed = edited("M 0 0 L 10 0 L 10 10 Z", |path| {
        path.reverse_sub_path(0)?;
        Ok(())
    });

    assert!(reversed == Ok("M 0 0 L 10 10 L 10 0 Z".to_string()));
}

#[test]
fn reverse_twice_restores_path() {
    let original = Path::parse("M 0 0 Q 5 10 10 0 C 15 5 20 5 25 0 Z").unwrap();

    let mut mutator = original.mutate();
    mutator.reverse_sub_path(0).unwrap();
    mutator.reverse_sub_path(0).unwrap();
    let restored = mutator.build();

    assert!(restored.path_string() == original.path_string());
    assert!(!restored.leaf_states()[0].is_reversed());

    let original_ids = original.sub_paths()[0].commands().iter().map(|cmd| cmd.id()).collect::<Vec<_>>();
    let restored_ids = restored.sub_paths()[0].commands().iter().map(|cmd| cmd.id()).collect::<Vec<_>>();
    assert!(original_ids == restored_ids);
}

#[test]
fn reverse_keeps_command_ids() {
    let original = Path::parse("M 0 0 L 10 10 L 20 20").unwrap();

    let mut mutator = original.mutate();
    mutator.reverse_sub_path(0).unwrap();
    let reversed = mutator.build();

    let original_commands = original.sub_paths()[0].commands();
    let reversed_commands = reversed.sub_paths()[0].commands();

    assert!(reversed_commands[1].id() == original_commands[2].id());
    assert!(reversed_commands[2].id() == original_commands[1].id());
    assert!(reversed.leaf_states()[0].is_reversed());
}

#[test]
fn reverse_only_affects_one_sub_path() {
    let reversed = edited("M 0 0 L 1 1 M 5 5 L 6 6", |path| {
        path.reverse_sub_path(1)?;
        Ok(())
    });

    assert!(reversed == Ok("M 0 0 L 1 1 M 6 6 L 5 5".to_string()));
}

#[test]
fn reverse_missing_sub_path() {
    let reversed = edited("M 0 0 L 1 1", |path| {
        path.reverse_sub_path(1)?;
        Ok(())
    });

    assert!(reversed == Err(PathError::IndexOutOfRange { index: 1, len: 1 }));
}
