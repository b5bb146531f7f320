/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_morph::*;

#[test]
fn reverse_then_shift_back() {
    let shifted = edited("M 0 0 L 0 10 L 10 10 L 10 0 L 0 0", |path| {
        path.reverse_sub_path(0)?;
        path.shift_sub_path_back(0)?;
        Ok(())
    });

    assert!(shifted == Ok("M 0 10 L 0 0 L 10 0 L 10 10 L 0 10".to_string()));
}

#[test]
fn shift_forward() {
    let shifted = edited("M 0 0 L 0 10 L 10 10 L 10 0 L 0 0", |path| {
        path.shift_sub_path_forward(0)?;
        Ok(())
    });

    assert!(shifted == Ok("M 0 10 L 10 10 L 10 0 L 0 0 L 0 10".to_string()));
}

#[test]
fn shift_moves_close_to_end() {
    let shifted = edited("M 0 0 L 10 0 L 10 10 Z", |path| {
        path.shift_sub_path_forward(0)?;
        Ok(())
    });

    assert!(shifted == Ok("M 10 0 L 10 10 L 0 0 Z".to_string()));
}

#[test]
fn shift_cycle_returns_to_start() {
    let original = Path::parse("M 0 0 L 10 0 C 15 0 15 10 10 10 L 0 10 Z").unwrap();
    let num_commands = original.sub_paths()[0].commands().len() - 1;

    let mut mutator = original.mutate();
    for _ in 0..num_commands {
        mutator.shift_sub_path_forward(0).unwrap();
    }
    let shifted = mutator.build();

    assert!(shifted.leaf_states()[0].shift_offset() == 0);
    assert!(shifted.path_string() == original.path_string());
}

#[test]
fn shift_back_undoes_shift_forward() {
    let original = "M 0 0 L 10 0 L 10 10 L 0 10 Z";
    let shifted = edited(original, |path| {
        path.shift_sub_path_forward(0)?;
        path.shift_sub_path_forward(0)?;
        path.shift_sub_path_back(0)?;
        path.shift_sub_path_back(0)?;
        Ok(())
    });

    assert!(shifted == Ok(original.to_string()));
}

#[test]
fn reverse_keeps_start_of_shifted_path() {
    let path = edit_path("M 0 0 L 10 0 L 10 10 L 0 10 Z", |path| {
        path.shift_sub_path_forward(0)?;
        path.reverse_sub_path(0)?;
        Ok(())
    })
    .unwrap();

    assert!(path.sub_paths()[0].start_point() == Coord2(10.0, 0.0));
    assert!(path.path_string() == "M 10 0 L 0 0 L 0 10 L 10 10 Z");
}

#[test]
fn cannot_shift_open_path() {
    let shifted = edited("M 0 0 L 10 10 L 20 20", |path| {
        path.shift_sub_path_forward(0)?;
        Ok(())
    });

    assert!(shifted == invalid(InvalidOperation::OpenSubPath));
}
