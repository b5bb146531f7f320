/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_morph::*;

#[test]
fn line_to_cubic() {
    let converted = edited("M 0 0 L 30 0", |path| {
        path.convert_command(0, 1, CommandKind::Cubic)?;
        Ok(())
    });

    assert!(converted == Ok("M 0 0 C 10 0 20 0 30 0".to_string()));
}

#[test]
fn line_to_quadratic() {
    let converted = edited("M 0 0 L 30 0", |path| {
        path.convert_command(0, 1, CommandKind::Quadratic)?;
        Ok(())
    });

    assert!(converted == Ok("M 0 0 Q 15 0 30 0".to_string()));
}

#[test]
fn quadratic_to_cubic() {
    let converted = edited("M 0 0 Q 15 30 30 0", |path| {
        path.convert_command(0, 1, CommandKind::Cubic)?;
        Ok(())
    });

    assert!(converted == Ok("M 0 0 C 10 20 20 20 30 0".to_string()));
}

#[test]
fn cannot_convert_curve_to_line() {
    let converted = edited("M 0 0 C 0 10 10 10 10 0", |path| {
        path.convert_command(0, 1, CommandKind::Line)?;
        Ok(())
    });

    assert!(converted == invalid(InvalidOperation::LossyConversion));
}

#[test]
fn cannot_convert_move() {
    let converted = edited("M 0 0 L 10 0", |path| {
        path.convert_command(0, 0, CommandKind::Line)?;
        Ok(())
    });

    assert!(converted == invalid(InvalidOperation::CannotConvert));
}

#[test]
fn cannot_convert_to_move_or_close() {
    for kind in [CommandKind::Move, CommandKind::Close].iter() {
        let converted = edited("M 0 0 L 10 0", |path| {
            path.convert_command(0, 1, *kind)?;
            Ok(())
        });

        assert!(converted == invalid(InvalidOperation::CannotConvert));
    }
}

#[test]
fn convert_makes_paths_morphable() {
    let start = Path::parse("M 0 0 L 10 10 L 20 20").unwrap();
    let end = Path::parse("M 0 0 C 5 0 10 5 10 10 L 20 20").unwrap();

    assert!(!start.is_morphable_with(&end));

    let mut mutator = start.mutate();
    mutator.convert_command(0, 1, CommandKind::Cubic).unwrap();
    let start = mutator.build();

    assert!(start.is_morphable_with(&end));
}

#[test]
fn unconvert_restores_kinds() {
    let unconverted = edited("M 0 0 L 30 0 Q 40 10 50 0", |path| {
        path.convert_command(0, 1, CommandKind::Cubic)?;
        path.convert_command(0, 2, CommandKind::Cubic)?;
        path.unconvert_sub_path(0)?;
        Ok(())
    });

    assert!(unconverted == Ok("M 0 0 L 30 0 Q 40 10 50 0".to_string()));
}

#[test]
fn unconvert_keeps_splits() {
    let unconverted = edited("M 0 0 L 30 0", |path| {
        path.split_command(0, 1, &[0.5])?;
        path.convert_command(0, 1, CommandKind::Cubic)?;
        path.unconvert_sub_path(0)?;
        Ok(())
    });

    assert!(unconverted == Ok("M 0 0 L 15 0 L 30 0".to_string()));
}

#[test]
fn convert_one_piece_of_split_command() {
    let converted = edited("M 0 0 L 30 0", |path| {
        path.split_command(0, 1, &[0.5])?;
        path.convert_command(0, 2, CommandKind::Quadratic)?;
        Ok(())
    });

    assert!(converted == Ok("M 0 0 L 15 0 Q 22.5 0 30 0".to_string()));
}

#[test]
fn revert_removes_all_edits() {
    let reverted = edited("M 0 0 L 10 0 L 10 10 Z", |path| {
        path.split_command(0, 2, &[0.5])?;
        path.convert_command(0, 1, CommandKind::Cubic)?;
        path.reverse_sub_path(0)?;
        path.shift_sub_path_forward(0)?;
        path.revert();
        Ok(())
    });

    assert!(reverted == Ok("M 0 0 L 10 0 L 10 10 Z".to_string()));
}

#[test]
fn sub_path_state_tracks_edits() {
    let path = edit_path("M 0 0 L 30 0 L 30 30", |path| {
        path.split_command(0, 1, &[0.5])?;
        path.convert_command(0, 3, CommandKind::Cubic)?;
        Ok(())
    })
    .unwrap();
    let state = &path.leaf_states()[0];

    assert!(state.command_states().len() == 3);
    assert!(state.command_states()[1].is_split());
    assert!(!state.command_states()[1].is_converted());
    assert!(!state.command_states()[2].is_split());
    assert!(state.command_states()[2].is_converted());
    assert!(state.command_states()[2].original_command().kind() == CommandKind::Line);
}
