/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_morph::*;

const SQUARE: &str = "M 0 0 L 10 0 L 10 10 L 0 10 Z";

#[test]
fn split_stroked_sub_path() {
    let path = edit_path("M 0 0 L 10 0 L 20 0 L 30 0", |path| {
        path.split_stroked_sub_path(0, 2)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 0 0 L 10 0 L 20 0 M 20 0 L 30 0");
    assert!(path.sub_paths().len() == 2);

    // Both parts are still one subpath at the top level
    assert!(path.sub_path_states().len() == 1);
    assert!(path.sub_path_states()[0].split_kind() == Some(SplitKind::Stroked));
    assert!(path.sub_path_states()[0].split_sub_paths().len() == 2);
}

#[test]
fn revert_stroked_split() {
    let reverted = edited("M 0 0 L 10 0 L 20 0 L 30 0", |path| {
        path.split_stroked_sub_path(0, 2)?;
        path.revert();
        Ok(())
    });

    assert!(reverted == Ok("M 0 0 L 10 0 L 20 0 L 30 0".to_string()));
}

#[test]
fn split_reversed_stroked_sub_path() {
    let split = edited("M 0 0 L 10 0 L 20 0 L 30 0", |path| {
        path.reverse_sub_path(0)?;
        path.split_stroked_sub_path(0, 1)?;
        Ok(())
    });

    assert!(split == Ok("M 30 0 L 20 0 M 20 0 L 10 0 L 0 0".to_string()));
}

#[test]
fn stroked_split_keeps_split_commands() {
    let path = edit_path("M 0 0 L 20 0 L 40 0", |path| {
        path.split_command(0, 1, &[0.5])?;
        path.split_stroked_sub_path(0, 2)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 0 0 L 10 0 L 20 0 M 20 0 L 40 0");
    assert!(path.sub_paths()[0].commands()[1].is_split_point());

    let mut mutator = path.mutate();
    mutator.unsplit_command(0, 1).unwrap();
    assert!(mutator.build().path_string() == "M 0 0 L 20 0 M 20 0 L 40 0");
}

#[test]
fn cannot_split_closed_path_as_stroked() {
    let split = edited(SQUARE, |path| {
        path.split_stroked_sub_path(0, 2)?;
        Ok(())
    });

    assert!(split == invalid(InvalidOperation::ClosedSubPath));
}

#[test]
fn stroked_split_needs_commands_on_both_sides() {
    let split_at_move = edited("M 0 0 L 10 0 L 20 0", |path| {
        path.split_stroked_sub_path(0, 0)?;
        Ok(())
    });
    let split_at_end = edited("M 0 0 L 10 0 L 20 0", |path| {
        path.split_stroked_sub_path(0, 2)?;
        Ok(())
    });

    assert!(split_at_move == invalid(InvalidOperation::CannotSplitCommand));
    assert!(split_at_end == Err(PathError::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn split_filled_sub_path() {
    let path = edit_path(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 10 0 L 10 10 L 0 10 L 10 0 M 0 10 L 0 0 L 10 0 L 0 10");
    assert!(path.sub_paths().iter().all(|sub_path| sub_path.is_closed()));
    assert!(path.sub_path_states()[0].split_kind() == Some(SplitKind::Filled));
}

#[test]
fn split_filled_sub_path_at_start() {
    let split = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 2, 4)?;
        Ok(())
    });

    assert!(split == Ok("M 10 10 L 0 10 L 0 0 L 10 10 M 0 0 L 10 0 L 10 10 L 0 0".to_string()));
}

#[test]
fn delete_chord_rejoins_sub_path() {
    for (sub_path, command) in [(0, 3), (1, 3)].iter() {
        let rejoined = edited(SQUARE, |path| {
            path.split_filled_sub_path(0, 1, 3)?;
            path.delete_filled_sub_path_segment(*sub_path, *command)?;
            Ok(())
        });

        assert!(rejoined == Ok(SQUARE.to_string()));
    }
}

#[test]
fn only_chords_can_be_deleted() {
    let not_chord = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        path.delete_filled_sub_path_segment(0, 1)?;
        Ok(())
    });
    let not_split = edited(SQUARE, |path| {
        path.delete_filled_sub_path_segment(0, 1)?;
        Ok(())
    });

    assert!(not_chord == invalid(InvalidOperation::NotFilledSplitSegment));
    assert!(not_split == invalid(InvalidOperation::NotFilledSplitSegment));
}

#[test]
fn filled_split_needs_closed_path() {
    let split = edited("M 0 0 L 10 0 L 10 10 L 0 10", |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        Ok(())
    });

    assert!(split == invalid(InvalidOperation::OpenSubPath));
}

#[test]
fn filled_split_range_is_checked() {
    let backwards = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 3, 1)?;
        Ok(())
    });
    let from_move = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 0, 2)?;
        Ok(())
    });
    let past_end = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 5)?;
        Ok(())
    });

    assert!(backwards == invalid(InvalidOperation::InvalidSplitRange));
    assert!(from_move == invalid(InvalidOperation::InvalidSplitRange));
    assert!(past_end == Err(PathError::IndexOutOfRange { index: 5, len: 5 }));
}

#[test]
fn split_parts_can_be_split_again() {
    let path = edit_path("M 0 0 L 10 0 L 20 0 L 30 0", |path| {
        path.split_stroked_sub_path(0, 2)?;
        path.split_stroked_sub_path(0, 1)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 0 0 L 10 0 M 10 0 L 20 0 M 20 0 L 30 0");

    let leaves = flatten_sub_path_states(path.sub_path_states());
    assert!(leaves.len() == 3);
    assert!(leaves.iter().all(|leaf| leaf.is_leaf()));

    let mut mutator = path.mutate();
    mutator.revert();
    assert!(mutator.build().path_string() == "M 0 0 L 10 0 L 20 0 L 30 0");
}

#[test]
fn rejoined_sub_path_keeps_split_commands() {
    let path = edit_path(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        path.split_command(0, 1, &[0.5])?;
        path.delete_filled_sub_path_segment(0, 4)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 0 0 L 10 0 L 10 5 L 10 10 L 0 10 Z");
    assert!(path.sub_path_states()[0].is_leaf());

    let mut mutator = path.mutate();
    mutator.unsplit_command(0, 2).unwrap();
    assert!(mutator.build().path_string() == SQUARE);
}

#[test]
fn rejoined_sub_path_keeps_converted_commands() {
    let path = edit_path("M 0 0 L 30 0 L 30 30 L 0 30 Z", |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        path.convert_command(1, 1, CommandKind::Cubic)?;
        path.delete_filled_sub_path_segment(1, 3)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 0 0 L 30 0 L 30 30 L 0 30 C 0 20 0 10 0 0");

    let mut mutator = path.mutate();
    mutator.unconvert_sub_path(0).unwrap();
    assert!(mutator.build().path_string() == "M 0 0 L 30 0 L 30 30 L 0 30 Z");
}

#[test]
fn rejoin_after_reversing_half() {
    let rejoined = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        path.reverse_sub_path(0)?;
        path.delete_filled_sub_path_segment(0, 1)?;
        Ok(())
    });

    assert!(rejoined == Ok(SQUARE.to_string()));
}

#[test]
fn deleted_half_cannot_be_rejoined() {
    let rejoined = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 3)?;
        path.delete_filled_sub_path(1)?;
        path.delete_filled_sub_path_segment(0, 3)?;
        Ok(())
    });

    assert!(rejoined == invalid(InvalidOperation::IncompleteFilledSplit));
}

#[test]
fn filled_split_cannot_cut_off_straight_edge() {
    let inside = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 2)?;
        Ok(())
    });
    let outside = edited(SQUARE, |path| {
        path.split_filled_sub_path(0, 1, 4)?;
        Ok(())
    });

    assert!(inside == invalid(InvalidOperation::InvalidSplitRange));
    assert!(outside == invalid(InvalidOperation::InvalidSplitRange));
}

#[test]
fn filled_split_can_cut_off_curved_edge() {
    let split = edited("M 0 0 L 10 0 Q 15 5 10 10 L 0 10 Z", |path| {
        path.split_filled_sub_path(0, 1, 2)?;
        Ok(())
    });

    assert!(split == Ok("M 10 0 Q 15 5 10 10 L 10 0 M 10 10 L 0 10 L 0 0 L 10 0 L 10 10".to_string()));
}
