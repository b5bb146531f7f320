/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_homography::*;
use flo_morph::*;

use std::sync::Arc;

const OPEN_AND_CLOSED: &str = "M 0 0 L 10 0 M 20 20 L 30 20 L 30 30 Z";

#[test]
fn delete_stroked_sub_path() {
    let deleted = edited(OPEN_AND_CLOSED, |path| {
        path.delete_stroked_sub_path(0)?;
        Ok(())
    });

    assert!(deleted == Ok("M 20 20 L 30 20 L 30 30 Z".to_string()));
}

#[test]
fn delete_filled_sub_path() {
    let deleted = edited(OPEN_AND_CLOSED, |path| {
        path.delete_filled_sub_path(1)?;
        Ok(())
    });

    assert!(deleted == Ok("M 0 0 L 10 0".to_string()));
}

#[test]
fn delete_checks_sub_path_is_open_or_closed() {
    let stroked = edited(OPEN_AND_CLOSED, |path| {
        path.delete_stroked_sub_path(1)?;
        Ok(())
    });
    let filled = edited(OPEN_AND_CLOSED, |path| {
        path.delete_filled_sub_path(0)?;
        Ok(())
    });

    assert!(stroked == invalid(InvalidOperation::ClosedSubPath));
    assert!(filled == invalid(InvalidOperation::OpenSubPath));
}

#[test]
fn delete_parts_of_split_sub_path() {
    let path = edit_path("M 0 0 L 10 0 L 20 0", |path| {
        path.split_stroked_sub_path(0, 1)?;
        path.delete_stroked_sub_path(1)?;
        Ok(())
    })
    .unwrap();

    assert!(path.path_string() == "M 0 0 L 10 0");
    assert!(path.sub_path_states().len() == 1);

    let mut mutator = path.mutate();
    mutator.delete_stroked_sub_path(0).unwrap();
    let path = mutator.build();

    // The split state goes when its last part is deleted
    assert!(path.is_empty());
    assert!(path.sub_path_states().is_empty());
}

#[test]
fn move_sub_path() {
    let moved = edited("M 0 0 L 1 1 M 5 5 L 6 6 M 9 9 L 8 8", |path| {
        path.move_sub_path(0, 2)?;
        Ok(())
    });

    assert!(moved == Ok("M 5 5 L 6 6 M 9 9 L 8 8 M 0 0 L 1 1".to_string()));
}

#[test]
fn move_sub_path_out_of_range() {
    let moved = edited("M 0 0 L 1 1 M 5 5 L 6 6", |path| {
        path.move_sub_path(0, 2)?;
        Ok(())
    });

    assert!(moved == Err(PathError::IndexOutOfRange { index: 2, len: 2 }));
}

#[test]
fn transform_path() {
    let path = Path::parse("M 0 0 L 10 10 Q 20 0 30 10").unwrap();
    let moved = path.transform(&Transform2D::translate(10.0, -5.0)).unwrap();

    assert!(moved.path_string() == "M 10 -5 L 20 5 Q 30 -5 40 5");
    assert!(moved.is_morphable_with(&path));
}

#[test]
fn singular_transform_is_rejected() {
    let path = Path::parse("M 0 0 L 10 10").unwrap();
    let flattened = path.transform(&Transform2D::scale(0.0, 1.0));

    assert!(flattened == Err(PathError::InvalidOperation(InvalidOperation::SingularTransform)));
}

#[test]
fn transform_keeps_split_history() {
    let unsplit = edited("M 0 0 L 10 10 L 20 20", |path| {
        path.split_command(0, 1, &[0.5])?;
        path.transform(&Transform2D::scale(2.0, 2.0))?;
        path.unsplit_command(0, 1)?;
        Ok(())
    });

    assert!(unsplit == Ok("M 0 0 L 20 20 L 40 40".to_string()));
}

#[test]
fn distort_path() {
    let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let bigger_square = [(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];
    let homography = Homography::from_correspondences(square, bigger_square).unwrap();

    let distorted = edited("M 0 0 L 1 0 L 1 1 Z", |path| {
        path.distort(&homography);
        Ok(())
    });

    assert!(distorted == Ok("M 0 0 L 2 0 L 2 2 Z".to_string()));
}

#[test]
fn edits_share_untouched_sub_paths() {
    let original = Path::parse("M 0 0 L 1 1 M 5 5 L 6 6").unwrap();

    let mut mutator = original.mutate();
    mutator.reverse_sub_path(0).unwrap();
    let edited = mutator.build();

    assert!(!Arc::ptr_eq(&original.sub_path_states()[0], &edited.sub_path_states()[0]));
    assert!(Arc::ptr_eq(&original.sub_path_states()[1], &edited.sub_path_states()[1]));
    assert!(Arc::ptr_eq(&original.sub_paths()[1], &edited.sub_paths()[1]));
}

#[test]
fn original_path_is_unchanged() {
    let original = Path::parse("M 0 0 L 10 10 L 20 20").unwrap();

    let mut mutator = original.mutate();
    mutator.reverse_sub_path(0).unwrap();
    mutator.split_command(0, 1, &[0.5]).unwrap();
    let _edited = mutator.build();

    assert!(original.path_string() == "M 0 0 L 10 10 L 20 20");
    assert!(!original.leaf_states()[0].is_reversed());
}

#[test]
fn path_length() {
    let path = Path::parse("M 0 0 L 3 4 L 3 10 M 0 0 L 1 0").unwrap();

    assert!((path.path_length() - 12.0).abs() < 1e-9);
}

#[test]
fn paths_are_send_and_sync() {
    fn is_send_sync<T: Send + Sync>() {}

    is_send_sync::<Path>();
    is_send_sync::<PathMutator>();
}
