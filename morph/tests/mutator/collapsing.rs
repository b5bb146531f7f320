/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_morph::*;

#[test]
fn add_collapsing_sub_path() {
    let path = edit_path("M 0 0 L 10 0", |path| {
        path.add_collapsing_sub_path(Coord2(5.0, 5.0), 3)?;
        Ok(())
    })
    .unwrap();

    assert!(path.sub_paths().len() == 2);
    assert!(path.path_string() == "M 0 0 L 10 0 M 5 5 L 5 5 L 5 5");
    assert!(path.sub_paths()[1].is_collapsing());
    assert!(path.sub_paths()[1].is_hidden());
    assert!(!path.sub_paths()[0].is_hidden());
}

#[test]
fn collapsing_sub_path_needs_commands() {
    let added = edited("M 0 0 L 10 0", |path| {
        path.add_collapsing_sub_path(Coord2(5.0, 5.0), 0)?;
        Ok(())
    });

    assert!(added == invalid(InvalidOperation::EmptyCollapsingSubPath));
}

#[test]
fn delete_collapsing_sub_paths() {
    let deleted = edited("M 0 0 L 10 0", |path| {
        path.add_collapsing_sub_path(Coord2(5.0, 5.0), 3)?;
        path.add_collapsing_sub_path(Coord2(1.0, 1.0), 1)?;
        path.delete_collapsing_sub_paths();
        Ok(())
    });

    assert!(deleted == Ok("M 0 0 L 10 0".to_string()));
}

#[test]
fn collapsing_sub_path_pads_morph() {
    let start = edit_path("M 0 0 L 10 0 L 10 10 Z", |path| {
        path.add_collapsing_sub_path(Coord2(25.0, 25.0), 4)?;
        Ok(())
    })
    .unwrap();
    let end = Path::parse("M 0 0 L 10 0 L 10 10 Z M 20 20 L 30 20 L 30 30 L 20 20").unwrap();

    assert!(start.is_morphable_with(&end));

    let halfway = Path::interpolate(&start, &end, 0.5).unwrap();
    assert!(halfway.path_string() == "M 0 0 L 10 0 L 10 10 Z M 22.5 22.5 L 27.5 22.5 L 27.5 27.5 L 22.5 22.5");
    assert!(!halfway.sub_paths()[1].is_hidden());
}

#[test]
fn collapsing_sub_paths_are_not_hit() {
    let path = edit_path("M 0 0 L 10 0", |path| {
        path.add_collapsing_sub_path(Coord2(50.0, 50.0), 2)?;
        Ok(())
    })
    .unwrap();

    let hidden = HitTestOptions::default();
    let visible = HitTestOptions {
        include_hidden: true,
        ..HitTestOptions::default()
    };

    assert!(path.hit_test(Coord2(50.0, 50.0), &hidden).is_none());
    assert!(path.hit_test(Coord2(50.0, 50.0), &visible).map(|hit| hit.target)
        == Some(HitTarget::Point { sub_path: 1, command: 1 }));
}
