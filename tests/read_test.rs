//! Tests for the streaming reader

mod common;

use common::IndexedMesh;
use libobj::{Error, Face, Index, IndexGroup, Position, read, read_full};
use std::cell::RefCell;
use std::io::Cursor;

fn triangle(indices: [u32; 3]) -> Face {
    Face::Triangle(indices.map(|i| IndexGroup::new(Index(i))))
}

#[test]
fn test_positions_and_faces() {
    let input = "v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\nf 3 2 1\n";
    let (mesh, result) = IndexedMesh::read_from(input, false, false).unwrap();

    assert_eq!(result.position_count, 3);
    assert_eq!(result.tex_coord_count, 0);
    assert_eq!(result.normal_count, 0);
    assert_eq!(result.face_count, 2);

    assert_eq!(
        mesh.positions,
        vec![
            Position::new(1.0, 2.0, 3.0),
            Position::new(4.0, 5.0, 6.0),
            Position::new(7.0, 8.0, 9.0),
        ]
    );
    assert_eq!(mesh.faces, vec![triangle([0, 1, 2]), triangle([2, 1, 0])]);

    result.reconcile(mesh.counts()).unwrap();
}

#[test]
fn test_full_mesh() {
    let input = "# Written by libobj\n\
                 v 1 2 3\n\
                 v 4 5 6\n\
                 v 7 8 9\n\
                 vt 0 0\n\
                 vt 0 1\n\
                 vt 1 1\n\
                 vn 1 0 0\n\
                 vn 0 1 0\n\
                 vn 0 0 1\n\
                 f 1 2 3\n\
                 f 3 2 1\n";
    let (mesh, result) = IndexedMesh::read_from(input, true, true).unwrap();

    assert_eq!(result.position_count, 3);
    assert_eq!(result.tex_coord_count, 3);
    assert_eq!(result.normal_count, 3);
    assert_eq!(result.face_count, 2);
    result.reconcile(mesh.counts()).unwrap();

    assert_eq!(mesh.tex_coords[1].u, 0.0);
    assert_eq!(mesh.tex_coords[1].v, 1.0);
    assert_eq!(mesh.normals[2].z, 1.0);
}

#[test]
fn test_optional_lines_counted_without_callbacks() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvt 1 1\nvn 0 0 1\nf 1 2 3\n";
    let (mesh, result) = IndexedMesh::read_from(input, false, false).unwrap();

    // The vt/vn lines are validated and counted, but nothing was stored.
    assert_eq!(result.tex_coord_count, 2);
    assert_eq!(result.normal_count, 1);
    assert!(mesh.tex_coords.is_empty());
    assert!(mesh.normals.is_empty());
}

#[test]
fn test_position_arity_round_trips() {
    let input = "v 1 2 3\nv 1 2 3 0.5\nv 0 0 0\nf 1 2 3\n";
    let (mesh, _) = IndexedMesh::read_from(input, false, false).unwrap();
    assert_eq!(mesh.positions[0].w, None);
    assert_eq!(mesh.positions[1].w, Some(0.5));
}

#[test]
fn test_negative_relative_indices() {
    // -1 is the most recently declared position: index 2 after three lines.
    let input = "v 1 2 3\nv 4 5 6\nv 7 8 9\nf -3 -2 -1\n";
    let (mesh, _) = IndexedMesh::read_from(input, false, false).unwrap();
    assert_eq!(mesh.faces, vec![triangle([0, 1, 2])]);
}

#[test]
fn test_relative_indices_track_attributes_independently() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
                 vt 0 0\nvt 1 1\n\
                 vn 0 0 1\n\
                 f -3/-2/-1 -2/-1/-1 -1/-2/-1\n";
    let (mesh, _) = IndexedMesh::read_from(input, true, true).unwrap();

    let corners = mesh.faces[0].corners();
    assert_eq!(corners[0].position, Index(0));
    assert_eq!(corners[0].tex_coord, Some(Index(0)));
    assert_eq!(corners[0].normal, Some(Index(0)));
    assert_eq!(corners[1].position, Index(1));
    assert_eq!(corners[1].tex_coord, Some(Index(1)));
    assert_eq!(corners[2].position, Index(2));
    assert_eq!(corners[2].tex_coord, Some(Index(0)));
}

#[test]
fn test_index_group_presence_round_trips() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\n\
                 f 1/1 2/1 3/1\nf 1//1 2//1 3//1\nf 1/1/1 2/1/1 3/1/1\n";
    let (mesh, _) = IndexedMesh::read_from(input, true, true).unwrap();

    let tex_only = mesh.faces[0].corners()[0];
    assert_eq!(tex_only.tex_coord, Some(Index(0)));
    assert_eq!(tex_only.normal, None);

    let normal_only = mesh.faces[1].corners()[0];
    assert_eq!(normal_only.tex_coord, None);
    assert_eq!(normal_only.normal, Some(Index(0)));

    let full = mesh.faces[2].corners()[0];
    assert_eq!(full.tex_coord, Some(Index(0)));
    assert_eq!(full.normal, Some(Index(0)));
}

#[test]
fn test_quad_and_polygon_faces() {
    let input = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nv 0.5 1.5 0\n\
                 f 1 2 3 4\nf 1 2 3 4 5\n";
    let (mesh, _) = IndexedMesh::read_from(input, false, false).unwrap();
    assert!(matches!(mesh.faces[0], Face::Quad(_)));
    assert!(matches!(mesh.faces[1], Face::Polygon(_)));
    assert_eq!(mesh.faces[1].corner_count(), 5);
}

#[test]
fn test_callbacks_fire_in_file_order() {
    let input = "v 0 0 0\nvn 0 0 1\nv 1 0 0\nvt 0 0\nv 0 1 0\nf 1 2 3\n";
    let events = RefCell::new(Vec::new());
    let result = read_full(
        Cursor::new(input),
        |_: Position<f32>| events.borrow_mut().push("v"),
        |_| events.borrow_mut().push("f"),
        |_| events.borrow_mut().push("vt"),
        |_| events.borrow_mut().push("vn"),
    )
    .unwrap();

    assert_eq!(
        events.into_inner(),
        vec!["v", "vn", "v", "vt", "v", "f"]
    );
    assert_eq!(result.position_count, 3);
}

#[test]
fn test_malformed_number_is_line_qualified() {
    let input = "v 0 0 0\nv 1 abc 0\n";
    let err = IndexedMesh::read_from(input, false, false).unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 2);
            assert_eq!(message, "failed parsing 'abc'");
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_too_few_face_corners() {
    let input = "v 0 0 0\nv 1 0 0\nf 1 2\n";
    let err = IndexedMesh::read_from(input, false, false).unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 3);
            assert_eq!(message, "face must have at least three indices");
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_zero_index_rejected() {
    let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n";
    let err = IndexedMesh::read_from(input, false, false).unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 4);
            assert_eq!(message, "parsed index cannot be zero");
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_out_of_range_tex_coord_is_fatal() {
    let input = "v 0 0 0\nvt 0.5 1.5\n";
    let err = IndexedMesh::read_from(input, true, false).unwrap_err();
    match err {
        Error::Validation(message) => {
            assert_eq!(
                message,
                "texture coordinate element must be in [0..1], was: 1.5"
            );
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_out_of_range_tex_coord_fatal_without_callback() {
    // Validation applies even when the caller did not ask for the values.
    let input = "v 0 0 0\nvt -0.25 0\n";
    let err = IndexedMesh::read_from(input, false, false).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_normal_arity_is_fixed() {
    let input = "vn 1 0\n";
    let err = IndexedMesh::read_from(input, false, true).unwrap_err();
    match err {
        Error::Parse { line, message } => {
            assert_eq!(line, 1);
            assert_eq!(message, "normals must have 3 values");
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn test_unrecognized_keywords_are_skipped() {
    let input = "mtllib scene.mtl\no cube\ng side\ns off\n\
                 v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl wood\nf 1 2 3\n";
    let (mesh, result) = IndexedMesh::read_from(input, false, false).unwrap();
    assert_eq!(result.position_count, 3);
    assert_eq!(result.face_count, 1);
    assert_eq!(mesh.faces, vec![triangle([0, 1, 2])]);
}

#[test]
fn test_empty_input_yields_zero_counts() {
    let result = read(
        Cursor::new(""),
        |_: Position<f32>| {},
        |_| {},
    )
    .unwrap();
    assert_eq!(result, libobj::ReadResult::default());
}

#[test]
fn test_callbacks_before_error_are_kept() {
    // Fatal errors do not undo callbacks that already fired.
    let input = "v 0 0 0\nv 1 0 0\nv bad 0 0\n";
    let positions = RefCell::new(Vec::new());
    let err = read(
        Cursor::new(input),
        |position: Position<f32>| positions.borrow_mut().push(position),
        |_| {},
    )
    .unwrap_err();
    assert!(matches!(err, Error::Parse { line: 3, .. }));
    assert_eq!(positions.into_inner().len(), 2);
}
