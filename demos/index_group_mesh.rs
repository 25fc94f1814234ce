//! Example: separate index buffers per attribute
//!
//! Positions and normals keep their own value and index buffers; each face
//! corner pairs a position index with a normal index (`f 1//1 2//2 3//3` on
//! the wire). The same document is then read back into flat buffers.

use libobj::{Face, Index, IndexGroup, Normal, Position, read_with_normals, write_with_normals};
use std::io::Cursor;

#[derive(Debug, Default)]
struct Mesh {
    positions: Vec<Position<f32>>,
    normals: Vec<Normal<f32>>,
    position_indices: Vec<u32>,
    normal_indices: Vec<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mesh = Mesh {
        positions: vec![
            Position::new(1.0, 1.0, 0.0),
            Position::new(0.0, 1.0, 0.0),
            Position::new(1.0, 0.0, 0.0),
        ],
        normals: vec![
            Normal::new(0.0, 0.0, 1.0),
            Normal::new(0.0, 0.0, 1.0),
            Normal::new(0.0, 0.0, 1.0),
        ],
        position_indices: vec![0, 1, 2],
        normal_indices: vec![0, 1, 2],
    };

    // Each face pulls three corners from the two index buffers in lockstep.
    let faces = mesh
        .position_indices
        .chunks_exact(3)
        .zip(mesh.normal_indices.chunks_exact(3))
        .map(|(positions, normals)| {
            Face::Triangle([0, 1, 2].map(|i| IndexGroup {
                position: Index(positions[i]),
                tex_coord: None,
                normal: Some(Index(normals[i])),
            }))
        });

    let mut out = Vec::new();
    let written = write_with_normals(
        &mut out,
        mesh.positions.iter().copied(),
        mesh.normals.iter().copied(),
        faces,
    )?;
    println!("wrote {written:?}");

    let text = String::from_utf8(out)?;
    print!("{text}");

    let mut read_back = Mesh::default();
    let result = {
        let Mesh {
            positions,
            normals,
            position_indices,
            normal_indices,
        } = &mut read_back;
        read_with_normals(
            Cursor::new(&text),
            |position| positions.push(position),
            |face: Face| {
                for corner in face.corners() {
                    position_indices.push(corner.position.0);
                    if let Some(normal) = corner.normal {
                        normal_indices.push(normal.0);
                    }
                }
            },
            |normal| normals.push(normal),
        )?
    };

    println!("read {result:?}");
    assert_eq!(read_back.position_indices, mesh.position_indices);
    assert_eq!(read_back.normal_indices, mesh.normal_indices);

    Ok(())
}
