//! Example: reading into and writing from a caller-owned vertex mesh
//!
//! The library never sees the mesh type. Callbacks populate it during
//! reading and iterators feed the writer from it.

use libobj::{Face, Index, IndexGroup, Normal, Position, TexCoord, read_full, write_full};
use std::cell::RefCell;
use std::io::Cursor;

#[derive(Debug, Default, Clone, Copy)]
struct Vertex {
    position: Position<f32>,
    tex_coord: TexCoord<f32>,
    normal: Normal<f32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "\
v 1 1 0
v 0 1 0
v 1 0 0
vt 1 1
vt 0 1
vt 1 0
vn 0 0 1
vn 0 0 1
vn 0 0 1
f 1/1/1 2/2/2 3/3/3
";

    // Attribute lines interleave freely, so each attribute kind keeps its
    // own running counter into the shared vertex array: the first texture
    // coordinate belongs to the first vertex, and so on.
    let vertices = RefCell::new(Vec::<Vertex>::new());
    let mut indices = Vec::new();
    let mut position_count = 0;
    let mut tex_coord_count = 0;
    let mut normal_count = 0;

    let vertex_at = |slot: usize| {
        let mut vertices = vertices.borrow_mut();
        if vertices.len() <= slot {
            vertices.resize_with(slot + 1, Vertex::default);
        }
    };

    let result = read_full(
        Cursor::new(input),
        |position| {
            vertex_at(position_count);
            vertices.borrow_mut()[position_count].position = position;
            position_count += 1;
        },
        |face: Face| {
            for corner in face.corners() {
                indices.push(corner.position.0);
            }
        },
        |tex_coord| {
            vertex_at(tex_coord_count);
            vertices.borrow_mut()[tex_coord_count].tex_coord = tex_coord;
            tex_coord_count += 1;
        },
        |normal| {
            vertex_at(normal_count);
            vertices.borrow_mut()[normal_count].normal = normal;
            normal_count += 1;
        },
    )?;
    let vertices = vertices.into_inner();

    // Reconcile the engine's counters against our own containers.
    if result.position_count != vertices.len() {
        return Err("position count does not match vertex count".into());
    }
    println!("read {result:?}");

    // Write the mesh back out; every vertex attribute shares one index.
    let faces = indices.chunks_exact(3).map(|chunk| {
        Face::Triangle([0, 1, 2].map(|i| IndexGroup {
            position: Index(chunk[i]),
            tex_coord: Some(Index(chunk[i])),
            normal: Some(Index(chunk[i])),
        }))
    });

    let mut out = Vec::new();
    let written = write_full(
        &mut out,
        vertices.iter().map(|vertex| vertex.position),
        vertices.iter().map(|vertex| vertex.tex_coord),
        vertices.iter().map(|vertex| vertex.normal),
        faces,
        &libobj::WriteOptions::default(),
    )?;
    println!("wrote {written:?}");
    println!("{}", String::from_utf8(out)?);

    Ok(())
}
