//! Shared mesh containers for integration tests
//!
//! A deliberately simple struct-of-arrays mesh, used to exercise the
//! callback and iterator protocols the way a real consumer would: callbacks
//! push into the vectors, iterators read back out of them, and the returned
//! counters are reconciled against the vector lengths.

#![allow(dead_code)]

use libobj::{
    Face, Normal, Position, ReadResult, TexCoord, WriteOptions, WriteResult, read, read_full,
    read_with_normals, read_with_tex_coords, write_full,
};
use std::io::Cursor;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<Position<f32>>,
    pub tex_coords: Vec<TexCoord<f32>>,
    pub normals: Vec<Normal<f32>>,
    pub faces: Vec<Face>,
}

impl IndexedMesh {
    /// Counters derived from the container lengths, for reconciliation
    pub fn counts(&self) -> ReadResult {
        ReadResult {
            position_count: self.positions.len(),
            tex_coord_count: self.tex_coords.len(),
            normal_count: self.normals.len(),
            face_count: self.faces.len(),
        }
    }

    /// Read OBJ text into a fresh mesh, optionally materializing texture
    /// coordinates and normals
    pub fn read_from(
        text: &str,
        with_tex_coords: bool,
        with_normals: bool,
    ) -> libobj::Result<(Self, ReadResult)> {
        let mut mesh = IndexedMesh::default();
        let IndexedMesh {
            positions,
            tex_coords,
            normals,
            faces,
        } = &mut mesh;

        let input = Cursor::new(text);
        let result = match (with_tex_coords, with_normals) {
            (false, false) => read(
                input,
                |position| positions.push(position),
                |face| faces.push(face),
            )?,
            (true, false) => read_with_tex_coords(
                input,
                |position| positions.push(position),
                |face| faces.push(face),
                |tex_coord| tex_coords.push(tex_coord),
            )?,
            (false, true) => read_with_normals(
                input,
                |position| positions.push(position),
                |face| faces.push(face),
                |normal| normals.push(normal),
            )?,
            (true, true) => read_full(
                input,
                |position| positions.push(position),
                |face| faces.push(face),
                |tex_coord| tex_coords.push(tex_coord),
                |normal| normals.push(normal),
            )?,
        };

        Ok((mesh, result))
    }

    /// Write the mesh to a string, returning it with the writer's counters
    pub fn write_to_string(&self) -> libobj::Result<(String, WriteResult)> {
        let mut out = Vec::new();
        let result = write_full(
            &mut out,
            self.positions.iter().copied(),
            self.tex_coords.iter().copied(),
            self.normals.iter().copied(),
            self.faces.iter().cloned(),
            &WriteOptions::default(),
        )?;
        let text = String::from_utf8(out).expect("writer emits UTF-8");
        Ok((text, result))
    }
}
