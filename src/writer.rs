//! Serialization of mesh data to OBJ text
//!
//! The writer pulls values lazily from caller-supplied iterators, one
//! attribute kind at a time, and formats each value onto its own line. At
//! most one produced value is held at any moment and an exhausted source is
//! never polled again. The formatted body accumulates in an internal string
//! so that the header can carry the final vertex and face counts before the
//! sections are emitted to the caller's stream.
//!
//! Section order is fixed: header comments, positions, texture coordinates,
//! normals, faces. Face corners are always written as absolute one-based
//! indices, never in the relative form, regardless of how the source was
//! declared.

use num_traits::Float;
use std::fmt::Display;
use std::io::Write;

use crate::channel::{NormalChannel, PositionChannel, TexCoordChannel};
use crate::error::{Error, Result};
use crate::model::{Face, IndexGroup, Normal, Position, TexCoord, WriteResult};

/// Generator tag emitted on the first header line
const GENERATOR: &str = "libobj";

/// Output configuration for the writer
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Line terminator appended after every emitted line
    pub newline: String,
}

impl WriteOptions {
    /// Options with the default `"\n"` newline
    pub fn new() -> Self {
        Self {
            newline: "\n".to_string(),
        }
    }

    /// Use the given line terminator
    pub fn with_newline(newline: impl Into<String>) -> Self {
        Self {
            newline: newline.into(),
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Write positions and faces as OBJ text
///
/// # Example
///
/// ```
/// use libobj::{write, Face, Index, IndexGroup, Position};
///
/// # fn main() -> libobj::Result<()> {
/// let positions = vec![
///     Position::new(0.0f32, 0.0, 0.0),
///     Position::new(1.0, 0.0, 0.0),
///     Position::new(0.0, 1.0, 0.0),
/// ];
/// let faces = vec![Face::from_corners(
///     [0u32, 1, 2].map(|i| IndexGroup::new(Index(i))).to_vec(),
/// )?];
///
/// let mut out = Vec::new();
/// let result = write(&mut out, positions, faces)?;
/// assert_eq!(result.position_count, 3);
/// assert_eq!(result.face_count, 1);
/// # Ok(())
/// # }
/// ```
pub fn write<W, T, P, F>(dst: W, positions: P, faces: F) -> Result<WriteResult>
where
    W: Write,
    T: Float + Display,
    P: IntoIterator<Item = Position<T>>,
    F: IntoIterator<Item = Face>,
{
    write_full(
        dst,
        positions,
        std::iter::empty::<TexCoord<T>>(),
        std::iter::empty::<Normal<T>>(),
        faces,
        &WriteOptions::default(),
    )
}

/// Write positions, texture coordinates and faces as OBJ text
pub fn write_with_tex_coords<W, T, P, TC, F>(
    dst: W,
    positions: P,
    tex_coords: TC,
    faces: F,
) -> Result<WriteResult>
where
    W: Write,
    T: Float + Display,
    P: IntoIterator<Item = Position<T>>,
    TC: IntoIterator<Item = TexCoord<T>>,
    F: IntoIterator<Item = Face>,
{
    write_full(
        dst,
        positions,
        tex_coords,
        std::iter::empty::<Normal<T>>(),
        faces,
        &WriteOptions::default(),
    )
}

/// Write positions, normals and faces as OBJ text
pub fn write_with_normals<W, T, P, N, F>(
    dst: W,
    positions: P,
    normals: N,
    faces: F,
) -> Result<WriteResult>
where
    W: Write,
    T: Float + Display,
    P: IntoIterator<Item = Position<T>>,
    N: IntoIterator<Item = Normal<T>>,
    F: IntoIterator<Item = Face>,
{
    write_full(
        dst,
        positions,
        std::iter::empty::<TexCoord<T>>(),
        normals,
        faces,
        &WriteOptions::default(),
    )
}

/// Write every attribute kind as OBJ text
///
/// A source with no data is an empty iterator. Texture coordinates are
/// validated as they are produced; a component outside `[0, 1]` aborts the
/// write. Returns the [`WriteResult`] counters for the caller to reconcile
/// against its own structure.
pub fn write_full<W, T, P, TC, N, F>(
    mut dst: W,
    positions: P,
    tex_coords: TC,
    normals: N,
    faces: F,
    options: &WriteOptions,
) -> Result<WriteResult>
where
    W: Write,
    T: Float + Display,
    P: IntoIterator<Item = Position<T>>,
    TC: IntoIterator<Item = TexCoord<T>>,
    N: IntoIterator<Item = Normal<T>>,
    F: IntoIterator<Item = Face>,
{
    let newline = options.newline.as_str();
    let mut body = String::new();
    let mut result = WriteResult::default();

    for position in positions {
        push_value_line(&mut body, "v", position.components(), newline);
        result.position_count += 1;
    }
    for tex_coord in tex_coords {
        tex_coord.validate()?;
        push_value_line(&mut body, "vt", tex_coord.components(), newline);
        result.tex_coord_count += 1;
    }
    for normal in normals {
        push_value_line(&mut body, "vn", normal.components(), newline);
        result.normal_count += 1;
    }
    for face in faces {
        push_face_line(&mut body, &face, newline)?;
        result.face_count += 1;
    }

    let mut header = String::new();
    header.push_str("# Written by ");
    header.push_str(GENERATOR);
    header.push_str(newline);
    header.push_str("# Vertex count: ");
    header.push_str(&result.position_count.to_string());
    header.push_str(newline);
    header.push_str("# Face count: ");
    header.push_str(&result.face_count.to_string());
    header.push_str(newline);

    dst.write_all(header.as_bytes())?;
    dst.write_all(body.as_bytes())?;
    Ok(result)
}

/// Write validated channels as OBJ text
///
/// The face section is assembled from the per-channel index buffers: corner
/// `j` of face `i` combines index `i * indices_per_face + j` of every
/// present channel into one index group. Present texture coordinate and
/// normal channels must match the position channel exactly, in value count,
/// index count and face arity; partial coverage is a validation error.
pub fn write_channels<W, T>(
    dst: W,
    positions: &PositionChannel<'_, T>,
    tex_coords: Option<&TexCoordChannel<'_, T>>,
    normals: Option<&NormalChannel<'_, T>>,
    options: &WriteOptions,
) -> Result<WriteResult>
where
    W: Write,
    T: Float + Display,
{
    if let Some(tex) = tex_coords {
        if tex.value_count() != positions.value_count() {
            return Err(Error::validation(format!(
                "texture coordinate count ({}) must be same as position count ({})",
                tex.value_count(),
                positions.value_count()
            )));
        }
        if tex.indices_per_face() != positions.indices_per_face() {
            return Err(Error::validation(format!(
                "texture coordinate indices per face ({}) must be same as position indices per face ({})",
                tex.indices_per_face(),
                positions.indices_per_face()
            )));
        }
        if tex.indices().len() != positions.indices().len() {
            return Err(Error::validation(format!(
                "texture coordinate index count ({}) must be same as position index count ({})",
                tex.indices().len(),
                positions.indices().len()
            )));
        }
    }
    if let Some(nml) = normals {
        if nml.value_count() != positions.value_count() {
            return Err(Error::validation(format!(
                "normal count ({}) must be same as position count ({})",
                nml.value_count(),
                positions.value_count()
            )));
        }
        if nml.indices_per_face() != positions.indices_per_face() {
            return Err(Error::validation(format!(
                "normal indices per face ({}) must be same as position indices per face ({})",
                nml.indices_per_face(),
                positions.indices_per_face()
            )));
        }
        if nml.indices().len() != positions.indices().len() {
            return Err(Error::validation(format!(
                "normal index count ({}) must be same as position index count ({})",
                nml.indices().len(),
                positions.indices().len()
            )));
        }
    }

    let tex_values: Box<dyn Iterator<Item = TexCoord<T>> + '_> = match tex_coords {
        Some(channel) => Box::new(channel.values()),
        None => Box::new(std::iter::empty()),
    };
    let normal_values: Box<dyn Iterator<Item = Normal<T>> + '_> = match normals {
        Some(channel) => Box::new(channel.values()),
        None => Box::new(std::iter::empty()),
    };

    let indices_per_face = positions.indices_per_face() as usize;
    let position_indices = positions.indices();
    let tex_indices = tex_coords.map(|channel| channel.indices());
    let normal_indices = normals.map(|channel| channel.indices());
    let faces = (0..positions.face_count()).map(move |face| {
        let corners: Vec<IndexGroup> = (0..indices_per_face)
            .map(|corner| {
                let k = face * indices_per_face + corner;
                IndexGroup {
                    position: position_indices[k].into(),
                    tex_coord: tex_indices.map(|indices| indices[k].into()),
                    normal: normal_indices.map(|indices| indices[k].into()),
                }
            })
            .collect();
        // Channel validation guarantees at least three corners per face.
        match corners.len() {
            3 => Face::Triangle([corners[0], corners[1], corners[2]]),
            4 => Face::Quad([corners[0], corners[1], corners[2], corners[3]]),
            _ => Face::Polygon(corners),
        }
    });

    write_full(dst, positions.values(), tex_values, normal_values, faces, options)
}

fn push_value_line<T: Display>(
    out: &mut String,
    keyword: &str,
    components: impl Iterator<Item = T>,
    newline: &str,
) {
    out.push_str(keyword);
    for component in components {
        out.push(' ');
        out.push_str(&component.to_string());
    }
    out.push_str(newline);
}

fn push_face_line(out: &mut String, face: &Face, newline: &str) -> Result<()> {
    let corners = face.corners();
    if corners.len() < 3 {
        return Err(Error::validation("face must have at least three indices"));
    }
    out.push('f');
    for corner in corners {
        out.push(' ');
        push_index_group(out, corner);
    }
    out.push_str(newline);
    Ok(())
}

fn push_index_group(out: &mut String, group: &IndexGroup) {
    push_one_based(out, group.position.0);
    match (group.tex_coord, group.normal) {
        (Some(tex), Some(normal)) => {
            out.push('/');
            push_one_based(out, tex.0);
            out.push('/');
            push_one_based(out, normal.0);
        }
        (Some(tex), None) => {
            out.push('/');
            push_one_based(out, tex.0);
        }
        (None, Some(normal)) => {
            out.push_str("//");
            push_one_based(out, normal.0);
        }
        (None, None) => {}
    }
}

/// OBJ uses one-based indexing on the wire
fn push_one_based(out: &mut String, index: u32) {
    out.push_str(&(u64::from(index) + 1).to_string());
}
