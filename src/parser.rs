//! Line parsing and the streaming reader
//!
//! The tokenizer is single-pass and line-oriented: each input line is
//! trimmed, classified by its leading keyword (`v`, `vt`, `vn`, `f`) and
//! parsed into one typed record. Comment and blank lines are skipped;
//! unrecognized keywords are ignored for forward compatibility. Malformed
//! lines abort the read with an error carrying the 1-based line number.
//!
//! The reader drives the tokenizer and dispatches each record to a caller
//! callback, exactly once per source primitive and strictly in file order.
//! It keeps nothing but counters; the caller's callbacks own all storage.

use num_traits::Float;
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{Face, Index, IndexGroup, Normal, Position, ReadResult, TexCoord};
use crate::streaming::{Record, Records};

/// Running totals of attribute values declared so far
///
/// Negative (relative) face indices resolve against the length the
/// referenced list has at the point of use, tracked independently per
/// attribute kind.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct DeclaredCounts {
    pub(crate) positions: usize,
    pub(crate) tex_coords: usize,
    pub(crate) normals: usize,
}

/// Read OBJ text, dispatching positions and faces
///
/// `vt` and `vn` lines are still tokenized, validated and counted, but no
/// texture coordinate or normal value is materialized for the caller.
///
/// Callbacks fire in file order, exactly once per source primitive, so a
/// caller may index into a growing array using its own running counter.
/// Returns the accumulated [`ReadResult`] counters for the caller to
/// reconcile against its own structure.
///
/// # Example
///
/// ```
/// use libobj::{read, Face, Position};
/// use std::io::Cursor;
///
/// # fn main() -> libobj::Result<()> {
/// let input = "v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\nf 3 2 1\n";
/// let mut positions = Vec::new();
/// let mut faces = Vec::new();
/// let result = read(
///     Cursor::new(input),
///     |position: Position<f32>| positions.push(position),
///     |face: Face| faces.push(face),
/// )?;
/// assert_eq!(result.position_count, 3);
/// assert_eq!(result.face_count, 2);
/// # Ok(())
/// # }
/// ```
pub fn read<R, T, P, F>(input: R, add_position: P, add_face: F) -> Result<ReadResult>
where
    R: BufRead,
    T: Float + FromStr + Display,
    P: FnMut(Position<T>),
    F: FnMut(Face),
{
    read_impl(
        input,
        add_position,
        add_face,
        None::<fn(TexCoord<T>)>,
        None::<fn(Normal<T>)>,
    )
}

/// Read OBJ text, dispatching positions, faces and texture coordinates
pub fn read_with_tex_coords<R, T, P, F, TC>(
    input: R,
    add_position: P,
    add_face: F,
    add_tex_coord: TC,
) -> Result<ReadResult>
where
    R: BufRead,
    T: Float + FromStr + Display,
    P: FnMut(Position<T>),
    F: FnMut(Face),
    TC: FnMut(TexCoord<T>),
{
    read_impl(
        input,
        add_position,
        add_face,
        Some(add_tex_coord),
        None::<fn(Normal<T>)>,
    )
}

/// Read OBJ text, dispatching positions, faces and normals
pub fn read_with_normals<R, T, P, F, N>(
    input: R,
    add_position: P,
    add_face: F,
    add_normal: N,
) -> Result<ReadResult>
where
    R: BufRead,
    T: Float + FromStr + Display,
    P: FnMut(Position<T>),
    F: FnMut(Face),
    N: FnMut(Normal<T>),
{
    read_impl(
        input,
        add_position,
        add_face,
        None::<fn(TexCoord<T>)>,
        Some(add_normal),
    )
}

/// Read OBJ text, dispatching every primitive kind
pub fn read_full<R, T, P, F, TC, N>(
    input: R,
    add_position: P,
    add_face: F,
    add_tex_coord: TC,
    add_normal: N,
) -> Result<ReadResult>
where
    R: BufRead,
    T: Float + FromStr + Display,
    P: FnMut(Position<T>),
    F: FnMut(Face),
    TC: FnMut(TexCoord<T>),
    N: FnMut(Normal<T>),
{
    read_impl(
        input,
        add_position,
        add_face,
        Some(add_tex_coord),
        Some(add_normal),
    )
}

fn read_impl<R, T, P, F, TC, N>(
    input: R,
    mut add_position: P,
    mut add_face: F,
    mut add_tex_coord: Option<TC>,
    mut add_normal: Option<N>,
) -> Result<ReadResult>
where
    R: BufRead,
    T: Float + FromStr + Display,
    P: FnMut(Position<T>),
    F: FnMut(Face),
    TC: FnMut(TexCoord<T>),
    N: FnMut(Normal<T>),
{
    let mut result = ReadResult::default();
    for record in Records::new(input) {
        match record? {
            Record::Position(position) => {
                add_position(position);
                result.position_count += 1;
            }
            Record::TexCoord(tex_coord) => {
                if let Some(callback) = add_tex_coord.as_mut() {
                    callback(tex_coord);
                }
                result.tex_coord_count += 1;
            }
            Record::Normal(normal) => {
                if let Some(callback) = add_normal.as_mut() {
                    callback(normal);
                }
                result.normal_count += 1;
            }
            Record::Face(face) => {
                add_face(face);
                result.face_count += 1;
            }
        }
    }
    Ok(result)
}

/// Parse one trimmed line into a record, or `None` for lines that carry no
/// primitive (blank, comment, unrecognized keyword)
pub(crate) fn parse_line<T>(
    line: &str,
    line_number: usize,
    declared: &DeclaredCounts,
) -> Result<Option<Record<T>>>
where
    T: Float + FromStr + Display,
{
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty());
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    match keyword {
        "v" => Ok(Some(Record::Position(parse_position(tokens, line_number)?))),
        "vt" => Ok(Some(Record::TexCoord(parse_tex_coord(tokens, line_number)?))),
        "vn" => Ok(Some(Record::Normal(parse_normal(tokens, line_number)?))),
        "f" => Ok(Some(Record::Face(parse_face(tokens, line_number, declared)?))),
        other => {
            log::debug!("ignoring unrecognized keyword '{other}' at line {line_number}");
            Ok(None)
        }
    }
}

/// Parse up to `max` numeric tokens
fn parse_values<'a, T, I>(tokens: I, line_number: usize, max: usize) -> Result<Vec<T>>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let mut values = Vec::with_capacity(max);
    for token in tokens {
        if values.len() == max {
            return Err(Error::parse(
                line_number,
                format!("expected to parse at most {max} values"),
            ));
        }
        let value = token
            .parse::<T>()
            .map_err(|_| Error::parse(line_number, format!("failed parsing '{token}'")))?;
        values.push(value);
    }
    Ok(values)
}

fn parse_position<'a, T, I>(tokens: I, line_number: usize) -> Result<Position<T>>
where
    T: Float + FromStr,
    I: Iterator<Item = &'a str>,
{
    let values = parse_values(tokens, line_number, 4)?;
    match values.as_slice() {
        &[x, y, z] => Ok(Position::new(x, y, z)),
        &[x, y, z, w] => Ok(Position::with_w(x, y, z, w)),
        _ => Err(Error::parse(line_number, "positions must have 3 or 4 values")),
    }
}

fn parse_tex_coord<'a, T, I>(tokens: I, line_number: usize) -> Result<TexCoord<T>>
where
    T: Float + FromStr + Display,
    I: Iterator<Item = &'a str>,
{
    let values = parse_values(tokens, line_number, 3)?;
    let tex_coord = match values.as_slice() {
        &[u, v] => TexCoord::new(u, v),
        &[u, v, w] => TexCoord::with_w(u, v, w),
        _ => {
            return Err(Error::parse(
                line_number,
                "texture coordinates must have 2 or 3 values",
            ));
        }
    };
    tex_coord.validate()?;
    Ok(tex_coord)
}

fn parse_normal<'a, T, I>(tokens: I, line_number: usize) -> Result<Normal<T>>
where
    T: Float + FromStr,
    I: Iterator<Item = &'a str>,
{
    let values = parse_values(tokens, line_number, 3)?;
    match values.as_slice() {
        &[x, y, z] => Ok(Normal::new(x, y, z)),
        _ => Err(Error::parse(line_number, "normals must have 3 values")),
    }
}

fn parse_face<'a, I>(tokens: I, line_number: usize, declared: &DeclaredCounts) -> Result<Face>
where
    I: Iterator<Item = &'a str>,
{
    let mut corners = Vec::new();
    for token in tokens {
        corners.push(parse_index_group(token, line_number, declared)?);
    }
    Face::from_corners(corners)
        .map_err(|_| Error::parse(line_number, "face must have at least three indices"))
}

/// Parse one face corner token: `pos`, `pos/tex`, `pos//nml` or
/// `pos/tex/nml`
fn parse_index_group(
    token: &str,
    line_number: usize,
    declared: &DeclaredCounts,
) -> Result<IndexGroup> {
    let mut parts = token.split('/');

    let position_part = parts.next().unwrap_or("");
    if position_part.is_empty() {
        return Err(Error::parse(line_number, "missing position index"));
    }
    let mut group = IndexGroup::new(parse_index(position_part, line_number, declared.positions)?);

    if let Some(tex_part) = parts.next() {
        if !tex_part.is_empty() {
            group.tex_coord = Some(parse_index(tex_part, line_number, declared.tex_coords)?);
        }
    }
    if let Some(normal_part) = parts.next() {
        if !normal_part.is_empty() {
            group.normal = Some(parse_index(normal_part, line_number, declared.normals)?);
        }
    }
    if parts.next().is_some() {
        return Err(Error::parse(line_number, format!("failed parsing '{token}'")));
    }

    Ok(group)
}

/// Resolve one raw index token to a zero-based index
///
/// Positive `k` maps to `k - 1`. Negative `k` addresses the `k`-th most
/// recently declared value, so it resolves against the list length at the
/// point of use. Zero is invalid.
fn parse_index(token: &str, line_number: usize, declared_count: usize) -> Result<Index> {
    let raw = token
        .parse::<i64>()
        .map_err(|_| Error::parse(line_number, format!("failed parsing '{token}'")))?;

    if raw == 0 {
        return Err(Error::parse(line_number, "parsed index cannot be zero"));
    }
    let resolved = if raw > 0 {
        raw - 1
    } else {
        declared_count as i64 + raw
    };
    if resolved < 0 {
        return Err(Error::parse(
            line_number,
            format!("relative index ({raw}) is out of range"),
        ));
    }
    u32::try_from(resolved)
        .map(Index)
        .map_err(|_| Error::parse(line_number, format!("failed parsing '{token}'")))
}
