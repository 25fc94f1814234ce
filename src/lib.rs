//! # libobj
//!
//! A pure Rust streaming reader and writer for the Wavefront OBJ mesh text
//! format.
//!
//! The library owns no mesh representation. Reading dispatches typed values
//! (positions, texture coordinates, normals, faces) to caller callbacks in
//! file order; writing pulls values lazily from caller iterators. Callers
//! keep their own containers in whatever layout they like and reconcile the
//! returned counters against them afterwards.
//!
//! ## Features
//!
//! - Pure Rust with no unsafe code
//! - Streaming in both directions; nothing is buffered beyond one value
//! - Triangle, quad and n-gon faces with optional per-corner texture
//!   coordinate and normal indices
//! - OBJ's one-based and negative relative index conventions resolved to
//!   plain zero-based indices
//! - Validated attribute channels for writing from flat element and index
//!   buffers
//!
//! ## Example
//!
//! ```
//! use libobj::{read, write, Face, Position};
//! use std::io::Cursor;
//!
//! # fn main() -> libobj::Result<()> {
//! let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
//!
//! let mut positions = Vec::new();
//! let mut faces = Vec::new();
//! let result = read(
//!     Cursor::new(input),
//!     |position: Position<f32>| positions.push(position),
//!     |face: Face| faces.push(face),
//! )?;
//! assert_eq!(result.position_count, 3);
//! assert_eq!(result.face_count, 1);
//!
//! let mut out = Vec::new();
//! let written = write(&mut out, positions, faces)?;
//! assert_eq!(written.face_count, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod channel;
pub mod error;
pub mod model;
pub mod parser;
pub mod streaming;
pub mod writer;

pub use channel::{
    NormalChannel, PositionChannel, TexCoordChannel, make_normal_channel, make_position_channel,
    make_tex_coord_channel,
};
pub use error::{Error, Result};
pub use model::{
    Face, Index, IndexGroup, Normal, Position, ReadResult, TexCoord, WriteResult,
};
pub use parser::{read, read_full, read_with_normals, read_with_tex_coords};
pub use streaming::{Record, Records};
pub use writer::{
    WriteOptions, write, write_channels, write_full, write_with_normals, write_with_tex_coords,
};
