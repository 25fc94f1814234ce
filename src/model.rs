//! Data structures for the OBJ mesh data model
//!
//! These are the typed values exchanged between the streaming engine and the
//! caller: per-vertex attributes ([`Position`], [`TexCoord`], [`Normal`]),
//! face corners ([`Index`], [`IndexGroup`], [`Face`]) and the counter records
//! returned from a read or write call.
//!
//! The library never owns a mesh. Attribute values are handed to caller
//! callbacks during reading and pulled from caller iterators during writing;
//! the caller decides how (and whether) to store them.

use num_traits::Float;
use std::fmt::Display;

use crate::error::{Error, Result};

/// A vertex position with 3 or 4 components
///
/// The fourth component is optional and absent by default; whether it was
/// present in the source round-trips through read and write.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// Optional fourth (weight) component
    pub w: Option<T>,
}

impl<T> Position<T> {
    /// Create a position with 3 components
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z, w: None }
    }

    /// Create a position with 4 components
    pub fn with_w(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w: Some(w) }
    }
}

impl<T: Copy> Position<T> {
    /// Iterate the components in declaration order
    pub fn components(&self) -> impl Iterator<Item = T> + use<T> {
        [self.x, self.y, self.z].into_iter().chain(self.w)
    }
}

/// A texture coordinate with 2 or 3 components
///
/// Every component must lie in `[0, 1]` inclusive. Out-of-range components
/// are a hard validation error on both the read and the write path, never a
/// clamp.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TexCoord<T> {
    /// U component
    pub u: T,
    /// V component
    pub v: T,
    /// Optional third component
    pub w: Option<T>,
}

impl<T> TexCoord<T> {
    /// Create a texture coordinate with 2 components
    pub fn new(u: T, v: T) -> Self {
        Self { u, v, w: None }
    }

    /// Create a texture coordinate with 3 components
    pub fn with_w(u: T, v: T, w: T) -> Self {
        Self { u, v, w: Some(w) }
    }
}

impl<T: Copy> TexCoord<T> {
    /// Iterate the components in declaration order
    pub fn components(&self) -> impl Iterator<Item = T> + use<T> {
        [self.u, self.v].into_iter().chain(self.w)
    }
}

impl<T: Float + Display> TexCoord<T> {
    /// Check that every component is in `[0, 1]` inclusive
    pub(crate) fn validate(&self) -> Result<()> {
        for component in self.components() {
            if !(T::zero() <= component && component <= T::one()) {
                return Err(Error::validation(format!(
                    "texture coordinate element must be in [0..1], was: {component}"
                )));
            }
        }
        Ok(())
    }
}

/// A vertex normal, always 3 components
///
/// The direction is passed through unchanged; no re-normalization is
/// performed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Normal<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl<T> Normal<T> {
    /// Create a normal
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Normal<T> {
    /// Iterate the components in declaration order
    pub fn components(&self) -> impl Iterator<Item = T> + use<T> {
        [self.x, self.y, self.z].into_iter()
    }
}

/// A zero-based reference into one attribute's value list
///
/// Produced by resolving OBJ's one-based (or negative relative) index
/// tokens; the raw token value never escapes the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(pub u32);

impl From<u32> for Index {
    fn from(value: u32) -> Self {
        Index(value)
    }
}

/// One face corner: a position index plus optional texture coordinate and
/// normal indices
///
/// Presence of the optional members round-trips: a corner that never carried
/// a texture coordinate index is observably different from one that carries
/// index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexGroup {
    /// Mandatory position index
    pub position: Index,
    /// Optional texture coordinate index
    pub tex_coord: Option<Index>,
    /// Optional normal index
    pub normal: Option<Index>,
}

impl IndexGroup {
    /// Create a corner referencing only a position
    pub fn new(position: Index) -> Self {
        Self {
            position,
            tex_coord: None,
            normal: None,
        }
    }
}

/// A polygon, distinguished by corner count
///
/// Three corners make a [`Face::Triangle`], four a [`Face::Quad`], anything
/// larger a heap-sized [`Face::Polygon`]. A bare-index corner (`f 1 2 3`) is
/// an [`IndexGroup`] whose optional members are `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Face {
    /// A face with exactly 3 corners
    Triangle([IndexGroup; 3]),
    /// A face with exactly 4 corners
    Quad([IndexGroup; 4]),
    /// A face with 5 or more corners
    Polygon(Vec<IndexGroup>),
}

impl Face {
    /// Build a face from its corners, selecting the variant by corner count
    ///
    /// Fails with a validation error when fewer than three corners are
    /// given.
    pub fn from_corners(corners: Vec<IndexGroup>) -> Result<Self> {
        match corners.len() {
            0..=2 => Err(Error::validation("face must have at least three indices")),
            3 => Ok(Face::Triangle([corners[0], corners[1], corners[2]])),
            4 => Ok(Face::Quad([corners[0], corners[1], corners[2], corners[3]])),
            _ => Ok(Face::Polygon(corners)),
        }
    }

    /// The corners of this face in declaration order
    pub fn corners(&self) -> &[IndexGroup] {
        match self {
            Face::Triangle(corners) => corners,
            Face::Quad(corners) => corners,
            Face::Polygon(corners) => corners,
        }
    }

    /// Number of corners
    pub fn corner_count(&self) -> usize {
        self.corners().len()
    }
}

/// Counters accumulated while reading
///
/// One counter per primitive kind, each incremented exactly once per source
/// primitive in file order. The reader does not retain the mesh, so these
/// are the caller's only engine-side record of what was dispatched; compare
/// them against your own containers with [`ReadResult::reconcile`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReadResult {
    /// Number of `v` lines dispatched
    pub position_count: usize,
    /// Number of `vt` lines dispatched (counted even without a callback)
    pub tex_coord_count: usize,
    /// Number of `vn` lines dispatched (counted even without a callback)
    pub normal_count: usize,
    /// Number of `f` lines dispatched
    pub face_count: usize,
}

impl ReadResult {
    /// Compare against counters derived from the caller's own containers
    pub fn reconcile(&self, expected: ReadResult) -> Result<()> {
        if *self == expected {
            Ok(())
        } else {
            Err(Error::Reconciliation(format!(
                "read counters {self:?} do not match accumulated counters {expected:?}"
            )))
        }
    }
}

/// Counters accumulated while writing, mirroring [`ReadResult`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteResult {
    /// Number of `v` lines emitted
    pub position_count: usize,
    /// Number of `vt` lines emitted
    pub tex_coord_count: usize,
    /// Number of `vn` lines emitted
    pub normal_count: usize,
    /// Number of `f` lines emitted
    pub face_count: usize,
}

impl WriteResult {
    /// Compare against counters derived from the caller's own containers
    pub fn reconcile(&self, expected: WriteResult) -> Result<()> {
        if *self == expected {
            Ok(())
        } else {
            Err(Error::Reconciliation(format!(
                "write counters {self:?} do not match source counters {expected:?}"
            )))
        }
    }
}
