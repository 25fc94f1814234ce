//! Validated attribute channels
//!
//! A channel pairs one attribute's flat element buffer with its face index
//! buffer, plus the two arity parameters `elements_per_value` and
//! `indices_per_face`. The caller owns both buffers; a channel is an
//! immutable view that is validated once at construction and then only read.
//!
//! Channels feed [`write_channels`](crate::write_channels), which emits a
//! face section from per-attribute index buffers. Validation failures carry
//! the exact messages documented on the constructors; these messages are
//! part of the external contract.

use num_traits::Float;
use std::fmt::Display;

use crate::error::{Error, Result};
use crate::model::{Normal, Position, TexCoord};

/// Validated view over position elements and their face indices
#[derive(Debug, Clone, Copy)]
pub struct PositionChannel<'a, T> {
    elements: &'a [T],
    elements_per_value: u32,
    indices: &'a [u32],
    indices_per_face: u32,
}

/// Validated view over texture coordinate elements and their face indices
#[derive(Debug, Clone, Copy)]
pub struct TexCoordChannel<'a, T> {
    elements: &'a [T],
    elements_per_value: u32,
    indices: &'a [u32],
    indices_per_face: u32,
}

/// Validated view over normal elements and their face indices
#[derive(Debug, Clone, Copy)]
pub struct NormalChannel<'a, T> {
    elements: &'a [T],
    elements_per_value: u32,
    indices: &'a [u32],
    indices_per_face: u32,
}

/// Create a validated position channel
///
/// `elements_per_value` must be 3 or 4. Fails with a validation error
/// carrying one of the documented contract messages, e.g.
/// `element count (2) must be a multiple of elements per object (3)` or
/// `position components per value (2) must be 3 or 4`.
pub fn make_position_channel<'a, T>(
    elements: &'a [T],
    elements_per_value: u32,
    indices: &'a [u32],
    indices_per_face: u32,
) -> Result<PositionChannel<'a, T>> {
    validate_elements(elements.len(), elements_per_value)?;
    if !(elements_per_value == 3 || elements_per_value == 4) {
        return Err(Error::validation(format!(
            "position components per value ({elements_per_value}) must be 3 or 4"
        )));
    }
    validate_indices(indices, indices_per_face, elements.len() / elements_per_value as usize)?;
    Ok(PositionChannel {
        elements,
        elements_per_value,
        indices,
        indices_per_face,
    })
}

/// Create a validated texture coordinate channel
///
/// `elements_per_value` must be 2 or 3 and every element must lie in
/// `[0, 1]`; a violating element fails with
/// `tex coord elements must be in range [0, 1], found {value}`.
pub fn make_tex_coord_channel<'a, T>(
    elements: &'a [T],
    elements_per_value: u32,
    indices: &'a [u32],
    indices_per_face: u32,
) -> Result<TexCoordChannel<'a, T>>
where
    T: Float + Display,
{
    validate_elements(elements.len(), elements_per_value)?;
    if !(elements_per_value == 2 || elements_per_value == 3) {
        return Err(Error::validation(format!(
            "tex coord components per value ({elements_per_value}) must be 2 or 3"
        )));
    }
    for &element in elements {
        if !(T::zero() <= element && element <= T::one()) {
            return Err(Error::validation(format!(
                "tex coord elements must be in range [0, 1], found {element}"
            )));
        }
    }
    validate_indices(indices, indices_per_face, elements.len() / elements_per_value as usize)?;
    Ok(TexCoordChannel {
        elements,
        elements_per_value,
        indices,
        indices_per_face,
    })
}

/// Create a validated normal channel
///
/// `elements_per_value` must be exactly 3.
pub fn make_normal_channel<'a, T>(
    elements: &'a [T],
    elements_per_value: u32,
    indices: &'a [u32],
    indices_per_face: u32,
) -> Result<NormalChannel<'a, T>> {
    validate_elements(elements.len(), elements_per_value)?;
    if elements_per_value != 3 {
        return Err(Error::validation(format!(
            "normal components per value ({elements_per_value}) must be 3"
        )));
    }
    validate_indices(indices, indices_per_face, elements.len() / elements_per_value as usize)?;
    Ok(NormalChannel {
        elements,
        elements_per_value,
        indices,
        indices_per_face,
    })
}

/// Element buffer checks shared by all channel kinds
///
/// An empty buffer fails the multiple-of check with a count of 0; a channel
/// with no data is expressed by not constructing the channel at all.
fn validate_elements(element_count: usize, elements_per_value: u32) -> Result<()> {
    if elements_per_value == 0 {
        return Err(Error::validation("elements per object cannot be zero"));
    }
    if element_count == 0 || element_count % elements_per_value as usize != 0 {
        return Err(Error::validation(format!(
            "element count ({element_count}) must be a multiple of elements per object ({elements_per_value})"
        )));
    }
    Ok(())
}

/// Index buffer checks shared by all channel kinds
fn validate_indices(indices: &[u32], indices_per_face: u32, value_count: usize) -> Result<()> {
    if indices_per_face < 3 {
        return Err(Error::validation(format!(
            "indices per face ({indices_per_face}) cannot be less than 3"
        )));
    }
    let index_count = indices.len();
    if index_count == 0 || index_count % indices_per_face as usize != 0 {
        return Err(Error::validation(format!(
            "element count ({index_count}) must be a multiple of elements per object ({indices_per_face})"
        )));
    }

    let min_index = indices.iter().copied().min().unwrap_or(0);
    let max_index = indices.iter().copied().max().unwrap_or(0);
    if min_index != 0 {
        return Err(Error::validation(format!(
            "min index ({min_index}) must be zero"
        )));
    }
    if max_index as usize >= value_count {
        return Err(Error::validation(format!(
            "max index ({max_index}) must be less than value count ({value_count})"
        )));
    }
    Ok(())
}

macro_rules! channel_accessors {
    ($channel:ident) => {
        impl<'a, T> $channel<'a, T> {
            /// The validated element buffer
            pub fn elements(&self) -> &'a [T] {
                self.elements
            }

            /// Components per attribute value
            pub fn elements_per_value(&self) -> u32 {
                self.elements_per_value
            }

            /// The validated index buffer
            pub fn indices(&self) -> &'a [u32] {
                self.indices
            }

            /// Corners per face
            pub fn indices_per_face(&self) -> u32 {
                self.indices_per_face
            }

            /// Number of attribute values in the element buffer
            pub fn value_count(&self) -> usize {
                self.elements.len() / self.elements_per_value as usize
            }

            /// Number of faces in the index buffer
            pub fn face_count(&self) -> usize {
                self.indices.len() / self.indices_per_face as usize
            }
        }
    };
}

channel_accessors!(PositionChannel);
channel_accessors!(TexCoordChannel);
channel_accessors!(NormalChannel);

impl<'a, T: Copy> PositionChannel<'a, T> {
    /// Iterate the element buffer as typed position values
    pub fn values(&self) -> impl Iterator<Item = Position<T>> + 'a {
        let elements_per_value = self.elements_per_value as usize;
        self.elements.chunks_exact(elements_per_value).map(move |chunk| {
            let w = (elements_per_value == 4).then(|| chunk[3]);
            Position {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                w,
            }
        })
    }
}

impl<'a, T: Copy> TexCoordChannel<'a, T> {
    /// Iterate the element buffer as typed texture coordinate values
    pub fn values(&self) -> impl Iterator<Item = TexCoord<T>> + 'a {
        let elements_per_value = self.elements_per_value as usize;
        self.elements.chunks_exact(elements_per_value).map(move |chunk| {
            let w = (elements_per_value == 3).then(|| chunk[2]);
            TexCoord {
                u: chunk[0],
                v: chunk[1],
                w,
            }
        })
    }
}

impl<'a, T: Copy> NormalChannel<'a, T> {
    /// Iterate the element buffer as typed normal values
    pub fn values(&self) -> impl Iterator<Item = Normal<T>> + 'a {
        self.elements
            .chunks_exact(3)
            .map(|chunk| Normal::new(chunk[0], chunk[1], chunk[2]))
    }
}
