//! Iterator-based record streaming
//!
//! [`Records`] is the pull-style face of the tokenizer: it yields one typed
//! [`Record`] per primitive line, in file order, without accumulating
//! anything. The callback-based [`read`](crate::read) entry points are built
//! on top of it; callers that prefer driving the loop themselves can consume
//! it directly.
//!
//! # Example
//!
//! ```
//! use libobj::{Record, Records};
//! use std::io::Cursor;
//!
//! # fn main() -> libobj::Result<()> {
//! let input = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
//! let mut face_count = 0;
//! for record in Records::<_, f32>::new(Cursor::new(input)) {
//!     if let Record::Face(face) = record? {
//!         face_count += 1;
//!         assert_eq!(face.corner_count(), 3);
//!     }
//! }
//! assert_eq!(face_count, 1);
//! # Ok(())
//! # }
//! ```

use num_traits::Float;
use std::fmt::Display;
use std::io::BufRead;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::Result;
use crate::model::{Face, Normal, Position, TexCoord};
use crate::parser::{self, DeclaredCounts};

/// One primitive parsed from a single input line
#[derive(Debug, Clone, PartialEq)]
pub enum Record<T> {
    /// A `v` line
    Position(Position<T>),
    /// A `vt` line
    TexCoord(TexCoord<T>),
    /// A `vn` line
    Normal(Normal<T>),
    /// An `f` line with indices already resolved to zero-based form
    Face(Face),
}

/// Streaming iterator over the primitives of an OBJ document
///
/// Lines are consumed one at a time from the underlying reader; comment,
/// blank and unrecognized lines are skipped. Relative face indices are
/// resolved against the number of values declared before the face line,
/// tracked independently per attribute kind. The iterator fuses after the
/// first error or end of input.
pub struct Records<R, T> {
    input: R,
    line: String,
    line_number: usize,
    declared: DeclaredCounts,
    done: bool,
    _value_type: PhantomData<T>,
}

impl<R, T> Records<R, T>
where
    R: BufRead,
    T: Float + FromStr + Display,
{
    /// Create a record iterator over the given reader
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            line_number: 0,
            declared: DeclaredCounts::default(),
            done: false,
            _value_type: PhantomData,
        }
    }

    /// The 1-based number of the most recently consumed line
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn next_record(&mut self) -> Result<Option<Record<T>>> {
        loop {
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let Some(record) = parser::parse_line(&self.line, self.line_number, &self.declared)?
            else {
                continue;
            };
            match &record {
                Record::Position(_) => self.declared.positions += 1,
                Record::TexCoord(_) => self.declared.tex_coords += 1,
                Record::Normal(_) => self.declared.normals += 1,
                Record::Face(_) => {}
            }
            return Ok(Some(record));
        }
    }
}

impl<R, T> Iterator for Records<R, T>
where
    R: BufRead,
    T: Float + FromStr + Display,
{
    type Item = Result<Record<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}
