//! `ndvec-core` — dynamically resizable N-dimensional arrays.
//!
//! Provides [`NdVec<T, D>`](NdVec): a `D`-dimensional array whose elements
//! live in one contiguous, row-major `Vec<T>`, together with the
//! [`Extents`] descriptor that maps multi-axis indices to flat offsets.
//!
//! # Design
//!
//! - Dimensionality is a const generic; every shape argument is a
//!   `[usize; D]`, so the axis count is checked by the compiler.
//! - The buffer length always equals the product of the extents, and an
//!   empty array always has all-zero extents.
//! - `resize` works on the linear buffer, `reshape` only relabels it, and
//!   the `reshape_from*` family imports another buffer of any
//!   dimensionality under a new shape.
//! - Checked operations return [`CoreError`]; unchecked ones are the `[]`
//!   operators and the `*_unchecked` / [`Extents::flat_index`] helpers.
//!
//! ```
//! use ndvec_core::prelude::*;
//!
//! let mut grid = NdVec::<i32, 2>::with_extents([2, 3]);
//! grid[[1, 2]] = 5;
//! grid.new_row();
//! assert_eq!(grid.extents(), &[3, 3]);
//! assert_eq!(grid[[1, 2]], 5);
//! ```

pub mod error;
pub mod extents;
pub mod ndvec;

// Re-export key types at crate root for convenience.
pub use error::{CoreError, ErrorKind, Result};
pub use extents::{Extents, Indices};
pub use ndvec::{IndexedIter, NdVec};

/// Items intended for glob-import: `use ndvec_core::prelude::*;`
pub mod prelude {
    pub use crate::error::{CoreError, ErrorKind, Result};
    pub use crate::extents::Extents;
    pub use crate::ndvec::NdVec;
}
