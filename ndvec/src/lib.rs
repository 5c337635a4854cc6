//! # ndvec
//!
//! Dynamically resizable N-dimensional arrays backed by a single row-major
//! buffer.
//!
//! One `use ndvec::prelude::*;` gives you [`NdVec`](prelude::NdVec),
//! its [`Extents`](prelude::Extents) descriptor, and the error types.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | `NdVec`, `Extents`, index arithmetic, errors |

#[cfg(feature = "core")]
pub use ndvec_core as core;

/// Glob-import convenience: `use ndvec::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use ndvec_core::prelude::*;
}
