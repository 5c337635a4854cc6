use thiserror::Error;

/// All errors returned by `ndvec-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A flat (linear) offset is past the end of the buffer.
    #[error("flat index {index} out of bounds for length {len}")]
    FlatIndexOutOfBounds { index: usize, len: usize },

    /// An axis number is not below the array's dimensionality.
    #[error("axis {axis} out of bounds for array with {ndim} dimensions")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// A multi-axis index has a component outside its axis extent.
    ///
    /// `axis` is the first axis that failed validation.
    #[error("index {index:?} out of bounds for extents {extents:?} (axis {axis})")]
    IndexOutOfBounds {
        axis: usize,
        index: Vec<usize>,
        extents: Vec<usize>,
    },

    /// The requested extents do not hold exactly as many elements as the source.
    #[error("{op}(): extents {extents:?} do not hold exactly {len} elements")]
    SizeMismatch {
        op: &'static str,
        extents: Vec<usize>,
        len: usize,
    },
}

/// Coarse classification of a [`CoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An index or axis was outside its valid range.
    OutOfRange,
    /// A shape argument was inconsistent with the element count.
    InvalidArgument,
}

impl CoreError {
    /// The kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FlatIndexOutOfBounds { .. }
            | Self::AxisOutOfBounds { .. }
            | Self::IndexOutOfBounds { .. } => ErrorKind::OutOfRange,
            Self::SizeMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::OutOfRange`.
    #[inline]
    pub fn is_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::OutOfRange
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Convenience alias used throughout `ndvec-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
