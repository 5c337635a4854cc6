//! Dynamically resizable N-dimensional array over a single contiguous buffer.
//!
//! [`NdVec`] pairs a `Vec<T>` with fixed-length [`Extents`]. Every
//! operation keeps two invariants between calls:
//!
//! - the buffer length equals the product of the extents;
//! - a zero-length buffer is always paired with all-zero extents (the
//!   canonical empty form), never a mix of zero and non-zero axes.
//!
//! Elements are laid out in row-major order, so growing or shrinking the
//! outermost axis never relocates the elements that survive.

mod access;
mod iter;
mod reshape;
mod resize;

use crate::error::Result;
use crate::extents::Extents;

pub use iter::IndexedIter;

/// A `D`-dimensional array of `T` stored contiguously in row-major order.
///
/// The array exclusively owns its buffer. Cloning performs a deep copy;
/// [`take`](Self::take) moves the contents out and leaves the source in
/// canonical empty form.
///
/// Equality compares the extents and then the elements in storage order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NdVec<T, const D: usize> {
    data: Vec<T>,
    extents: Extents<D>,
}

impl<T, const D: usize> NdVec<T, D> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create an empty array. All extents are zero.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::<i32, 2>::new();
    /// assert!(a.is_empty());
    /// assert_eq!(a.extents(), &[0, 0]);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        const { assert!(D > 0, "NdVec requires at least one dimension") };
        Self {
            data: Vec::new(),
            extents: Extents::empty(),
        }
    }

    /// Create an empty array with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut out = Self::new();
        out.data.reserve(capacity);
        out
    }

    /// Create an array with the given extents, default-constructing every
    /// element. A zero on any axis yields the canonical empty array.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::<u8, 3>::with_extents([2, 3, 4]);
    /// assert_eq!(a.len(), 24);
    /// assert!(a.iter().all(|&x| x == 0));
    /// ```
    pub fn with_extents(dims: [usize; D]) -> Self
    where
        T: Default,
    {
        let mut out = Self::new();
        out.resize(dims);
        out
    }

    /// Create an array with the given extents where every element is a clone
    /// of `value`.
    pub fn filled(dims: [usize; D], value: T) -> Self
    where
        T: Clone,
    {
        let mut out = Self::new();
        out.resize_filled(dims, value);
        out
    }

    /// Create an array from a flat row-major buffer and its extents.
    ///
    /// Fails with [`CoreError::SizeMismatch`](crate::CoreError::SizeMismatch)
    /// if the product of `dims` does not equal `data.len()`.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::from_flat(vec![1, 2, 3, 4, 5, 6], [2, 3]).unwrap();
    /// assert_eq!(a[[1, 0]], 4);
    /// assert!(NdVec::from_flat(vec![1, 2, 3], [2, 2]).is_err());
    /// ```
    pub fn from_flat(mut data: Vec<T>, dims: [usize; D]) -> Result<Self> {
        let mut out = Self::new();
        out.reshape_take_from_vec(&mut data, dims)?;
        Ok(out)
    }

    /// Create an array from a flat slice and its extents (copies the data).
    pub fn from_slice(data: &[T], dims: [usize; D]) -> Result<Self>
    where
        T: Clone,
    {
        let mut out = Self::new();
        out.reshape_from_slice(data, dims)?;
        Ok(out)
    }

    // ------------------------------------------------------------------
    // Shape queries
    // ------------------------------------------------------------------

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements (and so has all-zero extents).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of axes, always `D`.
    #[inline]
    pub const fn ndim(&self) -> usize {
        D
    }

    /// The size of every axis.
    #[inline]
    pub fn extents(&self) -> &[usize; D] {
        self.extents.dims()
    }

    /// The extents as a descriptor, for index arithmetic without a borrow of
    /// the buffer.
    #[inline]
    pub fn shape(&self) -> Extents<D> {
        self.extents
    }

    /// Size of axis `P`, checked at compile time.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::<i32, 2>::with_extents([3, 5]);
    /// assert_eq!(a.dim::<0>(), 3);
    /// assert_eq!(a.dim::<1>(), 5);
    /// ```
    #[inline]
    pub fn dim<const P: usize>(&self) -> usize {
        const { assert!(P < D, "axis out of range") };
        self.extents.get_unchecked(P)
    }

    /// Size of `axis`, failing with
    /// [`CoreError::AxisOutOfBounds`](crate::CoreError::AxisOutOfBounds) if
    /// `axis >= D`.
    #[inline]
    pub fn extent(&self, axis: usize) -> Result<usize> {
        self.extents.get(axis)
    }

    /// Size of `axis` without the axis check.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= D`.
    #[inline]
    pub fn extent_unchecked(&self, axis: usize) -> usize {
        self.extents.get_unchecked(axis)
    }

    /// Row-major strides of the current shape, in elements.
    #[inline]
    pub fn strides(&self) -> [usize; D] {
        self.extents.strides()
    }

    /// Linear offset of `index` with no bounds checking.
    #[inline]
    pub fn flat_index(&self, index: [usize; D]) -> usize {
        self.extents.flat_index(index)
    }

    /// Linear offset of `index`, failing with
    /// [`CoreError::IndexOutOfBounds`](crate::CoreError::IndexOutOfBounds) if
    /// any component is outside its axis.
    #[inline]
    pub fn flat_index_checked(&self, index: [usize; D]) -> Result<usize> {
        self.extents.flat_index_checked(index)
    }

    // ------------------------------------------------------------------
    // Flat views and conversions
    // ------------------------------------------------------------------

    /// All elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All elements in row-major order, mutably. The shape cannot change
    /// through this view.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy the flat buffer out.
    pub fn to_flat(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consume the array and return its flat buffer.
    #[inline]
    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    /// Move the flat buffer out, leaving this array canonical-empty.
    pub fn take_flat(&mut self) -> Vec<T> {
        self.extents = Extents::empty();
        std::mem::take(&mut self.data)
    }

    // ------------------------------------------------------------------
    // Ownership transfer
    // ------------------------------------------------------------------

    /// Move the whole array out, leaving this one canonical-empty.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let mut a = NdVec::<i32, 2>::with_extents([3, 5]);
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.extents(), &[3, 5]);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Exchange buffers and extents with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
        std::mem::swap(&mut self.extents, &mut other.extents);
    }

    /// Replace buffer and extents together. Callers uphold both invariants.
    fn set_parts(&mut self, data: Vec<T>, extents: Extents<D>) {
        debug_assert_eq!(extents.checked_numel(), Some(data.len()));
        debug_assert!(!data.is_empty() || extents.is_canonical_empty());
        self.data = data;
        self.extents = extents;
    }
}

impl<T, const D: usize> Default for NdVec<T, D> {
    fn default() -> Self {
        Self::new()
    }
}
