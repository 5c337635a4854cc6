//! Growing and shrinking: resize, new_row, clear, and capacity control.
//!
//! Resizing works purely on the linear buffer. Elements at offsets below
//! `min(old_len, new_len)` stay where they are; anything past the new length
//! is dropped and any new tail is freshly constructed. Because the layout is
//! row-major, this preserves multi-axis positions only when the inner axes
//! are unchanged.

use tracing::trace;

use crate::extents::Extents;

use super::NdVec;

impl<T, const D: usize> NdVec<T, D> {
    /// Resize to `dims`, default-constructing any new elements.
    ///
    /// A zero on any axis clears the array to canonical empty form.
    ///
    /// # Panics
    ///
    /// Panics if the product of `dims` overflows `usize` or the allocation
    /// fails.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let mut a = NdVec::from_flat(vec![1, 2, 3, 4], [2, 2]).unwrap();
    /// a.resize([2, 3]);
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 4, 0, 0]);
    /// a.resize([3, 0]);
    /// assert_eq!(a.extents(), &[0, 0]);
    /// ```
    pub fn resize(&mut self, dims: [usize; D])
    where
        T: Default,
    {
        self.resize_with(dims, T::default);
    }

    /// Resize to `dims`, filling any new elements with clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if the product of `dims` overflows `usize` or the allocation
    /// fails.
    pub fn resize_filled(&mut self, dims: [usize; D], value: T)
    where
        T: Clone,
    {
        let target = Extents::new(dims);
        self.data.resize(target.numel(), value);
        self.commit_resize(target);
    }

    /// Resize to `dims`, producing any new elements by calling `f` once per
    /// element in linear order.
    ///
    /// # Panics
    ///
    /// Panics if the product of `dims` overflows `usize` or the allocation
    /// fails.
    pub fn resize_with<F>(&mut self, dims: [usize; D], f: F)
    where
        F: FnMut() -> T,
    {
        let target = Extents::new(dims);
        self.data.resize_with(target.numel(), f);
        self.commit_resize(target);
    }

    fn commit_resize(&mut self, target: Extents<D>) {
        let from = self.extents;
        self.extents = if self.data.is_empty() {
            Extents::empty()
        } else {
            target
        };
        trace!(
            from = ?from.dims(),
            to = ?self.extents.dims(),
            len = self.data.len(),
            "resize"
        );
    }

    /// Append one hyper-row along axis 0 with default-constructed elements.
    ///
    /// Equivalent to `resize([d0 + 1, d1, ...])`. Existing elements keep
    /// both their linear offsets and their multi-axis indices. If axis 0 is
    /// currently zero (which includes the empty array) this does nothing,
    /// since there is no row length to extend from.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let mut a = NdVec::from_flat(vec![1, 2, 3], [1, 3]).unwrap();
    /// a.new_row();
    /// assert_eq!(a.extents(), &[2, 3]);
    /// assert_eq!(a.as_slice(), &[1, 2, 3, 0, 0, 0]);
    ///
    /// let mut empty = NdVec::<i32, 2>::new();
    /// empty.new_row();
    /// assert!(empty.is_empty());
    /// ```
    pub fn new_row(&mut self)
    where
        T: Default,
    {
        self.new_row_with(T::default);
    }

    /// Append one hyper-row along axis 0 filled with clones of `value`.
    ///
    /// A no-op when axis 0 is zero, as with [`new_row`](Self::new_row).
    pub fn new_row_filled(&mut self, value: T)
    where
        T: Clone,
    {
        if let Some(len) = self.grown_row_len() {
            self.data.resize(len, value);
            self.commit_new_row();
        }
    }

    /// Append one hyper-row along axis 0, producing its elements with `f`.
    ///
    /// A no-op when axis 0 is zero, as with [`new_row`](Self::new_row).
    pub fn new_row_with<F>(&mut self, f: F)
    where
        F: FnMut() -> T,
    {
        if let Some(len) = self.grown_row_len() {
            self.data.resize_with(len, f);
            self.commit_new_row();
        }
    }

    /// Buffer length after adding one row, or `None` if there are no rows.
    fn grown_row_len(&self) -> Option<usize> {
        let rows = self.extents.get_unchecked(0);
        if rows == 0 {
            trace!("new_row on zero rows ignored");
            return None;
        }
        let row_len = self.data.len() / rows;
        Some(self.data.len() + row_len)
    }

    fn commit_new_row(&mut self) {
        let mut dims = *self.extents.dims();
        dims[0] += 1;
        self.extents = Extents::new(dims);
        trace!(to = ?dims, len = self.data.len(), "new_row");
    }

    /// Drop every element and reset all extents to zero.
    pub fn clear(&mut self) {
        self.data.clear();
        self.extents = Extents::empty();
        trace!("clear");
    }

    /// Reserve room for at least `additional` more elements beyond the
    /// current length. Shape and contents are unchanged.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Number of elements the buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Release unused buffer capacity. Shape and contents are unchanged.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }
}
