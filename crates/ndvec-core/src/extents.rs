//! Per-axis extents and the row-major index arithmetic built on them.
//!
//! Axis 0 is the outermost (slowest-varying) axis and axis `D - 1` the
//! innermost (contiguous) one, so the stride of axis `k` is the product of
//! the extents of every axis after it.

use core::iter::FusedIterator;

use crate::error::{CoreError, Result};

/// The extents of a `D`-dimensional array, one non-negative size per axis.
///
/// `Extents` is a plain descriptor: it does not enforce the canonical empty
/// form by itself. Use [`Extents::canonical`] to obtain the normalized shape
/// the array stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extents<const D: usize> {
    dims: [usize; D],
}

impl<const D: usize> Extents<D> {
    /// All-zero extents, the canonical empty shape.
    #[inline]
    pub const fn empty() -> Self {
        Self { dims: [0; D] }
    }

    /// Wrap raw per-axis sizes without normalization.
    #[inline]
    pub const fn new(dims: [usize; D]) -> Self {
        Self { dims }
    }

    /// Wrap per-axis sizes, collapsing any shape with a zero axis to all zeros.
    ///
    /// ```
    /// # use ndvec_core::Extents;
    /// assert_eq!(Extents::canonical([2, 3, 0, 5]).dims(), &[0, 0, 0, 0]);
    /// assert_eq!(Extents::canonical([2, 3]).dims(), &[2, 3]);
    /// ```
    #[inline]
    pub fn canonical(dims: [usize; D]) -> Self {
        if dims.contains(&0) {
            Self::empty()
        } else {
            Self { dims }
        }
    }

    /// The per-axis sizes.
    #[inline]
    pub const fn dims(&self) -> &[usize; D] {
        &self.dims
    }

    /// The number of axes, always `D`.
    #[inline]
    pub const fn ndim(&self) -> usize {
        D
    }

    /// Size of `axis`, failing with [`CoreError::AxisOutOfBounds`] if `axis >= D`.
    pub fn get(&self, axis: usize) -> Result<usize> {
        self.dims
            .get(axis)
            .copied()
            .ok_or(CoreError::AxisOutOfBounds { axis, ndim: D })
    }

    /// Size of `axis` with no validation beyond the slice bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= D`.
    #[inline]
    pub fn get_unchecked(&self, axis: usize) -> usize {
        self.dims[axis]
    }

    /// Whether any axis has size zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.contains(&0)
    }

    /// Whether every axis has size zero.
    #[inline]
    pub fn is_canonical_empty(&self) -> bool {
        self.dims.iter().all(|&d| d == 0)
    }

    /// Product of all extents, or `None` if it overflows `usize`.
    ///
    /// A zero on any axis yields `Some(0)` even when the other axes alone
    /// would overflow.
    pub fn checked_numel(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// Product of all extents, saturating at `usize::MAX`.
    #[inline]
    pub fn numel(&self) -> usize {
        self.checked_numel().unwrap_or(usize::MAX)
    }

    /// Row-major strides in elements: the innermost axis has stride 1.
    pub fn strides(&self) -> [usize; D] {
        let mut strides = [1usize; D];
        for k in (0..D.saturating_sub(1)).rev() {
            strides[k] = strides[k + 1].saturating_mul(self.dims[k + 1]);
        }
        strides
    }

    /// Linear offset of `index` without validating any axis.
    ///
    /// The caller guarantees `index[k] < dims[k]` for every axis; otherwise
    /// the result is meaningless (but never unsafe).
    #[inline]
    pub fn flat_index(&self, index: [usize; D]) -> usize {
        index
            .iter()
            .zip(self.dims.iter())
            .fold(0usize, |acc, (&i, &d)| acc.wrapping_mul(d).wrapping_add(i))
    }

    /// Linear offset of `index`, validating every axis first.
    ///
    /// Fails with [`CoreError::IndexOutOfBounds`] naming the first axis whose
    /// component is not below its extent.
    pub fn flat_index_checked(&self, index: [usize; D]) -> Result<usize> {
        if let Some(axis) = self.first_violation(&index) {
            return Err(CoreError::IndexOutOfBounds {
                axis,
                index: index.to_vec(),
                extents: self.dims.to_vec(),
            });
        }
        Ok(self.flat_index(index))
    }

    /// Whether every component of `index` is within its axis.
    #[inline]
    pub fn contains(&self, index: &[usize; D]) -> bool {
        self.first_violation(index).is_none()
    }

    fn first_violation(&self, index: &[usize; D]) -> Option<usize> {
        index
            .iter()
            .zip(self.dims.iter())
            .position(|(&i, &d)| i >= d)
    }

    /// Multi-axis index of a linear offset. Inverse of [`flat_index`](Self::flat_index)
    /// for in-range offsets.
    pub fn unravel(&self, mut flat: usize) -> [usize; D] {
        let mut index = [0usize; D];
        for k in (0..D).rev() {
            let d = self.dims[k];
            if d == 0 {
                continue;
            }
            index[k] = flat % d;
            flat /= d;
        }
        index
    }

    /// Every in-range index in row-major order.
    pub fn indices(&self) -> Indices<D> {
        Indices::new(*self)
    }
}

impl<const D: usize> Default for Extents<D> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const D: usize> From<[usize; D]> for Extents<D> {
    fn from(dims: [usize; D]) -> Self {
        Self::new(dims)
    }
}

impl<const D: usize> From<Extents<D>> for [usize; D] {
    fn from(extents: Extents<D>) -> Self {
        extents.dims
    }
}

/// Row-major odometer over all indices of an [`Extents`].
#[derive(Debug, Clone)]
pub struct Indices<const D: usize> {
    extents: Extents<D>,
    next: [usize; D],
    remaining: usize,
}

impl<const D: usize> Indices<D> {
    fn new(extents: Extents<D>) -> Self {
        Self {
            extents,
            next: [0; D],
            remaining: extents.numel(),
        }
    }
}

impl<const D: usize> Iterator for Indices<D> {
    type Item = [usize; D];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;

        // Advance the odometer
        for k in (0..D).rev() {
            self.next[k] += 1;
            if self.next[k] < self.extents.dims[k] {
                break;
            }
            self.next[k] = 0;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const D: usize> ExactSizeIterator for Indices<D> {}

impl<const D: usize> FusedIterator for Indices<D> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical() {
        assert_eq!(Extents::canonical([3, 4]), Extents::new([3, 4]));
        assert_eq!(Extents::canonical([3, 0]), Extents::empty());
        assert!(Extents::canonical([0, 7, 1]).is_canonical_empty());
    }

    #[test]
    fn test_get() {
        let e = Extents::new([3, 4, 5]);
        assert_eq!(e.get(0).unwrap(), 3);
        assert_eq!(e.get(2).unwrap(), 5);
        assert_eq!(e.get_unchecked(1), 4);
        assert_eq!(
            e.get(3),
            Err(CoreError::AxisOutOfBounds { axis: 3, ndim: 3 })
        );
    }

    #[test]
    fn test_numel() {
        assert_eq!(Extents::new([3, 4, 5, 6]).numel(), 360);
        assert_eq!(Extents::new([3, 0, 5]).numel(), 0);
        assert_eq!(Extents::<2>::empty().numel(), 0);
        assert_eq!(Extents::new([usize::MAX, 2]).checked_numel(), None);
        assert_eq!(Extents::new([usize::MAX, 2, 0]).checked_numel(), Some(0));
        assert_eq!(Extents::new([usize::MAX, 2]).numel(), usize::MAX);
    }

    #[test]
    fn test_strides() {
        assert_eq!(Extents::new([2, 3, 4]).strides(), [12, 4, 1]);
        assert_eq!(Extents::new([5]).strides(), [1]);
        assert_eq!(Extents::new([9, 21]).strides(), [21, 1]);
    }

    #[test]
    fn test_flat_index_matches_strides() {
        let e = Extents::new([3, 4, 5, 6]);
        let strides = e.strides();
        for index in e.indices() {
            let by_strides: usize = index.iter().zip(strides.iter()).map(|(i, s)| i * s).sum();
            assert_eq!(e.flat_index(index), by_strides);
        }
    }

    #[test]
    fn test_flat_index_4d() {
        let e = Extents::new([3, 4, 5, 6]);
        assert_eq!(e.flat_index([0, 0, 0, 0]), 0);
        assert_eq!(e.flat_index([1, 2, 3, 4]), 202);
        assert_eq!(e.flat_index([0, 0, 4, 2]), 26);
        assert_eq!(e.flat_index([2, 0, 0, 1]), 241);
        assert_eq!(e.flat_index([0, 3, 1, 0]), 96);
        assert_eq!(e.flat_index([0, 3, 2, 0]), 102);
    }

    #[test]
    fn test_flat_index_checked() {
        let e = Extents::new([10, 10, 10, 10]);
        assert_eq!(e.flat_index_checked([9, 0, 0, 0]).unwrap(), 9000);
        assert_eq!(e.flat_index_checked([0, 9, 0, 0]).unwrap(), 900);
        assert_eq!(e.flat_index_checked([9, 9, 9, 9]).unwrap(), 9999);

        for axis in 0..4 {
            for bad in [10, 11] {
                let mut index = [0; 4];
                index[axis] = bad;
                match e.flat_index_checked(index) {
                    Err(CoreError::IndexOutOfBounds { axis: a, .. }) => assert_eq!(a, axis),
                    other => panic!("expected IndexOutOfBounds, got {other:?}"),
                }
            }
        }
    }

    #[test]
    fn test_flat_index_checked_reports_first_axis() {
        let e = Extents::new([1, 1, 1]);
        let err = e.flat_index_checked([0, 5, 5]).unwrap_err();
        assert_eq!(
            err,
            CoreError::IndexOutOfBounds {
                axis: 1,
                index: vec![0, 5, 5],
                extents: vec![1, 1, 1],
            }
        );
    }

    #[test]
    fn test_checked_on_empty_always_fails() {
        let e = Extents::<2>::empty();
        assert!(e.flat_index_checked([0, 0]).is_err());
        assert!(!e.contains(&[0, 0]));
    }

    #[test]
    fn test_unravel() {
        let e = Extents::new([3, 4, 5]);
        for (flat, index) in e.indices().enumerate() {
            assert_eq!(e.unravel(flat), index);
        }
    }

    #[test]
    fn test_indices_order() {
        let got: Vec<[usize; 2]> = Extents::new([2, 3]).indices().collect();
        assert_eq!(
            got,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
        assert_eq!(Extents::<3>::empty().indices().count(), 0);
        assert_eq!(Extents::new([4, 5]).indices().len(), 20);
    }
}
