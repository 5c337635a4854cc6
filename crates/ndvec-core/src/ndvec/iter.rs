//! Traversal in storage (row-major) order.

use core::iter::FusedIterator;
use core::slice;

use crate::extents::Indices;

use super::NdVec;

impl<T, const D: usize> NdVec<T, D> {
    /// Iterate over all elements in storage order.
    ///
    /// The iterator is double-ended, so `.rev()` walks the buffer backwards.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::from_flat(vec![1, 2, 3, 4], [2, 2]).unwrap();
    /// assert!(a.iter().rev().copied().eq([4, 3, 2, 1]));
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over `(index, element)` pairs in storage order.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::from_flat(vec!['a', 'b', 'c', 'd'], [2, 2]).unwrap();
    /// let pairs: Vec<_> = a.indexed_iter().collect();
    /// assert_eq!(pairs[2], ([1, 0], &'c'));
    /// ```
    pub fn indexed_iter(&self) -> IndexedIter<'_, T, D> {
        IndexedIter {
            indices: self.extents.indices(),
            items: self.data.iter(),
        }
    }
}

/// Iterator returned by [`NdVec::indexed_iter`].
#[derive(Debug, Clone)]
pub struct IndexedIter<'a, T, const D: usize> {
    indices: Indices<D>,
    items: slice::Iter<'a, T>,
}

impl<'a, T, const D: usize> Iterator for IndexedIter<'a, T, D> {
    type Item = ([usize; D], &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some((self.indices.next()?, self.items.next()?))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T, const D: usize> ExactSizeIterator for IndexedIter<'_, T, D> {}

impl<T, const D: usize> FusedIterator for IndexedIter<'_, T, D> {}

impl<'a, T, const D: usize> IntoIterator for &'a NdVec<T, D> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a mut NdVec<T, D> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const D: usize> IntoIterator for NdVec<T, D> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_flat().into_iter()
    }
}

impl<T> FromIterator<T> for NdVec<T, 1> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}
