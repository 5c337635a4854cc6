//! Element access by flat offset or by multi-axis index.
//!
//! Indexing with `[]` is the unchecked form: a `usize` is a flat offset and
//! a `[usize; D]` goes through [`Extents::flat_index`](crate::Extents::flat_index)
//! with no per-axis validation. The `get*` methods are the checked forms and
//! return [`CoreError`] instead of panicking.

use core::ops::{Index, IndexMut};

use crate::error::{CoreError, Result};

use super::NdVec;

impl<T, const D: usize> NdVec<T, D> {
    /// Element at flat offset `index`, or
    /// [`CoreError::FlatIndexOutOfBounds`] if `index >= len()`.
    pub fn get_flat(&self, index: usize) -> Result<&T> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(CoreError::FlatIndexOutOfBounds { index, len })
    }

    /// Mutable element at flat offset `index`.
    pub fn get_flat_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(CoreError::FlatIndexOutOfBounds { index, len })
    }

    /// Element at a multi-axis index, validating every axis.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let a = NdVec::from_flat(vec![1, 2, 3, 4, 5, 6], [2, 3]).unwrap();
    /// assert_eq!(*a.get([1, 2]).unwrap(), 6);
    /// assert!(a.get([0, 3]).is_err());
    /// ```
    pub fn get(&self, index: [usize; D]) -> Result<&T> {
        let flat = self.extents.flat_index_checked(index)?;
        Ok(&self.data[flat])
    }

    /// Mutable element at a multi-axis index, validating every axis.
    pub fn get_mut(&mut self, index: [usize; D]) -> Result<&mut T> {
        let flat = self.extents.flat_index_checked(index)?;
        Ok(&mut self.data[flat])
    }

    /// Overwrite the element at a multi-axis index.
    pub fn set(&mut self, index: [usize; D], value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// First element in storage order, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Mutable first element in storage order, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.data.first_mut()
    }

    /// Last element in storage order, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Mutable last element in storage order, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.data.last_mut()
    }
}

impl<T, const D: usize> Index<usize> for NdVec<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for NdVec<T, D> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const D: usize> Index<[usize; D]> for NdVec<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; D]) -> &T {
        &self.data[self.extents.flat_index(index)]
    }
}

impl<T, const D: usize> IndexMut<[usize; D]> for NdVec<T, D> {
    #[inline]
    fn index_mut(&mut self, index: [usize; D]) -> &mut T {
        let flat = self.extents.flat_index(index);
        &mut self.data[flat]
    }
}
