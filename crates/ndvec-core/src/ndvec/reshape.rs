//! Shape reinterpretation and cross-dimensionality transfer.
//!
//! `reshape` relabels the existing buffer. The `reshape_from*` family
//! replaces this array's contents with another buffer, of any
//! dimensionality, under new extents. All of them check the element count
//! first and leave every operand untouched on mismatch.

use tracing::{debug, trace};

use crate::error::{CoreError, Result};
use crate::extents::Extents;

use super::NdVec;

/// Fail with `SizeMismatch` unless `target` holds exactly `len` elements.
fn check_len<const D: usize>(op: &'static str, target: Extents<D>, len: usize) -> Result<()> {
    if target.checked_numel() == Some(len) {
        return Ok(());
    }
    debug!(op, extents = ?target.dims(), len, "element count mismatch");
    Err(CoreError::SizeMismatch {
        op,
        extents: target.dims().to_vec(),
        len,
    })
}

impl<T, const D: usize> NdVec<T, D> {
    /// Reinterpret the buffer under `dims` without moving any element.
    ///
    /// Fails with [`CoreError::SizeMismatch`] if the product of `dims`
    /// differs from [`len`](Self::len); the array is left unmodified. On an
    /// empty array this is always a no-op: the only accepted shapes have a
    /// zero axis, and the extents stay all-zero.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let mut a = NdVec::from_flat((0..6).collect::<Vec<i32>>(), [6, 1]).unwrap();
    /// a.reshape([2, 3]).unwrap();
    /// assert_eq!(a[[1, 0]], 3);
    /// assert!(a.reshape([4, 2]).is_err());
    /// assert_eq!(a.extents(), &[2, 3]);
    /// ```
    pub fn reshape(&mut self, dims: [usize; D]) -> Result<()> {
        let target = Extents::new(dims);
        check_len("reshape", target, self.data.len())?;
        if !self.data.is_empty() {
            trace!(from = ?self.extents.dims(), to = ?dims, "reshape");
            self.extents = target;
        }
        Ok(())
    }

    /// Replace this array with a copy of `source`'s elements under `dims`.
    ///
    /// `source` may have any dimensionality `E`; only its element count must
    /// match the product of `dims`. On mismatch this fails with
    /// [`CoreError::SizeMismatch`] and leaves `self` unmodified. An empty
    /// source yields the canonical empty array.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let flat = NdVec::<i32, 1>::from(vec![1, 2, 3, 4, 5, 6]);
    /// let mut grid = NdVec::<i32, 3>::new();
    /// grid.reshape_from(&flat, [3, 2, 1]).unwrap();
    /// assert_eq!(grid[[2, 1, 0]], 6);
    /// ```
    pub fn reshape_from<const E: usize>(
        &mut self,
        source: &NdVec<T, E>,
        dims: [usize; D],
    ) -> Result<()>
    where
        T: Clone,
    {
        self.copy_from("reshape_from", source.as_slice(), dims)
    }

    /// Replace this array with a copy of a linear sequence under `dims`.
    ///
    /// Same contract as [`reshape_from`](Self::reshape_from).
    pub fn reshape_from_slice(&mut self, source: &[T], dims: [usize; D]) -> Result<()>
    where
        T: Clone,
    {
        self.copy_from("reshape_from_slice", source, dims)
    }

    fn copy_from(&mut self, op: &'static str, source: &[T], dims: [usize; D]) -> Result<()>
    where
        T: Clone,
    {
        let target = Extents::new(dims);
        check_len(op, target, source.len())?;
        // `self` is untouched until every clone has succeeded.
        let data = source.to_vec();
        self.install(data, target);
        Ok(())
    }

    /// Move `source`'s buffer into this array under `dims`, without copying
    /// elements.
    ///
    /// On success `source` is left canonical-empty. On mismatch this fails
    /// with [`CoreError::SizeMismatch`] and neither array is modified.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let mut src = NdVec::from_flat((0..22).collect::<Vec<i32>>(), [22]).unwrap();
    /// let mut dst = NdVec::<i32, 2>::new();
    /// assert!(dst.reshape_take_from(&mut src, [11, 3]).is_err());
    /// assert_eq!(src.len(), 22);
    /// dst.reshape_take_from(&mut src, [11, 2]).unwrap();
    /// assert!(src.is_empty());
    /// assert_eq!(dst[[10, 1]], 21);
    /// ```
    pub fn reshape_take_from<const E: usize>(
        &mut self,
        source: &mut NdVec<T, E>,
        dims: [usize; D],
    ) -> Result<()> {
        let target = Extents::new(dims);
        check_len("reshape_take_from", target, source.len())?;
        let data = source.take_flat();
        self.install(data, target);
        Ok(())
    }

    /// Move a linear buffer into this array under `dims`, without copying
    /// elements.
    ///
    /// On success `source` is left empty. On mismatch this fails with
    /// [`CoreError::SizeMismatch`] and neither operand is modified.
    pub fn reshape_take_from_vec(&mut self, source: &mut Vec<T>, dims: [usize; D]) -> Result<()> {
        let target = Extents::new(dims);
        check_len("reshape_take_from_vec", target, source.len())?;
        let data = std::mem::take(source);
        self.install(data, target);
        Ok(())
    }

    /// Adopt `data` as the buffer. An empty buffer normalizes to canonical
    /// empty form instead of keeping `target`.
    fn install(&mut self, data: Vec<T>, target: Extents<D>) {
        if data.is_empty() {
            self.clear();
            return;
        }
        trace!(to = ?target.dims(), len = data.len(), "replaced contents");
        self.set_parts(data, target);
    }
}

impl<T> NdVec<T, 1> {
    /// Adopt a linear buffer as a 1-D array whose extent is its length.
    ///
    /// ```
    /// # use ndvec_core::NdVec;
    /// let mut a = NdVec::<u8, 1>::new();
    /// a.assign_flat(vec![4, 5, 6]);
    /// assert_eq!(a.extents(), &[3]);
    /// ```
    pub fn assign_flat(&mut self, data: Vec<T>) {
        let len = data.len();
        self.install(data, Extents::new([len]));
    }
}

impl<T> From<Vec<T>> for NdVec<T, 1> {
    fn from(data: Vec<T>) -> Self {
        let mut out = Self::new();
        out.assign_flat(data);
        out
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_reshape_chain() {
        let mut b = NdVec::<bool, 3>::filled([8, 8, 8], true);

        b.reshape([64, 1, 8]).unwrap();
        assert_eq!(b.extents(), &[64, 1, 8]);

        b.reshape([1, 512, 1]).unwrap();
        assert_eq!(b.extents(), &[1, 512, 1]);

        assert!(b.reshape([1, 511, 1]).unwrap_err().is_invalid_argument());
        assert!(b.reshape([1, 513, 1]).unwrap_err().is_invalid_argument());
        assert_eq!(b.extents(), &[1, 512, 1]);

        b.reshape([2, 8, 32]).unwrap();
        assert_eq!(b.extents(), &[2, 8, 32]);
        assert_eq!(b.len(), 512);
        assert!(b.iter().all(|&x| x));
    }

    #[test]
    fn test_reshape_error_payload() {
        let mut a = NdVec::<i32, 2>::with_extents([2, 2]);
        assert_eq!(
            a.reshape([3, 3]),
            Err(CoreError::SizeMismatch {
                op: "reshape",
                extents: vec![3, 3],
                len: 4,
            })
        );
    }

    #[test]
    fn test_reshape_overflow_is_mismatch() {
        let mut a = NdVec::<i32, 2>::with_extents([2, 2]);
        assert!(a.reshape([usize::MAX, 2]).is_err());
        assert_eq!(a.extents(), &[2, 2]);
    }

    #[test]
    fn test_reshape_on_empty_is_noop() {
        let mut a = NdVec::<i32, 3>::new();
        a.reshape([32, 0, 128]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.extents(), &[0, 0, 0]);

        a.reshape([0, 0, 0]).unwrap();
        assert_eq!(a.extents(), &[0, 0, 0]);

        assert!(a.reshape([1, 1, 1]).is_err());
        assert_eq!(a.extents(), &[0, 0, 0]);
    }

    #[test]
    fn test_vector_round_trip_through_dimensions() {
        let vec: Vec<i32> = (0..22).collect();

        let mut nvec1 = NdVec::<i32, 1>::new();
        nvec1.assign_flat(vec.clone());
        assert_eq!(nvec1.len(), 22);
        assert_eq!(nvec1.as_slice(), vec.as_slice());

        let mut vec2 = nvec1.take_flat();
        assert!(nvec1.is_empty());
        assert_eq!(nvec1.dim::<0>(), 0);

        let mut nvec2 = NdVec::<i32, 2>::new();
        let err = nvec2.reshape_take_from_vec(&mut vec2, [11, 3]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(vec2.len(), 22);
        assert!(nvec2.is_empty());

        nvec2.reshape_take_from_vec(&mut vec2, [11, 2]).unwrap();
        assert!(vec2.is_empty());
        assert_eq!(nvec2.len(), 22);
        assert!(nvec2.iter().copied().eq(0..22));

        let mut nvec3 = NdVec::<i32, 3>::new();
        nvec3.reshape_from(&nvec2, [11, 2, 1]).unwrap();
        assert_eq!(nvec3.as_slice(), nvec2.as_slice());
        assert_eq!(nvec3.extents(), &[11, 2, 1]);

        nvec2.resize([3, 0]);
        assert!(nvec2.is_empty());
        assert_eq!(nvec2.extents(), &[0, 0]);

        nvec3.resize([3, 0, 1]);
        assert!(nvec3.is_empty());
        assert_eq!(nvec3.extents(), &[0, 0, 0]);
    }

    #[test]
    fn test_reshape_from_failure_leaves_destination() {
        let src = NdVec::from_flat((0..22).collect::<Vec<i32>>(), [22]).unwrap();
        let mut dst = NdVec::filled([2, 2], -1);
        let before = dst.clone();
        assert!(dst.reshape_from(&src, [11, 3]).is_err());
        assert_eq!(dst, before);
        assert!(dst.reshape_from_slice(src.as_slice(), [5, 5]).is_err());
        assert_eq!(dst, before);
    }

    #[test]
    fn test_reshape_from_copy_keeps_source() {
        let src = NdVec::from_flat((0..6).collect::<Vec<i32>>(), [2, 3]).unwrap();
        let mut dst = NdVec::<i32, 2>::with_extents([10, 10]);
        dst.reshape_from(&src, [3, 2]).unwrap();
        assert_eq!(src.extents(), &[2, 3]);
        assert_eq!(dst.extents(), &[3, 2]);
        assert_eq!(dst.as_slice(), src.as_slice());
    }

    #[test]
    fn test_reshape_from_empty_source() {
        let g = NdVec::<i32, 2>::new();
        let mut f = NdVec::<i32, 2>::with_extents([4, 4]);
        f.reshape_from(&g, [0, 2]).unwrap();
        assert_eq!(f.extents(), &[0, 0]);
        assert!(f.is_empty());

        let mut g = NdVec::<i32, 2>::new();
        let mut f = NdVec::<i32, 2>::with_extents([4, 4]);
        f.reshape_take_from(&mut g, [0, 2]).unwrap();
        assert_eq!(f.extents(), &[0, 0]);
        assert!(f.is_empty());
        assert!(g.is_empty());

        let mut f = NdVec::<i32, 2>::new();
        f.reshape_from_slice(&[], [5, 0]).unwrap();
        assert_eq!(f.extents(), &[0, 0]);
    }

    #[test]
    fn test_reshape_take_from_failure_leaves_both() {
        let mut src = NdVec::from_flat((0..6).collect::<Vec<i32>>(), [2, 3]).unwrap();
        let src_before = src.clone();
        let mut dst = NdVec::<i32, 3>::filled([1, 1, 2], 5);
        let dst_before = dst.clone();
        assert!(dst.reshape_take_from(&mut src, [1, 2, 2]).is_err());
        assert_eq!(src, src_before);
        assert_eq!(dst, dst_before);
    }

    #[test]
    fn test_reshape_take_from_moves_buffer() {
        let mut src = NdVec::from_flat((0..6).collect::<Vec<i32>>(), [2, 3]).unwrap();
        let ptr = src.as_slice().as_ptr();
        let mut dst = NdVec::<i32, 3>::new();
        dst.reshape_take_from(&mut src, [1, 3, 2]).unwrap();
        assert_eq!(dst.as_slice().as_ptr(), ptr);
        assert!(src.is_empty());
        assert_eq!(src.extents(), &[0, 0]);
    }

    #[test]
    fn test_assign_flat_empty() {
        let mut a = NdVec::<i32, 1>::from(vec![1, 2]);
        a.assign_flat(Vec::new());
        assert!(a.is_empty());
        assert_eq!(a.extents(), &[0]);
    }

    fn dims2() -> impl Strategy<Value = [usize; 2]> {
        prop::array::uniform2(1usize..6)
    }

    proptest! {
        #[test]
        fn prop_reshape_round_trip(a in 1usize..6, b in 1usize..6, c in 1usize..6) {
            let n = a * b * c;
            let mut direct = NdVec::from_flat((0..n).collect::<Vec<usize>>(), [n, 1, 1]).unwrap();
            let mut chained = direct.clone();

            chained.reshape([a, b * c, 1]).unwrap();
            chained.reshape([c, b, a]).unwrap();
            direct.reshape([c, b, a]).unwrap();

            prop_assert_eq!(&chained, &direct);
            prop_assert!(chained.iter().copied().eq(0..n));
        }

        #[test]
        fn prop_reshape_from_mismatch_is_inert(src in dims2(), dst in dims2(), req in dims2()) {
            let n: usize = src.iter().product();
            let source = NdVec::from_flat((0..n).collect::<Vec<usize>>(), src).unwrap();
            let mut target = NdVec::<usize, 2>::filled(dst, 7);
            let before = target.clone();

            let result = target.reshape_from(&source, req);
            if req[0] * req[1] == n {
                prop_assert!(result.is_ok());
                prop_assert_eq!(target.extents(), &req);
                prop_assert_eq!(target.as_slice(), source.as_slice());
            } else {
                prop_assert!(result.unwrap_err().is_invalid_argument());
                prop_assert_eq!(&target, &before);
            }
        }
    }
}
