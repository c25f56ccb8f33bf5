use crate::algebra::*;

// Element access by logical (row, col).  Transposed matrices map the
// logical index onto the physical compressed column storage, so that
// reads and writes behave the same in either orientation.

impl<T> SparseMatrix<T>
where
    T: FloatT,
{
    /// Writes `value` at the logical position `(row, col)`.
    ///
    /// An existing entry is overwritten in place.  Otherwise a new entry
    /// is inserted at its sorted position within the column and the
    /// column pointers of every later column are shifted by one.  Zero
    /// values are stored explicitly.
    ///
    /// Each insertion costs O(column_nnz + ncols) for the data shift and
    /// pointer update.  Bulk loads should prefer
    /// [`from_parts`](Self::from_parts) or [`spalloc`](Self::spalloc).
    ///
    /// ```
    /// use hypermatrix::algebra::*;
    ///
    /// let mut A = SparseMatrix::<f64>::zeros((2, 1));
    /// A.set_elem(5., 1, 0).unwrap();
    /// A.set_elem(3., 0, 0).unwrap();
    ///
    /// assert_eq!(A.colptr(), &[0, 2]);
    /// assert_eq!(A.rowval(), &[0, 1]);
    /// assert_eq!(A.nzval(), &[3., 5.]);
    /// ```
    pub fn set_elem(&mut self, value: T, row: usize, col: usize) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        let (prow, pcol) = self.physical_index((row, col));

        match self.find_in_column(prow, pcol) {
            Ok(ptr) => {
                self.nzval[ptr] = value;
            }
            Err(ptr) => {
                self.rowval.insert(ptr, prow);
                self.nzval.insert(ptr, value);
                self.colptr[(pcol + 1)..].iter_mut().for_each(|p| *p += 1);
            }
        }
        Ok(())
    }

    /// Reads the logical element `(row, col)`.  Positions with no stored
    /// entry read as zero.
    pub fn get_elem(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_index(row, col)?;
        Ok(self.get_entry((row, col)).unwrap_or_else(T::zero))
    }

    /// Returns the value at the given logical (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given index is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows() && col < self.ncols());

        let (prow, pcol) = self.physical_index(idx);
        self.find_in_column(prow, pcol)
            .ok()
            .map(|ptr| self.nzval[ptr])
    }

    fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        let (m, n) = self.size();
        if row >= m || col >= n {
            return Err(MatrixError::out_of_range(row, col, (m, n)));
        }
        Ok(())
    }

    #[inline]
    fn physical_index(&self, idx: (usize, usize)) -> (usize, usize) {
        match self.shape() {
            MatrixShape::N => idx,
            MatrixShape::T => (idx.1, idx.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csc_get_entry() {
        // A =
        //[ ⋅   4.0    ⋅    ⋅   12.0]
        //[1.0  5.0    ⋅    ⋅     ⋅ ]
        //[ ⋅   6.0    ⋅    ⋅   13.0]
        //[2.0  7.0  10.0   ⋅     ⋅ ]
        //[ ⋅   8.0  11.0   ⋅   14.0]
        //[3.0  9.0    ⋅    ⋅     ⋅ ]

        let A = SparseMatrix::from_parts(
            6,                                                                 // m
            5,                                                                 // n
            vec![0, 3, 9, 11, 11, 14],                                         // colptr
            vec![1, 3, 5, 0, 1, 2, 3, 4, 5, 3, 4, 0, 2, 4],                    // rowval
            vec![1., 2., 3., 4., 5., 6., 7., 8., 9., 10., 11., 12., 13., 14.], // nzval
        )
        .unwrap();

        assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
        assert_eq!(A.get_entry((5, 0)).unwrap(), 3.);
        assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
        assert_eq!(A.get_entry((3, 1)).unwrap(), 7.);
        assert_eq!(A.get_entry((5, 1)).unwrap(), 9.);
        assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);
        assert_eq!(A.get_entry((4, 2)).unwrap(), 11.);
        assert_eq!(A.get_entry((4, 4)).unwrap(), 14.);

        assert!(A.get_entry((0, 0)).is_none());
        assert!(A.get_entry((4, 0)).is_none());
        assert!(A.get_entry((2, 2)).is_none());
        assert!(A.get_entry((1, 3)).is_none());
        assert!(A.get_entry((2, 3)).is_none());
        assert!(A.get_entry((4, 3)).is_none());
        assert!(A.get_entry((3, 4)).is_none());

        assert_eq!(A.get_elem(0, 0), Ok(0.));
        assert_eq!(A.get_elem(3, 2), Ok(10.));

        // transposed reads swap the index
        let At = A.transpose();
        assert_eq!(At.get_entry((2, 3)).unwrap(), 10.);
        assert!(At.get_entry((3, 2)).is_none());
    }

    #[test]
    fn test_insert_keeps_columns_sorted() {
        let mut A = SparseMatrix::<f64>::zeros((4, 3));

        A.set_elem(1., 3, 1).unwrap();
        A.set_elem(2., 0, 1).unwrap();
        A.set_elem(3., 2, 0).unwrap();
        A.set_elem(4., 1, 2).unwrap();
        A.set_elem(5., 2, 1).unwrap();

        assert_eq!(A.colptr(), &[0, 1, 4, 5]);
        assert_eq!(A.rowval(), &[2, 0, 2, 3, 1]);
        assert_eq!(A.nzval(), &[3., 2., 5., 1., 4.]);
        assert!(A.check_format().is_ok());

        // overwrite is not a structural change
        A.set_elem(-5., 2, 1).unwrap();
        assert_eq!(A.nnz(), 5);
        assert_eq!(A.get_elem(2, 1), Ok(-5.));

        // explicit zeros are kept
        A.set_elem(0., 0, 0).unwrap();
        assert_eq!(A.nnz(), 6);
        assert_eq!(A.get_entry((0, 0)), Some(0.));
    }

    #[test]
    fn test_set_elem_bounds() {
        let mut A = SparseMatrix::<f64>::zeros((2, 3));
        assert!(matches!(
            A.set_elem(1., 2, 0),
            Err(MatrixError::OutOfRange { .. })
        ));
        assert!(matches!(
            A.get_elem(0, 3),
            Err(MatrixError::OutOfRange { .. })
        ));
        assert_eq!(A.nnz(), 0);

        // logical bounds of a transpose are swapped
        let mut At = A.transpose();
        assert!(At.set_elem(1., 2, 1).is_ok());
        assert!(At.set_elem(1., 1, 2).is_err());
    }

    #[test]
    fn test_set_elem_through_transpose() {
        let mut At = SparseMatrix::<f64>::zeros((2, 3)).transpose();
        At.set_elem(7., 2, 0).unwrap();
        At.set_elem(8., 0, 1).unwrap();

        // stored at the swapped physical positions
        assert_eq!(At.colptr(), &[0, 1, 1, 2]);
        assert_eq!(At.rowval(), &[1, 0]);
        assert_eq!(At.get_elem(2, 0), Ok(7.));
        assert_eq!(At.get_elem(0, 1), Ok(8.));
        assert!(At.check_format().is_ok());
    }
}
