use crate::algebra::*;

// Row, column, diagonal and block extraction / assignment.  All
// indices refer to the logical (transpose aware) shape, and every
// extracted matrix is returned in normal orientation.

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// Copy of logical row `row` as a `1 x ncols` matrix
    pub fn get_row(&self, row: usize) -> Result<Self, MatrixError> {
        self.get_block(row, 0, 1, self.ncols())
    }

    /// Copy of logical column `col` as a `nrows x 1` matrix
    pub fn get_col(&self, col: usize) -> Result<Self, MatrixError> {
        self.get_block(0, col, self.nrows(), 1)
    }

    /// Returns a row when the matrix has more than one row, and
    /// otherwise the column `selector` of the single row.
    pub fn get_row_or_col(&self, selector: usize) -> Result<Self, MatrixError> {
        if self.nrows() > 1 {
            self.get_row(selector)
        } else {
            self.get_col(selector)
        }
    }

    /// Copy of the diagonal at `offset` as a column vector.
    ///
    /// Positive offsets select superdiagonals and negative offsets
    /// select subdiagonals.
    pub fn get_diagonal(&self, offset: isize) -> Result<Self, MatrixError> {
        let (r0, c0, len) = self.diagonal_range(offset)?;
        let mut diag = DenseMatrix::zeros((len, 1));
        for k in 0..len {
            diag.data[k] = self[(r0 + k, c0 + k)];
        }
        Ok(diag)
    }

    /// Copy of the `h x w` block with top left corner `(row, col)`
    pub fn get_block(&self, row: usize, col: usize, h: usize, w: usize) -> Result<Self, MatrixError> {
        self.check_block(row, col, h, w)?;
        let mut block = DenseMatrix::zeros((h, w));
        for j in 0..w {
            for i in 0..h {
                block[(i, j)] = self[(row + i, col + j)];
            }
        }
        Ok(block)
    }

    /// Overwrites logical row `row` with the `1 x ncols` matrix `src`
    pub fn set_row(&mut self, row: usize, src: &Self) -> Result<(), MatrixError> {
        let n = self.ncols();
        self.set_block(row, 0, 1, n, src)
    }

    /// Overwrites logical column `col` with the `nrows x 1` matrix `src`
    pub fn set_col(&mut self, col: usize, src: &Self) -> Result<(), MatrixError> {
        let m = self.nrows();
        self.set_block(0, col, m, 1, src)
    }

    /// Overwrites the diagonal at `offset` with the values of `src`,
    /// which may be either a row or a column vector of matching length.
    pub fn set_diagonal(&mut self, offset: isize, src: &Self) -> Result<(), MatrixError> {
        let (r0, c0, len) = self.diagonal_range(offset)?;
        if src.size() != (len, 1) && src.size() != (1, len) {
            return Err(MatrixError::DimensionMismatch {
                op: "set_diagonal",
                lhs: (len, 1),
                rhs: src.size(),
            });
        }
        // a vector has the same values in storage order in either orientation
        for k in 0..len {
            self[(r0 + k, c0 + k)] = src.data[k];
        }
        Ok(())
    }

    /// Overwrites the `h x w` block with top left corner `(row, col)`
    pub fn set_block(
        &mut self,
        row: usize,
        col: usize,
        h: usize,
        w: usize,
        src: &Self,
    ) -> Result<(), MatrixError> {
        self.check_block(row, col, h, w)?;
        if src.size() != (h, w) {
            return Err(MatrixError::DimensionMismatch {
                op: "set_block",
                lhs: (h, w),
                rhs: src.size(),
            });
        }
        for j in 0..w {
            for i in 0..h {
                self[(row + i, col + j)] = src[(i, j)];
            }
        }
        Ok(())
    }

    fn check_block(&self, row: usize, col: usize, h: usize, w: usize) -> Result<(), MatrixError> {
        let (m, n) = self.size();
        if row >= m || col >= n {
            return Err(MatrixError::out_of_range(row, col, (m, n)));
        }
        // row < m and col < n, so these differences cannot underflow
        if h > m - row || w > n - col {
            return Err(MatrixError::out_of_range(
                row.saturating_add(h),
                col.saturating_add(w),
                (m, n),
            ));
        }
        Ok(())
    }

    // (first row, first col, length) of a diagonal
    fn diagonal_range(&self, offset: isize) -> Result<(usize, usize, usize), MatrixError> {
        let (m, n) = self.size();
        let in_range = if offset >= 0 {
            offset.unsigned_abs() < n
        } else {
            offset.unsigned_abs() < m
        };
        if !in_range {
            return Err(MatrixError::OutOfRange {
                index: (offset, 0),
                bound: (m, n),
            });
        }
        let k = offset.unsigned_abs();
        if offset >= 0 {
            Ok((0, k, usize::min(m, n - k)))
        } else {
            Ok((k, 0, usize::min(m - k, n)))
        }
    }
}
