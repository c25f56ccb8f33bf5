use crate::algebra::*;
use std::iter::zip;

impl<T> SparseMatrix<T>
where
    T: FloatT,
{
    /// An empty 0 x 0 matrix
    pub fn new() -> Self {
        Self::zeros((0, 0))
    }

    /// An `m x n` matrix with no stored entries
    pub fn zeros(size: (usize, usize)) -> Self {
        Self::spalloc(size, 0)
    }

    /// allocate space for a sparse matrix with `nnz` elements
    ///
    /// All columns are empty except the last, which owns every
    /// allocated slot.  The caller is responsible for filling the
    /// structure through [`parts_mut`](Self::parts_mut) so that it
    /// satisfies [`check_format`](Self::check_format).
    ///
    /// ```
    /// use hypermatrix::algebra::SparseMatrix;
    ///
    /// // the 2 x 2 identity, filled by hand
    /// let mut A : SparseMatrix<f64> = SparseMatrix::spalloc((2, 2), 2);
    /// let (colptr, rowval, nzval) = A.parts_mut();
    /// colptr.copy_from_slice(&[0, 1, 2]);
    /// rowval.copy_from_slice(&[0, 1]);
    /// nzval.copy_from_slice(&[1., 1.]);
    ///
    /// assert!(A.check_format().is_ok());
    /// assert_eq!(A, SparseMatrix::identity(2));
    /// ```
    pub fn spalloc(size: (usize, usize), nnz: usize) -> Self {
        let (m, n) = size;
        let mut colptr = vec![0; n + 1];
        let rowval = vec![0; nnz];
        let nzval = vec![T::zero(); nnz];
        colptr[n] = nnz;

        Self {
            m,
            n,
            colptr,
            rowval,
            nzval,
            transposed: false,
        }
    }

    /// Adopts existing compressed column data as a new `m x n` matrix.
    ///
    /// The data is checked with [`check_format`](Self::check_format) and
    /// rejected if it does not describe a valid matrix.
    pub fn from_parts(
        m: usize,
        n: usize,
        colptr: Vec<usize>,
        rowval: Vec<usize>,
        nzval: Vec<T>,
    ) -> Result<Self, SparseFormatError> {
        let A = Self {
            m,
            n,
            colptr,
            rowval,
            nzval,
            transposed: false,
        };
        A.check_format()?;
        Ok(A)
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let colptr = (0usize..=n).collect();
        let rowval = (0usize..n).collect();
        let nzval = vec![T::one(); n];

        Self {
            m: n,
            n,
            colptr,
            rowval,
            nzval,
            transposed: false,
        }
    }

    /// Sparse copy of the logical view of `D`.  Zero values are not stored.
    pub fn from_dense(D: &DenseMatrix<T>) -> Self {
        let (m, n) = D.size();
        let mut colptr = Vec::with_capacity(n + 1);
        let mut rowval = Vec::new();
        let mut nzval = Vec::new();

        colptr.push(0);
        for col in 0..n {
            for row in 0..m {
                let v = D[(row, col)];
                if v != T::zero() {
                    rowval.push(row);
                    nzval.push(v);
                }
            }
            colptr.push(rowval.len());
        }

        Self {
            m,
            n,
            colptr,
            rowval,
            nzval,
            transposed: false,
        }
    }

    /// Changes the physical shape to `m x n` and removes all entries.
    pub fn resize(&mut self, size: (usize, usize)) {
        let (m, n) = size;
        self.m = m;
        self.n = n;
        self.colptr.clear();
        self.colptr.resize(n + 1, 0);
        self.rowval.clear();
        self.nzval.clear();
        self.transposed = false;
    }

    /// Reserves capacity for at least `nnz` stored entries in total.
    /// The structure of the matrix is unchanged.
    pub fn reserve(&mut self, nnz: usize) {
        let extra = nnz.saturating_sub(self.nnz());
        self.rowval.reserve(extra);
        self.nzval.reserve(extra);
    }

    /// Removes all entries, keeping the shape and orientation
    pub fn clear(&mut self) {
        self.colptr.fill(0);
        self.rowval.clear();
        self.nzval.clear();
    }

    /// number of stored entries, including explicit zeros
    pub fn nnz(&self) -> usize {
        self.colptr[self.n]
    }

    pub fn colptr(&self) -> &[usize] {
        &self.colptr
    }

    pub fn rowval(&self) -> &[usize] {
        &self.rowval
    }

    pub fn nzval(&self) -> &[T] {
        &self.nzval
    }

    /// Mutable access to the physical (colptr, rowval, nzval) arrays.
    ///
    /// Lengths are fixed, so that only the contents can be changed.
    pub fn parts_mut(&mut self) -> (&mut [usize], &mut [usize], &mut [T]) {
        (&mut self.colptr, &mut self.rowval, &mut self.nzval)
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.colptr.is_empty()
            || (self.colptr.len() - 1) != self.n
            || self.colptr[self.n] != self.rowval.len()
        {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for colptr monotonicity
        if self.colptr[0] != 0 || self.colptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadColptr);
        }

        //check for row values out of bounds
        if !self.rowval.iter().all(|r| r < &self.m) {
            return Err(SparseFormatError::BadRowval);
        }

        //check for rowval monotonicity within each column
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            if self.rowval[rng].windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadRowOrdering);
            }
        }

        Ok(())
    }

    /// Copy of logical column `col` as a `nrows x 1` matrix
    pub fn get_col(&self, col: usize) -> Result<Self, MatrixError> {
        let (m, n) = self.size();
        if col >= n {
            return Err(MatrixError::out_of_range(0, col, (m, n)));
        }

        let (rowval, nzval): (Vec<usize>, Vec<T>) = match self.shape() {
            MatrixShape::N => {
                let rng = self.colptr[col]..self.colptr[col + 1];
                (self.rowval[rng.clone()].to_vec(), self.nzval[rng].to_vec())
            }
            // logical column `col` is physical row `col`.  Physical
            // columns are visited in order, so the rows come out sorted.
            MatrixShape::T => (0..self.n)
                .filter_map(|pcol| {
                    self.find_in_column(col, pcol)
                        .ok()
                        .map(|ptr| (pcol, self.nzval[ptr]))
                })
                .unzip(),
        };

        let nnz = rowval.len();
        Ok(Self {
            m,
            n: 1,
            colptr: vec![0, nnz],
            rowval,
            nzval,
            transposed: false,
        })
    }

    /// Dense copy of the logical view
    pub fn to_dense(&self) -> DenseMatrix<T> {
        let mut D = DenseMatrix::zeros(self.physical_size());
        for col in 0..self.n {
            let rng = self.colptr[col]..self.colptr[col + 1];
            for (&row, &v) in zip(&self.rowval[rng.clone()], &self.nzval[rng]) {
                D[(row, col)] = v;
            }
        }
        if self.transposed {
            D = D.transpose();
            D.materialize();
        }
        D
    }

    /// Returns a copy with the orientation flag toggled.
    pub fn transpose(&self) -> Self {
        let mut At = self.clone();
        At.transposed = !At.transposed;
        At
    }

    /// Deep copy of `other` into `self`, including its orientation.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Rewrites the storage so that the physical layout matches the
    /// logical one and clears the transpose flag.
    pub fn materialize(&mut self) {
        if self.transposed {
            *self = self.physical_transpose();
        }
    }

    // Compressed column form of the transpose of the physical storage,
    // returned in normal orientation.  Rows of the result come out
    // sorted since source columns are visited in order.
    pub(crate) fn physical_transpose(&self) -> Self {
        let (m, n) = (self.m, self.n);
        let nnz = self.nnz();

        // count the entries in each physical row
        let mut colptr = vec![0usize; m + 1];
        for &row in &self.rowval {
            colptr[row + 1] += 1;
        }
        for i in 0..m {
            colptr[i + 1] += colptr[i];
        }

        let mut next = colptr.clone();
        let mut rowval = vec![0; nnz];
        let mut nzval = vec![T::zero(); nnz];
        for col in 0..n {
            for ptr in self.colptr[col]..self.colptr[col + 1] {
                let row = self.rowval[ptr];
                let dest = next[row];
                rowval[dest] = col;
                nzval[dest] = self.nzval[ptr];
                next[row] += 1;
            }
        }

        Self {
            m: n,
            n: m,
            colptr,
            rowval,
            nzval,
            transposed: false,
        }
    }

    // Position of physical `row` within physical column `col`, or the
    // position at which it would be inserted to keep the column sorted.
    pub(crate) fn find_in_column(&self, row: usize, col: usize) -> Result<usize, usize> {
        let first = self.colptr[col];
        let last = self.colptr[col + 1];
        self.rowval[first..last]
            .binary_search(&row)
            .map(|k| first + k)
            .map_err(|k| first + k)
    }
}

impl<T: FloatT> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShapedMatrix for SparseMatrix<T> {
    fn physical_size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::from_flag(self.transposed)
    }
}

impl<T> std::fmt::Display for SparseMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                match self.get_entry((i, j)) {
                    Some(v) => write!(f, " {:?}", v)?,
                    None => write!(f, " ⋅")?,
                }
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
