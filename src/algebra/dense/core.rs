use crate::algebra::*;
use std::ops::{Index, IndexMut};

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// An empty 0 x 0 matrix
    pub fn new() -> Self {
        Self::zeros((0, 0))
    }

    /// An `m x n` matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self {
            m,
            n,
            data,
            transposed: false,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = DenseMatrix::zeros((n, n));
        for i in 0..n {
            mat[(i, i)] = T::one();
        }
        mat
    }

    /// Copies `src`, taken in column major order, into a new `m x n` matrix.
    pub fn from_slice(size: (usize, usize), src: &[T]) -> Result<Self, MatrixError> {
        Self::from_vec(src.to_vec(), size, false)
    }

    /// Copies `src`, taken in row major order, into a new `m x n` matrix.
    pub fn from_row_major(size: (usize, usize), src: &[T]) -> Result<Self, MatrixError> {
        let (m, n) = size;
        // row major m x n data is the column major layout of its n x m transpose
        let mut mat = Self::from_vec(src.to_vec(), (n, m), true)?;
        mat.materialize();
        Ok(mat)
    }

    /// Adopts `data` as the column major storage of an `m x n` matrix
    /// with the given orientation.
    pub fn from_vec(data: Vec<T>, size: (usize, usize), transposed: bool) -> Result<Self, MatrixError> {
        let (m, n) = size;
        if data.len() != m * n {
            return Err(MatrixError::DimensionMismatch {
                op: "from_vec",
                lhs: (m, n),
                rhs: (data.len(), 1),
            });
        }
        Ok(Self {
            m,
            n,
            data,
            transposed,
        })
    }

    /// Changes the physical shape to `m x n`.
    ///
    /// The leading values of the existing buffer are kept and any new
    /// storage is zero filled.  The result is not transposed.
    pub fn resize(&mut self, size: (usize, usize)) {
        let (m, n) = size;
        self.data.resize(m * n, T::zero());
        self.m = m;
        self.n = n;
        self.transposed = false;
    }

    /// Reads the logical element `(row, col)`
    pub fn get_elem(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.check_index(row, col)?;
        Ok(self[(row, col)])
    }

    /// Writes `value` to the logical element `(row, col)`
    pub fn set_elem(&mut self, value: T, row: usize, col: usize) -> Result<(), MatrixError> {
        self.check_index(row, col)?;
        self[(row, col)] = value;
        Ok(())
    }

    /// Returns a copy with the orientation flag toggled.
    ///
    /// The copy owns its storage, so later writes to either matrix are
    /// not visible through the other.
    pub fn transpose(&self) -> Self {
        Self {
            m: self.m,
            n: self.n,
            data: self.data.clone(),
            transposed: !self.transposed,
        }
    }

    /// Deep copy of `other` into `self`, including its orientation.
    pub fn assign(&mut self, other: &Self) {
        self.m = other.m;
        self.n = other.n;
        self.data.clone_from(&other.data);
        self.transposed = other.transposed;
    }

    /// Rewrites the storage so that the physical layout matches the
    /// logical one and clears the transpose flag.
    pub fn materialize(&mut self) {
        if !self.transposed {
            return;
        }
        let (m, n) = self.size();
        let mut data = Vec::with_capacity(m * n);
        for col in 0..n {
            for row in 0..m {
                data.push(self[(row, col)]);
            }
        }
        *self = Self {
            m,
            n,
            data,
            transposed: false,
        };
    }

    /// The column major storage buffer, orientation ignored
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy of the storage buffer in column major order
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// number of stored values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub(crate) fn check_index(&self, row: usize, col: usize) -> Result<(), MatrixError> {
        let (m, n) = self.size();
        if row >= m || col >= n {
            return Err(MatrixError::out_of_range(row, col, (m, n)));
        }
        Ok(())
    }

    // maps a logical index to a position in the storage buffer
    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        match self.shape() {
            MatrixShape::N => idx.0 + self.m * idx.1,
            MatrixShape::T => idx.1 + self.m * idx.0,
        }
    }
}

impl<T: FloatT> Default for DenseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ShapedMatrix for DenseMatrix<T> {
    fn physical_size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::from_flag(self.transposed)
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        let (m, n) = self.size();
        assert!(idx.0 < m && idx.1 < n);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let (m, n) = self.size();
        assert!(idx.0 < m && idx.1 < n);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

// construct from a row major array literal, i.e.
// DenseMatrix::from(&[[1., 2.], [3., 4.]])
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for DenseMatrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let mut mat = DenseMatrix::zeros((M, N));
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                mat[(r, c)] = v;
            }
        }
        mat
    }
}

impl<T> std::fmt::Display for DenseMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
