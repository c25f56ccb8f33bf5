use crate::algebra::MatrixShape;

/// Shape information common to dense and sparse matrices.
///
/// Implementors report their *physical* storage dimensions and their
/// orientation.  The *logical* dimensions seen by every element accessor
/// and arithmetic operation are derived from those two.
pub trait ShapedMatrix {
    /// (rows, cols) of the underlying storage, orientation ignored
    fn physical_size(&self) -> (usize, usize);
    /// orientation of the stored data
    fn shape(&self) -> MatrixShape;

    /// logical number of rows
    fn nrows(&self) -> usize {
        self.size().0
    }
    /// logical number of columns
    fn ncols(&self) -> usize {
        self.size().1
    }
    /// logical (rows, cols)
    fn size(&self) -> (usize, usize) {
        let (m, n) = self.physical_size();
        match self.shape() {
            MatrixShape::N => (m, n),
            MatrixShape::T => (n, m),
        }
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
    fn is_transposed(&self) -> bool {
        self.shape() == MatrixShape::T
    }
}
