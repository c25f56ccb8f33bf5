#[cfg(feature = "serde")]
use crate::algebra::FloatT;
#[cfg(feature = "serde")]
use crate::algebra::persist::{DenseArchive, SparseArchive};
#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// All matrix representations store their values in column major
// order.  A matrix additionally carries a transpose flag, so that
// `A.transpose()` produces a matrix whose logical shape is swapped
// without relaying out its storage.

/// Dense matrix in column major format
///
/// The element at physical position `(r,c)` is stored at `data[r + c*m]`.
/// When `transposed` is set, the logical element `(i,j)` is read from the
/// physical position `(j,i)` and the logical shape is `(n,m)`.
///
/// __Example usage__ : To construct the 2 x 2 matrix
/// ```text
/// A = [1.  2.]
///     [3.  4.]
/// ```
///
/// ```
/// use hypermatrix::algebra::*;
///
/// let A = DenseMatrix::from(&[
///     [1., 2.], //
///     [3., 4.], //
/// ]);
///
/// assert_eq!(A.data(), &[1., 3., 2., 4.]);
/// assert_eq!(A.transpose().get_elem(0, 1), Ok(3.));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "DenseArchive<T>",
        into = "DenseArchive<T>",
        bound = "T: FloatT + Serialize + DeserializeOwned"
    )
)]
pub struct DenseMatrix<T = f64> {
    /// physical number of rows
    pub(crate) m: usize,
    /// physical number of columns
    pub(crate) n: usize,
    /// vector of data in column major format
    pub(crate) data: Vec<T>,
    /// logical orientation of the stored data
    pub(crate) transposed: bool,
}

/// Sparse matrix in standard Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 3 matrix
/// ```text
/// A = [1.  3.  5.]
///     [2.  0.  6.]
///     [0.  4.  7.]
/// ```
///
/// ```
/// use hypermatrix::algebra::SparseMatrix;
///
/// let A : SparseMatrix<f64> = SparseMatrix::from_parts(
///    3,                                // m
///    3,                                // n
///    vec![0, 2, 4, 7],                 //colptr
///    vec![0, 1, 0, 2, 0, 1, 2],        //rowval
///    vec![1., 2., 3., 4., 5., 6., 7.], //nzval
///  ).unwrap();
///
/// assert_eq!(A.nnz(), 7);
/// assert_eq!(A.get_elem(2, 1), Ok(4.));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SparseArchive<T>",
        into = "SparseArchive<T>",
        bound = "T: FloatT + Serialize + DeserializeOwned"
    )
)]
pub struct SparseMatrix<T = f64> {
    /// physical number of rows
    pub(crate) m: usize,
    /// physical number of columns
    pub(crate) n: usize,
    /// CSC format column pointer.
    ///
    /// This field has length `n+1`. The last entry corresponds
    /// to the number of nonzeros and agrees with the lengths
    /// of the `rowval` and `nzval` fields.
    pub(crate) colptr: Vec<usize>,
    /// vector of row indices, strictly increasing within each column
    pub(crate) rowval: Vec<usize>,
    /// vector of stored matrix elements
    pub(crate) nzval: Vec<T>,
    /// logical orientation of the stored data
    pub(crate) transposed: bool,
}

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

impl MatrixShape {
    pub(crate) fn from_flag(transposed: bool) -> Self {
        if transposed {
            MatrixShape::T
        } else {
            MatrixShape::N
        }
    }
}
