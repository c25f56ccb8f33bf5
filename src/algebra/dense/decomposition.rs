#![allow(non_snake_case)]

use crate::algebra::*;
use std::cmp::min;
use faer::linalg::solvers::{PartialPivLu, Qr, Svd};
use faer::{Mat, MatRef};

/// Dense factorizations computed by the [`faer`] backend.
///
/// A decomposition borrows the matrix it factors and stores the
/// computed factors as [`DenseMatrix`] values in normal orientation.
/// All factorizations act on the *logical* view of the attached matrix,
/// so that factoring `A.transpose()` factors Aᵀ.
///
/// Requests that cannot be served (no attached matrix, LU of a
/// non-square matrix) are logged and reported as errors, and leave any
/// previously computed results untouched.
///
/// ```
/// use hypermatrix::algebra::*;
///
/// let A = DenseMatrix::from(&[[4., 3.], [6., 3.]]);
/// let mut dec = DenseDecomposition::with_matrix(&A);
/// dec.compute_lu().unwrap();
///
/// let PA = dec.lu_p().checked_mul(&A).unwrap();
/// let LU = dec.lu_l().checked_mul(dec.lu_u()).unwrap();
/// assert!(PA.checked_sub(&LU).unwrap().norm() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DenseDecomposition<'a, T: FloatT = f64> {
    matrix: Option<&'a DenseMatrix<T>>,

    /// left singular vectors, rows x min(rows,cols)
    U: DenseMatrix<T>,
    /// singular values as a square diagonal matrix
    S: DenseMatrix<T>,
    /// right singular vectors, cols x min(rows,cols)
    V: DenseMatrix<T>,
    /// orthogonal QR factor, rows x rows
    Q: DenseMatrix<T>,
    /// unit lower, upper and row permutation factors with PA = LU
    L: DenseMatrix<T>,
    R: DenseMatrix<T>,
    P: DenseMatrix<T>,
}

impl<'a, T> Default for DenseDecomposition<'a, T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> DenseDecomposition<'a, T>
where
    T: FloatT,
{
    /// A decomposition with no attached matrix
    pub fn new() -> Self {
        Self {
            matrix: None,
            U: DenseMatrix::new(),
            S: DenseMatrix::new(),
            V: DenseMatrix::new(),
            Q: DenseMatrix::new(),
            L: DenseMatrix::new(),
            R: DenseMatrix::new(),
            P: DenseMatrix::new(),
        }
    }

    pub fn with_matrix(A: &'a DenseMatrix<T>) -> Self {
        let mut dec = Self::new();
        dec.matrix = Some(A);
        dec
    }

    /// Attaches a new matrix.  Previously computed factors are kept
    /// until the next successful computation replaces them.
    pub fn reset(&mut self, A: &'a DenseMatrix<T>) {
        self.matrix = Some(A);
    }

    /// Thin singular value decomposition A = U S Vᵀ
    pub fn compute_thin_svd(&mut self) -> Result<(), MatrixError> {
        let A = self.attached("thin SVD")?;
        let (m, n) = (A.nrows(), A.ncols());
        let k = min(m, n);

        let svd = Svd::new_thin(A.as_ref()).map_err(|e| {
            log::warn!("SVD of {m} x {n} matrix failed: {e:?}");
            MatrixError::BackendFailure { routine: "thin SVD" }
        })?;

        let s = svd.S().column_vector();
        let mut S = DenseMatrix::zeros((k, k));
        for i in 0..k {
            S[(i, i)] = s[i].as_T();
        }

        self.U = from_faer(svd.U());
        self.V = from_faer(svd.V());
        self.S = S;
        Ok(())
    }

    /// Householder QR decomposition, storing the full rows x rows factor Q
    pub fn compute_qr(&mut self) -> Result<(), MatrixError> {
        let A = self.attached("QR")?;
        let qr = Qr::new(A.as_ref());
        self.Q = from_faer(qr.compute_Q().as_ref());
        Ok(())
    }

    /// LU decomposition with partial pivoting, PA = LU.
    ///
    /// Only square matrices are accepted.
    pub fn compute_lu(&mut self) -> Result<(), MatrixError> {
        let A = self.attached("LU")?;
        let (m, n) = (A.nrows(), A.ncols());
        if m != n {
            log::warn!("LU factorization requires a square matrix, found {m} x {n}");
            return Err(MatrixError::SquareMatrixRequired { rows: m, cols: n });
        }

        let lu = PartialPivLu::new(A.as_ref());

        // read only the triangles, the unit diagonal of L is implicit
        let (Lf, Uf) = (lu.L(), lu.U());
        let mut L = DenseMatrix::identity(n);
        let mut R = DenseMatrix::zeros((n, n));
        for j in 0..n {
            for i in 0..n {
                if i > j {
                    L[(i, j)] = Lf[(i, j)].as_T();
                } else {
                    R[(i, j)] = Uf[(i, j)].as_T();
                }
            }
        }

        // row i of PA is row perm[i] of A
        let (perm, _) = lu.P().arrays();
        let mut P = DenseMatrix::zeros((n, n));
        for (i, &p) in perm.iter().enumerate() {
            P[(i, p)] = T::one();
        }

        self.L = L;
        self.R = R;
        self.P = P;
        Ok(())
    }

    pub fn u(&self) -> &DenseMatrix<T> {
        &self.U
    }

    /// singular values on the diagonal of a min(rows,cols) square matrix
    pub fn singular_values(&self) -> &DenseMatrix<T> {
        &self.S
    }

    pub fn v(&self) -> &DenseMatrix<T> {
        &self.V
    }

    pub fn q(&self) -> &DenseMatrix<T> {
        &self.Q
    }

    pub fn lu_l(&self) -> &DenseMatrix<T> {
        &self.L
    }

    pub fn lu_u(&self) -> &DenseMatrix<T> {
        &self.R
    }

    pub fn lu_p(&self) -> &DenseMatrix<T> {
        &self.P
    }

    // converts the attached matrix to backend storage
    fn attached(&self, routine: &str) -> Result<Mat<f64>, MatrixError> {
        match self.matrix {
            Some(A) => Ok(to_faer(A)),
            None => {
                log::warn!("{routine} requested with no attached matrix");
                Err(MatrixError::UninitializedOperand)
            }
        }
    }
}

// the backend works in f64, values are converted on the way in and out

fn to_faer<T: FloatT>(A: &DenseMatrix<T>) -> Mat<f64> {
    let (m, n) = A.size();
    Mat::from_fn(m, n, |i, j| A[(i, j)].to_f64().unwrap_or(f64::NAN))
}

fn from_faer<T: FloatT>(M: MatRef<'_, f64>) -> DenseMatrix<T> {
    let (m, n) = (M.nrows(), M.ncols());
    let mut out = DenseMatrix::zeros((m, n));
    for j in 0..n {
        for i in 0..m {
            out[(i, j)] = M[(i, j)].as_T();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized() {
        let mut dec = DenseDecomposition::<f64>::new();
        assert_eq!(dec.compute_thin_svd(), Err(MatrixError::UninitializedOperand));
        assert_eq!(dec.compute_qr(), Err(MatrixError::UninitializedOperand));
        assert_eq!(dec.compute_lu(), Err(MatrixError::UninitializedOperand));
        assert!(dec.u().is_empty());
    }

    #[test]
    fn test_svd_shapes() {
        let mut A = DenseMatrix::<f64>::zeros((5, 3));
        A.randomize(3);
        let mut dec = DenseDecomposition::with_matrix(&A);
        dec.compute_thin_svd().unwrap();
        assert_eq!(dec.u().size(), (5, 3));
        assert_eq!(dec.singular_values().size(), (3, 3));
        assert_eq!(dec.v().size(), (3, 3));

        // the transposed view is factored as a 3 x 5 matrix
        let At = A.transpose();
        dec.reset(&At);
        dec.compute_thin_svd().unwrap();
        assert_eq!(dec.u().size(), (3, 3));
        assert_eq!(dec.v().size(), (5, 3));
    }

    #[test]
    fn test_lu_non_square_keeps_results() {
        let A = DenseMatrix::from(&[[2., 1.], [1., 3.]]);
        let B = DenseMatrix::<f64>::zeros((2, 3));

        let mut dec = DenseDecomposition::with_matrix(&A);
        dec.compute_lu().unwrap();
        let L = dec.lu_l().clone();

        dec.reset(&B);
        assert_eq!(
            dec.compute_lu(),
            Err(MatrixError::SquareMatrixRequired { rows: 2, cols: 3 })
        );
        assert_eq!(dec.lu_l(), &L);
    }
}
