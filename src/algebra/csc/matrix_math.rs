#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::izip;

impl<T: FloatT> MatrixMath for SparseMatrix<T> {
    type T = T;

    //scalar mut operations
    fn scale(&mut self, c: T) {
        self.nzval.scale(c);
    }

    fn negate(&mut self) {
        self.nzval.negate();
    }

    fn norm(&self) -> T {
        self.nzval.norm()
    }

    fn norm_inf(&self) -> T {
        self.nzval.norm_inf()
    }
}

impl<T> SparseMatrix<T>
where
    T: FloatT,
{
    /// Returns a copy with all stored elements scaled by `c`
    pub fn scaled(&self, c: T) -> Self {
        let mut out = self.clone();
        out.scale(c);
        out
    }

    /// Copy in normal orientation, transposing the storage if needed.
    pub(crate) fn to_normal(&self, shape: MatrixShape) -> std::borrow::Cow<'_, Self> {
        match shape {
            MatrixShape::N => std::borrow::Cow::Borrowed(self),
            MatrixShape::T => std::borrow::Cow::Owned(self.physical_transpose()),
        }
    }
}

// ---------------------------------------------------------------------
// Sparse kernels.  Sparse operands are passed together with the
// orientation in which they should be read, as resolved by the caller.
// Outputs are always in normal orientation.
// ---------------------------------------------------------------------

/// C = αA + βB for normally oriented A and B of equal size.  Entries
/// present in either operand are present in C.
pub(crate) fn csc_axpby<T: FloatT>(
    A: &SparseMatrix<T>,
    B: &SparseMatrix<T>,
    α: T,
    β: T,
) -> SparseMatrix<T> {
    assert!(!A.is_transposed() && !B.is_transposed());
    assert_eq!(A.size(), B.size());

    let (m, n) = A.size();
    let mut C = SparseMatrix::zeros((m, n));
    C.rowval.reserve(A.nnz() + B.nnz());
    C.nzval.reserve(A.nnz() + B.nnz());

    for col in 0..n {
        let (mut pa, enda) = (A.colptr[col], A.colptr[col + 1]);
        let (mut pb, endb) = (B.colptr[col], B.colptr[col + 1]);

        // merge two sorted row lists
        while pa < enda || pb < endb {
            let ra = if pa < enda { A.rowval[pa] } else { usize::MAX };
            let rb = if pb < endb { B.rowval[pb] } else { usize::MAX };

            if ra < rb {
                C.rowval.push(ra);
                C.nzval.push(α * A.nzval[pa]);
                pa += 1;
            } else if rb < ra {
                C.rowval.push(rb);
                C.nzval.push(β * B.nzval[pb]);
                pb += 1;
            } else {
                C.rowval.push(ra);
                C.nzval.push(α * A.nzval[pa] + β * B.nzval[pb]);
                pa += 1;
                pb += 1;
            }
        }
        C.colptr[col + 1] = C.rowval.len();
    }
    C
}

/// C = A*B for normally oriented A and B (Gustavson's algorithm).
///
/// Entries of C with magnitude at or below `tol` are not stored.
pub(crate) fn csc_spgemm<T: FloatT>(A: &SparseMatrix<T>, B: &SparseMatrix<T>, tol: T) -> SparseMatrix<T> {
    assert!(!A.is_transposed() && !B.is_transposed());
    assert_eq!(A.n, B.m);

    let (m, n) = (A.m, B.n);
    let mut C = SparseMatrix::zeros((m, n));

    // dense accumulator for one column of C, with a marker
    // recording the last column in which each row was touched
    let mut work = vec![T::zero(); m];
    let mut mark = vec![usize::MAX; m];
    let mut rows: Vec<usize> = Vec::new();
    let mut pruned = 0usize;

    for j in 0..n {
        rows.clear();
        for pb in B.colptr[j]..B.colptr[j + 1] {
            let k = B.rowval[pb];
            let bkj = B.nzval[pb];
            for pa in A.colptr[k]..A.colptr[k + 1] {
                let i = A.rowval[pa];
                if mark[i] != j {
                    mark[i] = j;
                    work[i] = T::zero();
                    rows.push(i);
                }
                work[i] += A.nzval[pa] * bkj;
            }
        }

        rows.sort_unstable();
        for &i in &rows {
            if work[i].abs() > tol {
                C.rowval.push(i);
                C.nzval.push(work[i]);
            } else {
                pruned += 1;
            }
        }
        C.colptr[j + 1] = C.rowval.len();
    }

    if pruned > 0 {
        log::debug!("sparse product pruned {pruned} entries at tolerance {tol:e}");
    }
    C
}

/// C = A*B for a sparse A read in orientation `shapeA`, dense B
pub(crate) fn csc_dense_gemm<T: FloatT>(
    A: &SparseMatrix<T>,
    shapeA: MatrixShape,
    B: DenseOperand<'_, T>,
) -> DenseMatrix<T> {
    let (m, k) = match shapeA {
        MatrixShape::N => (A.m, A.n),
        MatrixShape::T => (A.n, A.m),
    };
    assert_eq!(k, B.m);
    let n = B.n;
    let mut C = DenseMatrix::zeros((m, n));

    match shapeA {
        // column j of C accumulates the columns of A weighted by B[:,j]
        MatrixShape::N => {
            for j in 0..n {
                let ccol = &mut C.data[(j * m)..((j + 1) * m)];
                for p in 0..k {
                    let bpj = B.get(p, j);
                    if bpj == T::zero() {
                        continue;
                    }
                    let rng = A.colptr[p]..A.colptr[p + 1];
                    for (&row, &v) in izip!(&A.rowval[rng.clone()], &A.nzval[rng]) {
                        ccol[row] += v * bpj;
                    }
                }
            }
        }
        // C[i,j] is the dot product of physical column i with B[:,j]
        MatrixShape::T => {
            for j in 0..n {
                for i in 0..m {
                    let rng = A.colptr[i]..A.colptr[i + 1];
                    let mut acc = T::zero();
                    for (&row, &v) in izip!(&A.rowval[rng.clone()], &A.nzval[rng]) {
                        acc += v * B.get(row, j);
                    }
                    C.data[i + j * m] = acc;
                }
            }
        }
    }
    C
}

/// C = A*B for a dense A and sparse B read in orientation `shapeB`
pub(crate) fn dense_csc_gemm<T: FloatT>(
    A: DenseOperand<'_, T>,
    B: &SparseMatrix<T>,
    shapeB: MatrixShape,
) -> DenseMatrix<T> {
    let (k, n) = match shapeB {
        MatrixShape::N => (B.m, B.n),
        MatrixShape::T => (B.n, B.m),
    };
    assert_eq!(A.n, k);
    let m = A.m;
    let mut C = DenseMatrix::zeros((m, n));

    // each stored entry v at logical (p, j) of B adds v*A[:,p] to C[:,j]
    for pcol in 0..B.n {
        let rng = B.colptr[pcol]..B.colptr[pcol + 1];
        for (&prow, &v) in izip!(&B.rowval[rng.clone()], &B.nzval[rng]) {
            let (p, j) = match shapeB {
                MatrixShape::N => (prow, pcol),
                MatrixShape::T => (pcol, prow),
            };
            let ccol = &mut C.data[(j * m)..((j + 1) * m)];
            for (i, c) in ccol.iter_mut().enumerate() {
                *c += A.get(i, p) * v;
            }
        }
    }
    C
}

/// Y += αX for a dense Y and a sparse X read in orientation `shapeX`
pub(crate) fn dense_add_csc<T: FloatT>(Y: &mut DenseMatrix<T>, X: &SparseMatrix<T>, shapeX: MatrixShape, α: T) {
    for pcol in 0..X.n {
        let rng = X.colptr[pcol]..X.colptr[pcol + 1];
        for (&prow, &v) in izip!(&X.rowval[rng.clone()], &X.nzval[rng]) {
            let idx = match shapeX {
                MatrixShape::N => (prow, pcol),
                MatrixShape::T => (pcol, prow),
            };
            Y[idx] += α * v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_matrix_3x3() -> SparseMatrix<f64> {
        // [1.  3.  5.]
        // [2.  0.  6.]
        // [0.  4.  7.]
        SparseMatrix::from_parts(
            3,
            3,
            vec![0, 2, 4, 7],
            vec![0, 1, 0, 2, 0, 1, 2],
            vec![1., 2., 3., 4., 5., 6., 7.],
        )
        .unwrap()
    }

    #[test]
    fn test_csc_axpby_merge() {
        let A = test_matrix_3x3();
        let B = SparseMatrix::identity(3);
        let C = csc_axpby(&A, &B, 1., -1.);
        assert!(C.check_format().is_ok());
        assert_eq!(C.nnz(), 8);
        assert_eq!(C.get_elem(1, 1), Ok(-1.));
        assert_eq!(C.get_elem(0, 0), Ok(0.));
        assert_eq!(C.get_elem(2, 2), Ok(6.));
    }

    #[test]
    fn test_spgemm_matches_dense() {
        let A = test_matrix_3x3();
        let C = csc_spgemm(&A, &A, 0.);
        assert!(C.check_format().is_ok());

        let D = A.to_dense();
        let mut DD = DenseMatrix::zeros((3, 3));
        dense_gemm(&mut DD, D.operand(), D.operand(), 1., 0.);
        assert_eq!(C.to_dense(), DD);
    }

    #[test]
    fn test_spgemm_prunes() {
        // [1 1] * [ 1]  = [0]
        //         [-1]
        let A = SparseMatrix::from_parts(1, 2, vec![0, 1, 2], vec![0, 0], vec![1., 1.]).unwrap();
        let B = SparseMatrix::from_parts(2, 1, vec![0, 2], vec![0, 1], vec![1., -1.]).unwrap();
        let C = csc_spgemm(&A, &B, 0.);
        assert_eq!(C.size(), (1, 1));
        assert_eq!(C.nnz(), 0);

        // a tolerance removes small entries
        let B = SparseMatrix::from_parts(2, 1, vec![0, 2], vec![0, 1], vec![1., -0.999]).unwrap();
        assert_eq!(csc_spgemm(&A, &B, 0.).nnz(), 1);
        assert_eq!(csc_spgemm(&A, &B, 1e-2).nnz(), 0);
    }

    #[test]
    fn test_mixed_kernels_all_orientations() {
        let A = test_matrix_3x3();
        let D = DenseMatrix::from(&[[1., 2., 0.], [-1., 0., 3.], [2., 2., 2.]]);

        for shapeA in [MatrixShape::N, MatrixShape::T] {
            for Dv in [D.clone(), D.transpose()] {
                let mut Ad = A.to_dense();
                if shapeA == MatrixShape::T {
                    Ad = Ad.transpose();
                }

                let mut expected = DenseMatrix::zeros((3, 3));
                dense_gemm(&mut expected, Ad.operand(), Dv.operand(), 1., 0.);
                assert_eq!(csc_dense_gemm(&A, shapeA, Dv.operand()), expected);

                let mut expected = DenseMatrix::zeros((3, 3));
                dense_gemm(&mut expected, Dv.operand(), Ad.operand(), 1., 0.);
                assert_eq!(dense_csc_gemm(Dv.operand(), &A, shapeA), expected);
            }
        }
    }

    #[test]
    fn test_dense_add_csc() {
        let A = test_matrix_3x3();
        let mut Y = DenseMatrix::<f64>::identity(3);
        dense_add_csc(&mut Y, &A, MatrixShape::T, 2.);
        assert_eq!(Y[(0, 1)], 4.);
        assert_eq!(Y[(1, 0)], 6.);
        assert_eq!(Y[(0, 0)], 3.);
    }
}
