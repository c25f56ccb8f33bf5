#![allow(non_snake_case)]
use hypermatrix::algebra::*;

fn test_matrix(size: (usize, usize), seed: u64) -> DenseMatrix<f64> {
    let mut A = DenseMatrix::zeros(size);
    A.randomize(seed);
    A
}

fn assert_near(A: &DenseMatrix<f64>, B: &DenseMatrix<f64>) {
    assert_eq!(A.size(), B.size());
    assert!(A.checked_sub(B).unwrap().norm_inf() < 1e-10);
}

#[test]
fn decomposition_svd() {
    for A in [test_matrix((5, 3), 1), test_matrix((3, 5), 2), test_matrix((4, 6), 3).transpose()] {
        let mut dec = DenseDecomposition::with_matrix(&A);
        dec.compute_thin_svd().unwrap();

        let k = usize::min(A.nrows(), A.ncols());
        let (U, S, V) = (dec.u(), dec.singular_values(), dec.v());
        assert_eq!(U.size(), (A.nrows(), k));
        assert_eq!(S.size(), (k, k));
        assert_eq!(V.size(), (A.ncols(), k));

        // orthonormal columns
        assert_near(&U.transpose().checked_mul(U).unwrap(), &DenseMatrix::identity(k));
        assert_near(&V.transpose().checked_mul(V).unwrap(), &DenseMatrix::identity(k));

        // non-negative, non-increasing
        let σ = S.get_diagonal(0).unwrap();
        for i in 1..k {
            assert!(σ[(i, 0)] <= σ[(i - 1, 0)]);
        }
        assert!(σ[(k - 1, 0)] >= 0.);

        // U S Vᵀ = A
        let USVt = U.checked_mul(S).unwrap().checked_mul(&V.transpose()).unwrap();
        assert_near(&USVt, &A);
    }
}

#[test]
fn decomposition_qr() {
    let A = test_matrix((5, 3), 4);
    let mut dec = DenseDecomposition::with_matrix(&A);
    dec.compute_qr().unwrap();

    let Q = dec.q();
    assert_eq!(Q.size(), (5, 5));
    assert_near(&Q.transpose().checked_mul(Q).unwrap(), &DenseMatrix::identity(5));
    assert_near(&Q.checked_mul(&Q.transpose()).unwrap(), &DenseMatrix::identity(5));
}

#[test]
fn decomposition_lu() {
    for A in [test_matrix((4, 4), 5), test_matrix((4, 4), 6).transpose()] {
        let mut dec = DenseDecomposition::with_matrix(&A);
        dec.compute_lu().unwrap();

        let (L, U, P) = (dec.lu_l(), dec.lu_u(), dec.lu_p());
        for i in 0..4 {
            assert_eq!(L[(i, i)], 1.);
            for j in (i + 1)..4 {
                assert_eq!(L[(i, j)], 0.);
                assert_eq!(U[(j, i)], 0.);
            }
        }

        // P is a permutation
        assert_near(&P.checked_mul(&P.transpose()).unwrap(), &DenseMatrix::identity(4));

        let PA = P.checked_mul(&A).unwrap();
        let LU = L.checked_mul(U).unwrap();
        assert_near(&PA, &LU);
    }
}

#[test]
fn decomposition_lu_requires_square() {
    let A = test_matrix((3, 4), 7);
    let mut dec = DenseDecomposition::with_matrix(&A);
    assert_eq!(
        dec.compute_lu(),
        Err(MatrixError::SquareMatrixRequired { rows: 3, cols: 4 })
    );

    // other factorizations still work on the same matrix
    assert!(dec.compute_thin_svd().is_ok());
    assert!(dec.compute_qr().is_ok());
}

#[test]
fn decomposition_uninitialized() {
    let A = DenseMatrix::<f64>::identity(3);
    let mut dec = DenseDecomposition::<f64>::new();
    assert_eq!(dec.compute_thin_svd(), Err(MatrixError::UninitializedOperand));
    assert_eq!(dec.compute_qr(), Err(MatrixError::UninitializedOperand));
    assert_eq!(dec.compute_lu(), Err(MatrixError::UninitializedOperand));

    // attaching a matrix later
    dec.reset(&A);
    dec.compute_lu().unwrap();
    assert_eq!(dec.lu_u(), &A);
}
