#![allow(non_snake_case)]
use hypermatrix::algebra::*;

// a collection of tests to ensure that operands of
// incompatible dimension are rejected without side effects

fn dim_check_data() -> (DenseMatrix<f64>, DenseMatrix<f64>, SparseMatrix<f64>, SparseMatrix<f64>) {
    let A = DenseMatrix::<f64>::zeros((3, 4));
    let B = DenseMatrix::<f64>::zeros((4, 2));
    let S = SparseMatrix::<f64>::spalloc((3, 4), 0);
    let R = SparseMatrix::<f64>::spalloc((4, 2), 0);
    (A, B, S, R)
}

#[test]
fn dim_check_working() {
    // all of these are compatible.  Following checks
    // vary one of the sizes to test the dimension checks
    let (A, B, S, R) = dim_check_data();

    assert_eq!(A.checked_mul(&B).unwrap().size(), (3, 2));
    assert_eq!(A.checked_mul(&R).unwrap().size(), (3, 2));
    assert_eq!(S.checked_mul(&B).unwrap().size(), (3, 2));
    assert_eq!(S.checked_mul(&R).unwrap().size(), (3, 2));
    assert_eq!(A.checked_add(&S).unwrap().size(), (3, 4));
    assert_eq!(S.checked_sub(&A).unwrap().size(), (3, 4));
}

#[test]
fn dim_check_bad_product() {
    let (A, B, S, R) = dim_check_data();
    let err = MatrixError::DimensionMismatch {
        op: "mul",
        lhs: (4, 2),
        rhs: (3, 4),
    };

    assert_eq!(B.checked_mul(&A), Err(err.clone()));
    assert_eq!(B.checked_mul(&S), Err(err.clone()));
    assert_eq!(R.checked_mul(&A), Err(err.clone()));
    assert_eq!(R.checked_mul(&S), Err(err));
}

#[test]
fn dim_check_bad_sum() {
    let (A, B, S, R) = dim_check_data();

    assert!(matches!(
        A.checked_add(&B),
        Err(MatrixError::DimensionMismatch { op: "add", .. })
    ));
    assert!(matches!(
        S.checked_sub(&R),
        Err(MatrixError::DimensionMismatch { op: "sub", .. })
    ));
    assert!(A.checked_add(&R).is_err());
    assert!(R.checked_sub(&A).is_err());
}

#[test]
fn dim_check_transposed_operands() {
    // logical shapes decide compatibility
    let (A, B, S, R) = dim_check_data();

    assert_eq!(B.transpose().checked_mul(&A.transpose()).unwrap().size(), (2, 3));
    assert_eq!(R.transpose().checked_mul(&S.transpose()).unwrap().size(), (2, 3));
    assert!(B.transpose().checked_add(&DenseMatrix::zeros((2, 4))).is_ok());
    assert!(A.checked_add(&S.transpose()).is_err());
}

#[test]
fn dim_check_assign_leaves_target() {
    let (_A, B, S, R) = dim_check_data();

    let mut A = DenseMatrix::from(&[[1., 2., 3., 4.]; 3]);
    let before = A.clone();
    assert!(A.checked_add_assign(&B).is_err());
    assert!(A.checked_sub_assign(&R).is_err());
    assert_eq!(A, before);

    let mut S = S;
    S.set_elem(1., 2, 3).unwrap();
    let before = S.clone();
    assert!(S.checked_add_assign(&R).is_err());
    assert_eq!(S, before);
}

#[test]
fn dim_check_trace() {
    let (A, ..) = dim_check_data();
    assert_eq!(A.trace(), Err(MatrixError::SquareMatrixRequired { rows: 3, cols: 4 }));
    assert!(A.transpose().trace().is_err());
}

#[test]
#[should_panic]
fn dim_check_operator_panics() {
    let (A, B, ..) = dim_check_data();
    let _ = &A + &B;
}

#[test]
#[should_panic]
fn dim_check_assign_operator_panics() {
    let (.., mut R) = dim_check_data();
    R += &SparseMatrix::identity(2);
}
