#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_4x4() -> SparseMatrix<f64> {
    // A =
    //[ 4.0  -1.0    ⋅     ⋅ ]
    //[-1.0   4.0  -1.0    ⋅ ]
    //[  ⋅   -1.0   4.0  -1.0]
    //[  ⋅     ⋅   -1.0   4.0]
    SparseMatrix::from_parts(
        4,
        4,
        vec![0, 2, 5, 8, 10],
        vec![0, 1, 0, 1, 2, 1, 2, 3, 2, 3],
        vec![4., -1., -1., 4., -1., -1., 4., -1., -1., 4.],
    )
    .unwrap()
}

#[test]
fn test_build_by_insertion_matches_from_parts() {
    // insert in an order that forces every kind of shift
    let A = test_matrix_4x4();
    let mut B = SparseMatrix::zeros((4, 4));
    for (row, col) in [(3, 3), (0, 0), (2, 3), (1, 1), (2, 1), (0, 1), (1, 0), (2, 2), (1, 2), (3, 2)] {
        B.set_elem(A.get_elem(row, col).unwrap(), row, col).unwrap();
        assert!(B.check_format().is_ok());
    }
    assert_eq!(A, B);
}

#[test]
fn test_dense_sparse_agree() {
    let A = test_matrix_4x4();
    let D = A.to_dense();
    assert_eq!(SparseMatrix::from_dense(&D), A);
    assert_eq!(D.trace(), Ok(16.));

    let x = DenseMatrix::from(&[[1.], [2.], [3.], [4.]]);
    assert_eq!(A.checked_mul(&x).unwrap(), D.checked_mul(&x).unwrap());
}

#[test]
fn test_symmetric_transpose() {
    let A = test_matrix_4x4();
    let At = A.transpose();

    // identical logically but not structurally
    assert!(At.is_transposed());
    assert_ne!(A, At);
    assert_eq!(A.to_dense(), At.to_dense());

    let mut Am = At.clone();
    Am.materialize();
    assert_eq!(Am, A);
}

#[test]
fn test_assign_ops_replay() {
    let mut A = test_matrix_4x4();
    let I = SparseMatrix::<f64>::identity(4);

    A -= &(&I * 4.);
    assert_eq!(A.nnz(), 10);
    assert_eq!(A.get_elem(2, 2), Ok(0.));
    assert!(A.check_format().is_ok());

    // sum picks up entries present in either operand
    let mut B = SparseMatrix::<f64>::zeros((4, 4));
    B.set_elem(1., 3, 0).unwrap();
    B += &A;
    assert_eq!(B.nnz(), 11);
    assert_eq!(B.get_elem(3, 0), Ok(1.));
    assert_eq!(B.get_elem(0, 1), Ok(-1.));
}

#[test]
fn test_sparse_product_structure() {
    let A = test_matrix_4x4();
    let C = &A * &A;
    assert!(C.check_format().is_ok());

    // pentadiagonal
    assert_eq!(C.nnz(), 14);
    assert_eq!(C.get_elem(0, 0), Ok(17.));
    assert_eq!(C.get_elem(1, 1), Ok(18.));
    assert_eq!(C.get_elem(0, 2), Ok(1.));
    assert_eq!(C.get_elem(0, 3), Ok(0.));
    assert_eq!(C.get_entry((0, 3)), None);
}

#[test]
fn test_norms_and_scaling() {
    let mut A = test_matrix_4x4();
    assert_eq!(A.norm_inf(), 4.);
    A *= -0.5;
    assert_eq!(A.norm_inf(), 2.);
    assert_eq!(A.get_elem(1, 0), Ok(0.5));
    assert_eq!((-&A).get_elem(1, 0), Ok(-0.5));
}
