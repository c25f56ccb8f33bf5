//! __hypermatrix__ provides dense and compressed sparse column matrices
//! with a lazy transpose flag, and shape checked arithmetic across both
//! types.
//!
//! ```
//! use hypermatrix::algebra::*;
//!
//! let A = DenseMatrix::from(&[
//!     [1., 2.], //
//!     [3., 4.], //
//! ]);
//!
//! let mut S = SparseMatrix::<f64>::zeros((2, 2));
//! S.set_elem(1., 0, 0).unwrap();
//! S.set_elem(1., 1, 1).unwrap();
//!
//! // dense results from mixed expressions
//! assert_eq!(&A * &S, A);
//!
//! // transposes are resolved by every operator
//! let AtA = A.transpose().checked_mul(&A).unwrap();
//! assert_eq!(AtA, DenseMatrix::from(&[[10., 14.], [14., 20.]]));
//!
//! // incompatible shapes are reported rather than computed
//! let B = DenseMatrix::<f64>::zeros((3, 2));
//! assert!(matches!(
//!     A.checked_mul(&B),
//!     Err(MatrixError::DimensionMismatch { .. })
//! ));
//! ```
//!
//! ## Features
//!
//! * __serde__ (default): serialization of both matrix types and
//!   JSON archives through [`algebra::MatrixReadWrite`].
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod settings;
