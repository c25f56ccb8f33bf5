//! Dense and sparse matrix storage and arithmetic.
//!
//! The two matrix types are [`DenseMatrix`], stored in column major
//! order, and [`SparseMatrix`], stored in compressed sparse column
//! format.  Both carry a transpose flag, and every accessor and
//! arithmetic operation works on the *logical* (transpose aware)
//! shape reported by [`ShapedMatrix`].
//!
//! Arithmetic between any combination of the two types is provided
//! through the [`CheckedArithmetic`] traits and the standard operators
//! on references.  Dense factorizations are available through
//! [`DenseDecomposition`].

// Matrix variables are named A, B, C etc throughout
#![allow(non_snake_case)]

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

// matrix implementations
mod csc;
mod dense;
pub(crate) use csc::*;
pub use dense::*;

// arithmetic between matrix types
mod ops;
pub use ops::*;

#[cfg(feature = "serde")]
mod persist;
#[cfg(feature = "serde")]
pub use persist::*;

#[cfg(test)]
mod tests;
