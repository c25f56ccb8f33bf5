#![allow(non_snake_case)]

use super::*;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// Operator overloads on references.  Shape errors panic with the
// message of the corresponding `MatrixError`; use the checked
// versions to handle them instead.

macro_rules! impl_binary_ops {
    ($Lhs:ident, $Rhs:ident, $Out:ident) => {
        impl<'a, T: FloatT> Add<&'a $Rhs<T>> for &'a $Lhs<T> {
            type Output = $Out<T>;
            fn add(self, rhs: &'a $Rhs<T>) -> $Out<T> {
                self.checked_add(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<'a, T: FloatT> Sub<&'a $Rhs<T>> for &'a $Lhs<T> {
            type Output = $Out<T>;
            fn sub(self, rhs: &'a $Rhs<T>) -> $Out<T> {
                self.checked_sub(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<'a, T: FloatT> Mul<&'a $Rhs<T>> for &'a $Lhs<T> {
            type Output = $Out<T>;
            fn mul(self, rhs: &'a $Rhs<T>) -> $Out<T> {
                self.checked_mul(rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_binary_ops!(DenseMatrix, DenseMatrix, DenseMatrix);
impl_binary_ops!(SparseMatrix, SparseMatrix, SparseMatrix);
impl_binary_ops!(DenseMatrix, SparseMatrix, DenseMatrix);
impl_binary_ops!(SparseMatrix, DenseMatrix, DenseMatrix);

macro_rules! impl_assign_ops {
    ($Lhs:ident, $Rhs:ident) => {
        impl<'a, T: FloatT> AddAssign<&'a $Rhs<T>> for $Lhs<T> {
            fn add_assign(&mut self, rhs: &'a $Rhs<T>) {
                self.checked_add_assign(rhs)
                    .unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl<'a, T: FloatT> SubAssign<&'a $Rhs<T>> for $Lhs<T> {
            fn sub_assign(&mut self, rhs: &'a $Rhs<T>) {
                self.checked_sub_assign(rhs)
                    .unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_assign_ops!(DenseMatrix, DenseMatrix);
impl_assign_ops!(DenseMatrix, SparseMatrix);
impl_assign_ops!(SparseMatrix, SparseMatrix);

// scaling and negation never fail

macro_rules! impl_scalar_ops {
    ($Mat:ident) => {
        impl<T: FloatT> Mul<T> for &$Mat<T> {
            type Output = $Mat<T>;
            fn mul(self, c: T) -> $Mat<T> {
                self.scaled(c)
            }
        }

        impl<T: FloatT> MulAssign<T> for $Mat<T> {
            fn mul_assign(&mut self, c: T) {
                self.scale(c);
            }
        }

        impl<T: FloatT> Neg for &$Mat<T> {
            type Output = $Mat<T>;
            fn neg(self) -> $Mat<T> {
                let mut out = self.clone();
                out.negate();
                out
            }
        }
    };
}

impl_scalar_ops!(DenseMatrix);
impl_scalar_ops!(SparseMatrix);

// c * &A for the primitive float types
macro_rules! impl_left_scalar_mul {
    ($ty:ty) => {
        impl Mul<&DenseMatrix<$ty>> for $ty {
            type Output = DenseMatrix<$ty>;
            fn mul(self, A: &DenseMatrix<$ty>) -> DenseMatrix<$ty> {
                A.scaled(self)
            }
        }

        impl Mul<&SparseMatrix<$ty>> for $ty {
            type Output = SparseMatrix<$ty>;
            fn mul(self, A: &SparseMatrix<$ty>) -> SparseMatrix<$ty> {
                A.scaled(self)
            }
        }
    };
}

impl_left_scalar_mul!(f32);
impl_left_scalar_mul!(f64);
