//! Shape checked arithmetic between dense and sparse matrices.
//!
//! Every binary operation first validates the *logical* shapes of its
//! operands, then resolves their combined [`Orientation`] once and hands
//! it to a single kernel that reads each operand in its own orientation.
//! Results are always returned in normal orientation.  Expressions
//! involving a dense operand produce a [`DenseMatrix`], and purely
//! sparse expressions produce a [`SparseMatrix`].
//!
//! The [`CheckedArithmetic`] traits report incompatible shapes as
//! [`MatrixError::DimensionMismatch`].  The `std::ops` operators on
//! references delegate to them and panic on error.

use crate::algebra::*;

mod checked;
mod std_ops;

/// Orientations of the two operands of a binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub lhs: MatrixShape,
    pub rhs: MatrixShape,
}

impl Orientation {
    pub fn of<A, B>(lhs: &A, rhs: &B) -> Self
    where
        A: ShapedMatrix + ?Sized,
        B: ShapedMatrix + ?Sized,
    {
        Self {
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        }
    }
}

/// Shape checked `+`, `-` and `*` returning a new matrix.
pub trait CheckedArithmetic<Rhs: ?Sized = Self> {
    type Output;

    /// `self + rhs`, requiring equal logical shapes
    fn checked_add(&self, rhs: &Rhs) -> Result<Self::Output, MatrixError>;

    /// `self - rhs`, requiring equal logical shapes
    fn checked_sub(&self, rhs: &Rhs) -> Result<Self::Output, MatrixError>;

    /// matrix product `self * rhs`, requiring `self.ncols() == rhs.nrows()`
    fn checked_mul(&self, rhs: &Rhs) -> Result<Self::Output, MatrixError>;
}

/// Shape checked `+=` and `-=`.
///
/// On error the target is left unchanged.
pub trait CheckedArithmeticAssign<Rhs: ?Sized = Self> {
    fn checked_add_assign(&mut self, rhs: &Rhs) -> Result<(), MatrixError>;

    fn checked_sub_assign(&mut self, rhs: &Rhs) -> Result<(), MatrixError>;
}

pub(crate) fn check_additive<A, B>(op: &'static str, lhs: &A, rhs: &B) -> Result<(), MatrixError>
where
    A: ShapedMatrix + ?Sized,
    B: ShapedMatrix + ?Sized,
{
    if lhs.size() != rhs.size() {
        return Err(MatrixError::DimensionMismatch {
            op,
            lhs: lhs.size(),
            rhs: rhs.size(),
        });
    }
    Ok(())
}

pub(crate) fn check_product<A, B>(lhs: &A, rhs: &B) -> Result<(), MatrixError>
where
    A: ShapedMatrix + ?Sized,
    B: ShapedMatrix + ?Sized,
{
    if lhs.ncols() != rhs.nrows() {
        return Err(MatrixError::DimensionMismatch {
            op: "mul",
            lhs: lhs.size(),
            rhs: rhs.size(),
        });
    }
    Ok(())
}
