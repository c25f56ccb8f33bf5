use super::FloatT;

/// Elementwise operations on the value buffers of matrices.
///
/// Implemented on slices of [`FloatT`](crate::algebra::FloatT), so that
/// the same kernels serve the column-major data of a
/// [`DenseMatrix`](crate::algebra::DenseMatrix) and the stored values of
/// a [`SparseMatrix`](crate::algebra::SparseMatrix).
pub trait VectorMath {
    type T;

    /// Apply an elementwise operation in place
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    fn scale(&mut self, c: Self::T) -> &mut Self;

    fn negate(&mut self) -> &mut Self;

    /// Dot product, accumulated pairwise
    fn dot(&self, y: &Self) -> Self::T;

    /// 2-norm
    fn norm(&self) -> Self::T;

    /// Infinity norm.  NaN if any element is NaN.
    fn norm_inf(&self) -> Self::T;

    /// `self = a*x + b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;
}

/// Matrix operations for matrices of [`FloatT`](crate::algebra::FloatT)
///
/// These act on the stored values only and are therefore
/// independent of the matrix orientation.
pub trait MatrixMath {
    type T: FloatT;

    /// Scales all stored elements by `c`
    fn scale(&mut self, c: Self::T);

    /// Negates all stored elements
    fn negate(&mut self);

    /// Frobenius norm
    fn norm(&self) -> Self::T;

    /// Largest absolute value of any stored element
    fn norm_inf(&self) -> Self::T;
}
