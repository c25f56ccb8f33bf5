#![allow(non_snake_case)]

use super::*;
use crate::settings::Settings;

// ---------------------------------------------------------------------
// dense op dense -> dense
// ---------------------------------------------------------------------

// C = A + βB in normal orientation
fn dense_combine<T: FloatT>(A: &DenseMatrix<T>, B: &DenseMatrix<T>, β: T) -> DenseMatrix<T> {
    let mut C = DenseMatrix::zeros(A.size());
    dense_axpby(&mut C, A.operand(), T::one(), T::zero());
    dense_axpby(&mut C, B.operand(), β, T::one());
    C
}

impl<T: FloatT> CheckedArithmetic for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn checked_add(&self, rhs: &Self) -> Result<Self::Output, MatrixError> {
        check_additive("add", self, rhs)?;
        Ok(dense_combine(self, rhs, T::one()))
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self::Output, MatrixError> {
        check_additive("sub", self, rhs)?;
        Ok(dense_combine(self, rhs, -T::one()))
    }

    fn checked_mul(&self, rhs: &Self) -> Result<Self::Output, MatrixError> {
        check_product(self, rhs)?;
        let mut C = DenseMatrix::zeros((self.nrows(), rhs.ncols()));
        dense_gemm(&mut C, self.operand(), rhs.operand(), T::one(), T::zero());
        Ok(C)
    }
}

impl<T: FloatT> CheckedArithmeticAssign for DenseMatrix<T> {
    fn checked_add_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        check_additive("add_assign", self, rhs)?;
        self.materialize();
        dense_axpby(self, rhs.operand(), T::one(), T::one());
        Ok(())
    }

    fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        check_additive("sub_assign", self, rhs)?;
        self.materialize();
        dense_axpby(self, rhs.operand(), -T::one(), T::one());
        Ok(())
    }
}

// ---------------------------------------------------------------------
// sparse op sparse -> sparse
// ---------------------------------------------------------------------

impl<T: FloatT> CheckedArithmetic for SparseMatrix<T> {
    type Output = SparseMatrix<T>;

    fn checked_add(&self, rhs: &Self) -> Result<Self::Output, MatrixError> {
        check_additive("add", self, rhs)?;
        let o = Orientation::of(self, rhs);
        let (A, B) = (self.to_normal(o.lhs), rhs.to_normal(o.rhs));
        Ok(csc_axpby(&A, &B, T::one(), T::one()))
    }

    fn checked_sub(&self, rhs: &Self) -> Result<Self::Output, MatrixError> {
        check_additive("sub", self, rhs)?;
        let o = Orientation::of(self, rhs);
        let (A, B) = (self.to_normal(o.lhs), rhs.to_normal(o.rhs));
        Ok(csc_axpby(&A, &B, T::one(), -T::one()))
    }

    /// Sparse product with exact zeros removed from the result
    fn checked_mul(&self, rhs: &Self) -> Result<Self::Output, MatrixError> {
        self.checked_mul_with(rhs, &Settings::default())
    }
}

impl<T: FloatT> SparseMatrix<T> {
    /// Sparse product, dropping entries of magnitude at or below
    /// `settings.prune_tolerance`.
    ///
    /// The settings are validated first, since their fields may have been
    /// changed after construction.
    pub fn checked_mul_with(&self, rhs: &Self, settings: &Settings<T>) -> Result<Self, MatrixError> {
        settings.validate()?;
        check_product(self, rhs)?;
        let o = Orientation::of(self, rhs);
        let (A, B) = (self.to_normal(o.lhs), rhs.to_normal(o.rhs));
        Ok(csc_spgemm(&A, &B, settings.prune_tolerance))
    }

    // self = self + βB, rebuilding the structure of self by
    // inserting every entry of the result one at a time
    fn replay_axpby(&mut self, rhs: &Self, β: T) -> Result<(), MatrixError> {
        let o = Orientation::of(self, rhs);
        let C = {
            let (A, B) = (self.to_normal(o.lhs), rhs.to_normal(o.rhs));
            csc_axpby(&A, &B, T::one(), β)
        };

        self.clear();
        self.reserve(C.nnz());
        for col in 0..C.n {
            for ptr in C.colptr[col]..C.colptr[col + 1] {
                self.set_elem(C.nzval[ptr], C.rowval[ptr], col)?;
            }
        }
        log::debug!("replayed {} entries into {:?} sparse matrix", C.nnz(), self.size());
        Ok(())
    }
}

impl<T: FloatT> CheckedArithmeticAssign for SparseMatrix<T> {
    fn checked_add_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        check_additive("add_assign", self, rhs)?;
        self.replay_axpby(rhs, T::one())
    }

    fn checked_sub_assign(&mut self, rhs: &Self) -> Result<(), MatrixError> {
        check_additive("sub_assign", self, rhs)?;
        self.replay_axpby(rhs, -T::one())
    }
}

// ---------------------------------------------------------------------
// mixed dense / sparse -> dense
// ---------------------------------------------------------------------

// normally oriented copy of βD
fn dense_scaled_copy<T: FloatT>(D: &DenseMatrix<T>, β: T) -> DenseMatrix<T> {
    let mut C = DenseMatrix::zeros(D.size());
    dense_axpby(&mut C, D.operand(), β, T::zero());
    C
}

impl<T: FloatT> CheckedArithmetic<SparseMatrix<T>> for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn checked_add(&self, rhs: &SparseMatrix<T>) -> Result<Self::Output, MatrixError> {
        check_additive("add", self, rhs)?;
        let o = Orientation::of(self, rhs);
        let mut C = dense_scaled_copy(self, T::one());
        dense_add_csc(&mut C, rhs, o.rhs, T::one());
        Ok(C)
    }

    fn checked_sub(&self, rhs: &SparseMatrix<T>) -> Result<Self::Output, MatrixError> {
        check_additive("sub", self, rhs)?;
        let o = Orientation::of(self, rhs);
        let mut C = dense_scaled_copy(self, T::one());
        dense_add_csc(&mut C, rhs, o.rhs, -T::one());
        Ok(C)
    }

    fn checked_mul(&self, rhs: &SparseMatrix<T>) -> Result<Self::Output, MatrixError> {
        check_product(self, rhs)?;
        let o = Orientation::of(self, rhs);
        Ok(dense_csc_gemm(self.operand(), rhs, o.rhs))
    }
}

impl<T: FloatT> CheckedArithmetic<DenseMatrix<T>> for SparseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn checked_add(&self, rhs: &DenseMatrix<T>) -> Result<Self::Output, MatrixError> {
        check_additive("add", self, rhs)?;
        let o = Orientation::of(self, rhs);
        let mut C = dense_scaled_copy(rhs, T::one());
        dense_add_csc(&mut C, self, o.lhs, T::one());
        Ok(C)
    }

    fn checked_sub(&self, rhs: &DenseMatrix<T>) -> Result<Self::Output, MatrixError> {
        check_additive("sub", self, rhs)?;
        let o = Orientation::of(self, rhs);
        let mut C = dense_scaled_copy(rhs, -T::one());
        dense_add_csc(&mut C, self, o.lhs, T::one());
        Ok(C)
    }

    fn checked_mul(&self, rhs: &DenseMatrix<T>) -> Result<Self::Output, MatrixError> {
        check_product(self, rhs)?;
        let o = Orientation::of(self, rhs);
        Ok(csc_dense_gemm(self, o.lhs, rhs.operand()))
    }
}

impl<T: FloatT> CheckedArithmeticAssign<SparseMatrix<T>> for DenseMatrix<T> {
    fn checked_add_assign(&mut self, rhs: &SparseMatrix<T>) -> Result<(), MatrixError> {
        check_additive("add_assign", self, rhs)?;
        self.materialize();
        dense_add_csc(self, rhs, rhs.shape(), T::one());
        Ok(())
    }

    fn checked_sub_assign(&mut self, rhs: &SparseMatrix<T>) -> Result<(), MatrixError> {
        check_additive("sub_assign", self, rhs)?;
        self.materialize();
        dense_add_csc(self, rhs, rhs.shape(), -T::one());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dense_product() {
        let A = DenseMatrix::from(&[[1., 2.], [3., 4.]]);
        let C = A.checked_mul(&A).unwrap();
        assert_eq!(C, DenseMatrix::from(&[[7., 10.], [15., 22.]]));
        assert!(!C.is_transposed());
    }

    #[test]
    fn test_dense_mismatch() {
        let A = DenseMatrix::<f64>::zeros((2, 3));
        let B = DenseMatrix::<f64>::zeros((2, 3));
        assert_eq!(
            A.checked_mul(&B),
            Err(MatrixError::DimensionMismatch {
                op: "mul",
                lhs: (2, 3),
                rhs: (2, 3)
            })
        );
        // the transpose makes the product valid
        assert_eq!(A.checked_mul(&B.transpose()).unwrap().size(), (2, 2));
        assert_eq!(A.transpose().checked_mul(&B).unwrap().size(), (3, 3));

        assert!(A.checked_add(&B.transpose()).is_err());
    }

    #[test]
    fn test_add_assign_unchanged_on_error() {
        let mut A = DenseMatrix::from(&[[1., 2.], [3., 4.]]).transpose();
        let before = A.clone();
        assert!(A.checked_add_assign(&DenseMatrix::zeros((3, 2))).is_err());
        assert_eq!(A, before);

        let mut S = SparseMatrix::<f64>::identity(2);
        assert!(S.checked_sub_assign(&SparseMatrix::zeros((2, 3))).is_err());
        assert_eq!(S, SparseMatrix::identity(2));
    }

    #[test]
    fn test_sparse_replay_transposed_target() {
        // self is read logically in both orientations
        let mut A = SparseMatrix::<f64>::zeros((2, 3)).transpose();
        A.set_elem(1., 2, 0).unwrap();

        let mut B = SparseMatrix::<f64>::zeros((3, 2));
        B.set_elem(2., 0, 1).unwrap();
        B.set_elem(3., 2, 0).unwrap();

        A.checked_add_assign(&B).unwrap();
        assert!(A.is_transposed());
        assert!(A.check_format().is_ok());
        assert_eq!(A.get_elem(2, 0), Ok(4.));
        assert_eq!(A.get_elem(0, 1), Ok(2.));
        assert_eq!(A.nnz(), 2);
    }

    #[test]
    fn test_sparse_product_pruning_settings() {
        let A = SparseMatrix::from_parts(1, 2, vec![0, 1, 2], vec![0, 0], vec![1., 1.]).unwrap();
        let B = SparseMatrix::from_parts(2, 1, vec![0, 2], vec![0, 1], vec![1., -0.9999]).unwrap();

        assert_eq!(A.checked_mul(&B).unwrap().nnz(), 1);

        let settings = crate::settings::SettingsBuilder::default()
            .prune_tolerance(1e-3)
            .build()
            .unwrap();
        let C = A.checked_mul_with(&B, &settings).unwrap();
        assert_eq!(C.size(), (1, 1));
        assert_eq!(C.nnz(), 0);
    }

    #[test]
    fn test_sparse_product_rejects_modified_settings() {
        let A = SparseMatrix::<f64>::identity(2);
        let mut settings = Settings::default();
        settings.prune_tolerance = f64::NAN;
        assert_eq!(
            A.checked_mul_with(&A, &settings),
            Err(MatrixError::InvalidSettings(
                crate::settings::SettingsError::BadFieldValue("prune_tolerance")
            ))
        );
    }
}
