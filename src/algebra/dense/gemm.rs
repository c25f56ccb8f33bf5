#![allow(non_snake_case)]

use crate::algebra::*;

// Dense kernels work on logical elements through a strided view of the
// column major storage, so that a single loop nest covers both
// orientations of each operand.  For a physical m x n buffer the
// strides are (1, m) in normal orientation and (m, 1) when transposed.

/// Read-only strided view of dense storage in a fixed orientation
#[derive(Debug, Clone, Copy)]
pub(crate) struct DenseOperand<'a, T> {
    data: &'a [T],
    /// logical rows
    pub(crate) m: usize,
    /// logical columns
    pub(crate) n: usize,
    rs: usize,
    cs: usize,
}

impl<'a, T> DenseOperand<'a, T>
where
    T: FloatT,
{
    pub(crate) fn new(data: &'a [T], physical: (usize, usize), shape: MatrixShape) -> Self {
        let (pm, pn) = physical;
        debug_assert_eq!(data.len(), pm * pn);
        match shape {
            MatrixShape::N => Self {
                data,
                m: pm,
                n: pn,
                rs: 1,
                cs: pm,
            },
            MatrixShape::T => Self {
                data,
                m: pn,
                n: pm,
                rs: pm,
                cs: 1,
            },
        }
    }

    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.rs + j * self.cs]
    }

    pub(crate) fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    // true if the view reads its storage in plain column major order
    fn is_contiguous(&self) -> bool {
        self.rs == 1 && self.cs == self.m
    }
}

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    pub(crate) fn operand(&self) -> DenseOperand<'_, T> {
        DenseOperand::new(&self.data, (self.m, self.n), self.shape())
    }
}

/// `Y = αX + βY` over logical elements.  `Y` may be in either
/// orientation and keeps it.
pub(crate) fn dense_axpby<T: FloatT>(Y: &mut DenseMatrix<T>, X: DenseOperand<'_, T>, α: T, β: T) {
    assert_eq!(Y.size(), X.size());

    // matching orientations share a physical layout
    let same_layout = match Y.shape() {
        MatrixShape::N => X.is_contiguous(),
        MatrixShape::T => X.rs == X.n && X.cs == 1,
    };
    if same_layout {
        Y.data.axpby(α, X.data, β);
        return;
    }

    let (m, n) = Y.size();
    for j in 0..n {
        for i in 0..m {
            let k = Y.index_linear((i, j));
            Y.data[k] = α * X.get(i, j) + β * Y.data[k];
        }
    }
}

/// `C = αA*B + βC` for a normally oriented `C`.
///
/// As with BLAS `?gemm`, `C` is not read when `β` is zero.
pub(crate) fn dense_gemm<T: FloatT>(
    C: &mut DenseMatrix<T>,
    A: DenseOperand<'_, T>,
    B: DenseOperand<'_, T>,
    α: T,
    β: T,
) {
    assert!(!C.is_transposed());
    assert!(A.n == B.m && C.m == A.m && C.n == B.n);

    let (m, n, k) = (A.m, B.n, A.n);
    if m == 0 || n == 0 {
        return;
    }

    if β == T::zero() {
        C.data.set(T::zero());
    } else if β != T::one() {
        C.data.scale(β);
    }

    for j in 0..n {
        let ccol = &mut C.data[(j * m)..((j + 1) * m)];
        for p in 0..k {
            let bpj = α * B.get(p, j);
            if bpj == T::zero() {
                continue;
            }
            for (i, c) in ccol.iter_mut().enumerate() {
                *c += A.get(i, p) * bpj;
            }
        }
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let A = DenseMatrix::from_slice((m, k), &a).unwrap();
    let B = DenseMatrix::from_slice((k, n), &b).unwrap();
    let mut C = DenseMatrix::from_slice((m, n), &c).unwrap();
    dense_gemm(&mut C, A.operand(), B.operand(), 1.0, 1.0);

    assert_eq!(C.data(), &[40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

    // transposed multiply
    let mut C = DenseMatrix::<f64>::zeros((n, m));
    dense_gemm(
        &mut C,
        B.transpose().operand(),
        A.transpose().operand(),
        1.0,
        0.0,
    );

    assert_eq!(C.data(), &[38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);
}

#[test]
fn test_gemm_ignores_c_when_beta_is_zero() {
    let A = DenseMatrix::<f64>::identity(2);
    let mut C = DenseMatrix::from_slice((2, 2), &[f64::NAN; 4]).unwrap();
    dense_gemm(&mut C, A.operand(), A.operand(), 2.0, 0.0);
    assert_eq!(C.data(), &[2.0, 0.0, 0.0, 2.0]);
}

#[test]
fn test_axpby_mixed_orientation() {
    let X = DenseMatrix::from(&[[1., 2., 3.], [4., 5., 6.]]);
    let mut Y = DenseMatrix::<f64>::zeros((3, 2)).transpose();
    dense_axpby(&mut Y, X.operand(), 1.0, 0.0);
    assert_eq!(Y.size(), (2, 3));
    assert!(Y.is_transposed());
    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(Y[(i, j)], X[(i, j)]);
        }
    }

    // same layout path
    let mut Z = X.clone();
    dense_axpby(&mut Z, X.operand(), 2.0, -1.0);
    assert_eq!(Z, X);
}
