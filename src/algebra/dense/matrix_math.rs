#![allow(non_snake_case)]
use crate::algebra::*;
use crate::settings::Settings;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

impl<T: FloatT> MatrixMath for DenseMatrix<T> {
    type T = T;

    //scalar mut operations
    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn norm(&self) -> T {
        self.data.norm()
    }

    fn norm_inf(&self) -> T {
        self.data.norm_inf()
    }
}

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// Sum of the diagonal elements.
    ///
    /// Fails with `SquareMatrixRequired` if the logical shape is not square.
    pub fn trace(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            let (rows, cols) = self.size();
            return Err(MatrixError::SquareMatrixRequired { rows, cols });
        }
        // the diagonal does not depend on the orientation
        let n = self.m;
        Ok((0..n).fold(T::zero(), |acc, i| acc + self.data[i + i * n]))
    }

    /// Returns a copy with all elements scaled by `c`
    pub fn scaled(&self, c: T) -> Self {
        let mut out = self.clone();
        out.scale(c);
        out
    }

    /// Overwrites every element with values drawn uniformly from `[-1, 1]`.
    ///
    /// The generator is seeded from `seed` on every call, so equal seeds
    /// produce equal matrices.
    pub fn randomize(&mut self, seed: u64) {
        self.fill_uniform(seed, (-T::one(), T::one()));
    }

    /// As [`randomize`](Self::randomize), sampling from `settings.random_range`
    pub fn randomize_with(&mut self, seed: u64, settings: &Settings<T>) -> Result<(), MatrixError> {
        settings.validate()?;
        self.fill_uniform(seed, settings.random_range);
        Ok(())
    }

    fn fill_uniform(&mut self, seed: u64, range: (T, T)) {
        let (lo, hi) = range;
        let mut rng = StdRng::seed_from_u64(seed);
        let dist = Uniform::new_inclusive(0.0f64, 1.0f64);
        for v in self.data.iter_mut() {
            let u: T = dist.sample(&mut rng).as_T();
            *v = lo + (hi - lo) * u;
        }
    }
}

#[test]
fn test_norm_and_trace() {
    let A = DenseMatrix::from(&[[1., 2.], [3., 4.]]);
    assert_eq!(A.trace(), Ok(5.));
    assert_eq!(A.transpose().trace(), Ok(5.));
    assert!((A.norm() - f64::sqrt(30.)).abs() < 1e-14);
    assert_eq!(A.norm_inf(), 4.);

    let B = DenseMatrix::<f64>::zeros((2, 3));
    assert_eq!(
        B.trace(),
        Err(MatrixError::SquareMatrixRequired { rows: 2, cols: 3 })
    );
}

#[test]
fn test_scale_negate() {
    let mut A = DenseMatrix::from(&[[1., -2.], [3., 4.]]);
    assert_eq!(A.scaled(2.), DenseMatrix::from(&[[2., -4.], [6., 8.]]));
    A.negate();
    assert_eq!(A, DenseMatrix::from(&[[-1., 2.], [-3., -4.]]));
}

#[test]
fn test_randomize_is_seeded() {
    let mut A = DenseMatrix::<f64>::zeros((4, 5));
    let mut B = DenseMatrix::<f64>::zeros((4, 5));
    A.randomize(17);
    B.randomize(17);
    assert_eq!(A, B);
    assert!(A.data().iter().all(|&v| (-1.0..=1.0).contains(&v)));

    B.randomize(18);
    assert_ne!(A, B);

    let settings = crate::settings::SettingsBuilder::default()
        .random_range((2., 3.))
        .build()
        .unwrap();
    A.randomize_with(17, &settings).unwrap();
    assert!(A.data().iter().all(|&v| (2.0..=3.0).contains(&v)));
}

#[test]
fn test_randomize_rejects_modified_settings() {
    let mut A = DenseMatrix::<f64>::zeros((2, 2));
    let mut settings = Settings::default();
    settings.random_range = (1., -1.);
    assert!(matches!(
        A.randomize_with(3, &settings),
        Err(MatrixError::InvalidSettings(_))
    ));
    assert_eq!(A, DenseMatrix::zeros((2, 2)));
}
