use super::{FloatT, VectorMath};
use itertools::izip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        self.iter_mut().for_each(|x| *x = op(*x));
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        pairwise_sum(self.len(), &|i| self[i] * y[i])
    }

    fn norm(&self) -> T {
        T::sqrt(self.dot(self))
    }

    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = T::max(out, v);
        }
        out
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());
        for (y, &x) in izip!(&mut *self, x) {
            *y = a * x + b * (*y);
        }
        self
    }
}

// Sum of term(0..n), split in halves down to short runs.  The rounding
// error grows with log(n) rather than n.
fn pairwise_sum<T: FloatT>(n: usize, term: &impl Fn(usize) -> T) -> T {
    const BASE_CASE_DIM: usize = 16;

    fn inner<T: FloatT>(start: usize, n: usize, term: &impl Fn(usize) -> T) -> T {
        if n < BASE_CASE_DIM {
            (start..start + n).fold(T::zero(), |acc, i| acc + term(i))
        } else {
            let half = n / 2;
            inner(start, half, term) + inner(start + half, n - half, term)
        }
    }
    inner(0, n, term)
}

#[test]
fn test_dot_product() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);
}

#[test]
fn test_pairwise_sum() {
    let maxlen = 128 * 7 + 1; //awkward length to test base case
    let x: Vec<f64> = (1..=maxlen).map(|x| x as f64).collect();
    let ones = vec![1.; maxlen];

    for i in 0..=x.len() {
        let expected = (i * (i + 1) / 2) as f64;
        assert_eq!(x[0..i].dot(&ones[0..i]), expected);
    }
}

#[test]
fn test_norms() {
    let x = [3., -4.];
    assert_eq!(x.norm(), 5.);
    assert_eq!(x.norm_inf(), 4.);
    assert!([1., f64::NAN].norm_inf().is_nan());
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 2., 3.];
    y.axpby(2., &[1., 1., 1.], -1.);
    assert_eq!(y, vec![1., 0., -1.]);
    y.set(0.).scale(2.);
    assert_eq!(y, vec![0.; 3]);
}
