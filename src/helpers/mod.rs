
/// This module solves the symmetric positive definite systems arising from
/// the normal equations of least squares.
pub mod cholesky {
    use crate::error::DataError;
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

    /// Computes the lower triangular factor `L` such that `A = L L^T`.
    ///
    /// A pivot that is not strictly larger than `100 * n * eps * max(diag(A))`
    /// means `A` is singular up to round-off, in which case
    /// [`DataError::RankDeficient`] is returned.
    pub fn cholesky_factorization<F: Float>(A: ArrayView2<F>) -> Result<Array2<F>, DataError> {
        let n = A.nrows();
        if n != A.ncols() {
            return Err(DataError::ShapeMismatch {
                expected: n,
                found: A.ncols(),
            });
        }

        let max_diag = A.diag().fold(F::zero(), |acc, &a| acc.max(a.abs()));
        let tol = F::cast(100 * n) * F::epsilon() * max_diag;

        let mut L = Array2::<F>::zeros((n, n));
        for j in 0..n {
            let mut pivot = A[[j, j]];
            for k in 0..j {
                pivot -= L[[j, k]] * L[[j, k]];
            }
            if !(pivot > tol) {
                return Err(DataError::RankDeficient);
            }
            let l_jj = pivot.sqrt();
            L[[j, j]] = l_jj;

            for i in (j + 1)..n {
                let mut s = A[[i, j]];
                for k in 0..j {
                    s -= L[[i, k]] * L[[j, k]];
                }
                L[[i, j]] = s / l_jj;
            }
        }
        Ok(L)
    }

    /// Solves `L y = b` for a lower triangular `L`.
    pub fn forward_substitution<F: Float>(
        L: ArrayView2<F>,
        b: ArrayView1<F>,
    ) -> Result<Array1<F>, DataError> {
        let n = b.len();
        let mut y = Array1::<F>::zeros(n);
        for i in 0..n {
            if L[[i, i]] == F::zero() {
                return Err(DataError::RankDeficient);
            }
            let mut s = b[i];
            for k in 0..i {
                s -= L[[i, k]] * y[k];
            }
            y[i] = s / L[[i, i]];
        }
        Ok(y)
    }

    /// Solves `U x = b` for an upper triangular `U`.
    pub fn backward_substitution<F: Float>(
        U: ArrayView2<F>,
        b: ArrayView1<F>,
    ) -> Result<Array1<F>, DataError> {
        let n = b.len();
        let mut x = Array1::<F>::zeros(n);
        for i in (0..n).rev() {
            if U[[i, i]] == F::zero() {
                return Err(DataError::RankDeficient);
            }
            let mut s = b[i];
            for k in (i + 1)..n {
                s -= U[[i, k]] * x[k];
            }
            x[i] = s / U[[i, i]];
        }
        Ok(x)
    }

    /// Solves `A x = b` for a symmetric positive definite `A`.
    ///
    /// The system is scaled to a unit diagonal, `D^-1 A D^-1 (D x) = D^-1 b`
    /// with `D = sqrt(diag(A))`, before being factored. The rank test then
    /// compares each variable against its own scale rather than against the
    /// largest one. A zero diagonal entry is reported as rank deficient.
    pub fn solve_by_cholesky<F: Float>(
        A: ArrayView2<F>,
        b: ArrayView1<F>,
    ) -> Result<Array1<F>, DataError> {
        if A.nrows() != b.len() {
            return Err(DataError::ShapeMismatch {
                expected: A.nrows(),
                found: b.len(),
            });
        }
        let scale = A.diag().mapv(|a| a.sqrt());
        if scale.iter().any(|&s| !(s > F::zero())) {
            return Err(DataError::RankDeficient);
        }
        let A_scaled = Array2::from_shape_fn(A.raw_dim(), |(i, j)| {
            if i == j {
                F::one()
            } else {
                A[[i, j]] / (scale[i] * scale[j])
            }
        });
        let b_scaled = &b / &scale;

        let L = cholesky_factorization(A_scaled.view())?;
        let y = forward_substitution(L.view(), b_scaled.view())?;
        let x_scaled = backward_substitution(L.t(), y.view())?;
        Ok(x_scaled / &scale)
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::datasets::Dataset;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Draws a standard normal design matrix and targets `y = X w + noise`.
    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);
        let X = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap();
        let y = X.dot(&true_w) + noise;

        (X, y)
    }

    /// Generates a house-price table with columns `sqft`, `bedrooms` and
    /// `price`, where `price = 100 * sqft + 50 * bedrooms + noise`.
    pub fn generate_house_prices(n_samples: usize, noise_std: f64, seed: u64) -> Dataset<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0., noise_std).unwrap();

        let mut records = Array2::<f64>::zeros((n_samples, 3));
        for mut row in records.rows_mut() {
            let sqft: f64 = r.gen_range(500.0..3500.0);
            let bedrooms = r.gen_range(1..=5) as f64;
            row[0] = sqft;
            row[1] = bedrooms;
            row[2] = 100. * sqft + 50. * bedrooms + noise.sample(&mut r);
        }
        Dataset::new(vec!["sqft", "bedrooms", "price"], records).unwrap()
    }
}
