//! Sample moments of levels and derivatives.
//!
//! Purpose
//! -------
//! Compute the two 2×2 moment matrices the drift estimator needs:
//!
//! - `C`, the unbiased sample covariance of the levels `(x1, x2)`;
//! - `dC`, the (non-symmetric) covariance of each level with each
//!   derivative, `dC[i, j] = Σ (x_i − x̄_i)(dx_j − d̄x_j) / (N − 1)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs come from a validated [`EulerSeries`], so `N ≥ 2` and all values
//!   are finite.
//! - `C` is symmetric by construction; `dC` is not.
//!
//! Conventions
//! -----------
//! - Matrices are `ndarray::Array2<f64>` with 0-based indices: row/column 0 is
//!   series 1, row/column 1 is series 2.
//! - Means are taken first and deviations accumulated in a second sweep over
//!   the four aligned arrays.

use crate::causality::core::data::EulerSeries;
use ndarray::{Array2, ArrayView1, Zip};

/// Moments — means and the `C` / `dC` matrices of one [`EulerSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct Moments {
    pub mean_x1: f64,
    pub mean_x2: f64,
    pub mean_dx1: f64,
    pub mean_dx2: f64,
    /// Level covariance `C` (2×2, symmetric).
    pub c: Array2<f64>,
    /// Level/derivative covariance `dC` (2×2).
    pub dc: Array2<f64>,
}

impl Moments {
    pub fn from_series(series: &EulerSeries<'_>) -> Self {
        let n = series.n_eff() as f64;
        let mean_x1 = calc_mean(series.x1);
        let mean_x2 = calc_mean(series.x2);
        let mean_dx1 = calc_mean(series.dx1.view());
        let mean_dx2 = calc_mean(series.dx2.view());

        let mut c = Array2::<f64>::zeros((2, 2));
        let mut dc = Array2::<f64>::zeros((2, 2));
        Zip::from(&series.x1).and(&series.x2).and(&series.dx1).and(&series.dx2).for_each(
            |&x1, &x2, &dx1, &dx2| {
                let (e1, e2) = (x1 - mean_x1, x2 - mean_x2);
                let (d1, d2) = (dx1 - mean_dx1, dx2 - mean_dx2);
                c[[0, 0]] += e1 * e1;
                c[[0, 1]] += e1 * e2;
                c[[1, 1]] += e2 * e2;
                dc[[0, 0]] += e1 * d1;
                dc[[0, 1]] += e1 * d2;
                dc[[1, 0]] += e2 * d1;
                dc[[1, 1]] += e2 * d2;
            },
        );
        c[[1, 0]] = c[[0, 1]];
        c /= n - 1.0;
        dc /= n - 1.0;

        Moments { mean_x1, mean_x2, mean_dx1, mean_dx2, c, dc }
    }

    /// `det(C) = C00·C11 − C01·C10`.
    pub fn det_c(&self) -> f64 {
        self.c[[0, 0]] * self.c[[1, 1]] - self.c[[0, 1]] * self.c[[1, 0]]
    }
}

#[inline]
fn calc_mean(data: ArrayView1<'_, f64>) -> f64 {
    data.sum() / data.len() as f64
}
